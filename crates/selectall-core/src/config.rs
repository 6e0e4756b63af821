//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Locale;
use crate::scoring::ScoringPolicy;

/// Top-level selectall configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// How decoy picks are scored.
    #[serde(default)]
    pub policy: ScoringPolicy,
    /// Locale for descriptions, links and UI text.
    #[serde(default)]
    pub locale: Locale,
    /// Catalog file to use instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Fixed shuffle seed; a fresh order is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `selectall.toml` in the current directory
/// 2. `~/.config/selectall/config.toml`
///
/// Environment variable overrides: `SELECTALL_POLICY`, `SELECTALL_LOCALE`,
/// `SELECTALL_SEED`.
///
/// An explicit `path` must exist; otherwise the default locations are
/// searched and a missing file means defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("selectall.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content, &path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

/// Parse config TOML; relative catalog paths resolve against the file's
/// directory.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<QuizConfig> {
    let mut config: QuizConfig = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;

    if let Some(dir) = source_path.parent() {
        config.catalog = config
            .catalog
            .take()
            .map(|c| if c.is_relative() { dir.join(c) } else { c });
    }

    Ok(config)
}

/// Apply `SELECTALL_*` overrides read through `lookup`.
fn apply_env_overrides(
    config: &mut QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(policy) = lookup("SELECTALL_POLICY") {
        config.policy = policy.parse::<ScoringPolicy>().context("invalid SELECTALL_POLICY")?;
    }
    if let Some(locale) = lookup("SELECTALL_LOCALE") {
        config.locale = locale.parse::<Locale>().context("invalid SELECTALL_LOCALE")?;
    }
    if let Some(seed) = lookup("SELECTALL_SEED") {
        config.seed = Some(seed.trim().parse::<u64>().context("invalid SELECTALL_SEED")?);
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("selectall"))
}
