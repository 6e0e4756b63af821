//! Merge config file, environment and command-line flags.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use selectall_core::catalog::ReferenceCatalog;
use selectall_core::config::load_config_from;
use selectall_core::model::Locale;
use selectall_core::scoring::ScoringPolicy;

/// Values given on the command line; each wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub policy: Option<ScoringPolicy>,
    pub locale: Option<Locale>,
    pub catalog: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Everything a command needs to build a session.
pub struct Settings {
    pub policy: ScoringPolicy,
    pub locale: Locale,
    pub seed: Option<u64>,
    pub catalog: Arc<ReferenceCatalog>,
}

impl Settings {
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let config = load_config_from(overrides.config.as_deref())?;

        let catalog_path = overrides.catalog.or(config.catalog);
        let catalog = ReferenceCatalog::load_or_builtin(catalog_path.as_deref())?;

        let settings = Settings {
            policy: overrides.policy.unwrap_or(config.policy),
            locale: overrides.locale.unwrap_or(config.locale),
            seed: overrides.seed.or(config.seed),
            catalog: Arc::new(catalog),
        };
        tracing::debug!(
            policy = %settings.policy,
            locale = %settings.locale,
            seed = ?settings.seed,
            "resolved settings"
        );
        Ok(settings)
    }
}
