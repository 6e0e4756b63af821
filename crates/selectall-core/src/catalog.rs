//! Reference catalog: the real elements and the decoys.
//!
//! Catalogs are read from TOML (or JSON, chosen by file extension) and are
//! immutable once built. A default catalog of HTML elements is compiled into
//! the crate.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{DocumentedItem, Item};

/// The catalog shipped with the crate.
pub const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// On-disk catalog layout, before de-duplication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub real: Vec<DocumentedItem>,
    #[serde(default)]
    pub decoys: Vec<DecoyEntry>,
}

/// A decoy as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoyEntry {
    pub name: String,
}

/// Data format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Guess the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "json") {
            CatalogFormat::Json
        } else {
            CatalogFormat::Toml
        }
    }
}

impl CatalogFile {
    /// Read and parse a catalog file without building the catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
        Self::parse_str(&content, CatalogFormat::from_path(path), path)
    }

    /// Parse catalog text (useful for testing).
    pub fn parse_str(content: &str, format: CatalogFormat, source_path: &Path) -> Result<Self> {
        match format {
            CatalogFormat::Toml => toml::from_str(content)
                .with_context(|| format!("failed to parse TOML: {}", source_path.display())),
            CatalogFormat::Json => serde_json::from_str(content)
                .with_context(|| format!("failed to parse JSON: {}", source_path.display())),
        }
    }

    /// Render as TOML, in the same layout `parse_str` accepts.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize catalog")
    }
}

/// The ground-truth list and the decoy list.
///
/// Names are de-duplicated within each list (first occurrence wins). A name
/// that appears in both lists is kept in both; use [`validate_catalog`] to
/// find such problems.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    real: Vec<DocumentedItem>,
    decoys: Vec<String>,
    real_names: HashSet<String>,
    decoy_names: HashSet<String>,
}

impl ReferenceCatalog {
    pub fn new(real: Vec<DocumentedItem>, decoys: Vec<String>) -> Self {
        let mut real_names = HashSet::new();
        let real: Vec<DocumentedItem> = real
            .into_iter()
            .filter(|item| real_names.insert(item.name.clone()))
            .collect();

        let mut decoy_names = HashSet::new();
        let decoys: Vec<String> = decoys
            .into_iter()
            .filter(|name| decoy_names.insert(name.clone()))
            .collect();

        Self {
            real,
            decoys,
            real_names,
            decoy_names,
        }
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        let file = CatalogFile::parse_str(
            BUILTIN_CATALOG,
            CatalogFormat::Toml,
            Path::new("<builtin>"),
        )?;
        Ok(Self::from(file))
    }

    /// Load a catalog from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = Self::from(CatalogFile::load(path)?);
        tracing::info!(
            path = %path.display(),
            real = catalog.real.len(),
            decoys = catalog.decoys.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    /// Real items in their declared order.
    pub fn real(&self) -> &[DocumentedItem] {
        &self.real
    }

    /// Decoy names in their declared order.
    pub fn decoys(&self) -> &[String] {
        &self.decoys
    }

    pub fn total_real(&self) -> usize {
        self.real.len()
    }

    pub fn is_real(&self, name: &str) -> bool {
        self.real_names.contains(name)
    }

    pub fn is_decoy(&self, name: &str) -> bool {
        self.decoy_names.contains(name)
    }

    /// Look up a name, preferring the real list.
    pub fn get(&self, name: &str) -> Option<Item> {
        if let Some(item) = self.real.iter().find(|i| i.name == name) {
            return Some(Item::Documented(item.clone()));
        }
        self.is_decoy(name).then(|| Item::decoy(name))
    }

    /// Decoys followed by real items, unshuffled.
    pub fn items(&self) -> Vec<Item> {
        self.decoys
            .iter()
            .map(Item::decoy)
            .chain(self.real.iter().cloned().map(Item::Documented))
            .collect()
    }

    /// Convert back to the on-disk layout.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            real: self.real.clone(),
            decoys: self
                .decoys
                .iter()
                .map(|name| DecoyEntry { name: name.clone() })
                .collect(),
        }
    }
}

impl From<CatalogFile> for ReferenceCatalog {
    fn from(file: CatalogFile) -> Self {
        ReferenceCatalog::new(
            file.real,
            file.decoys.into_iter().map(|d| d.name).collect(),
        )
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending name (if applicable).
    pub name: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_name(name: &str, message: String) -> Self {
        Self {
            name: Some(name.to_string()),
            message,
        }
    }
}

/// Validate a raw catalog for common data problems.
///
/// Problems never stop a catalog from loading; scoring simply ignores what it
/// cannot classify.
pub fn validate_catalog(file: &CatalogFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if file.real.is_empty() {
        warnings.push(ValidationWarning {
            name: None,
            message: "catalog has no real items".to_string(),
        });
    }
    if file.decoys.is_empty() {
        warnings.push(ValidationWarning {
            name: None,
            message: "catalog has no decoys".to_string(),
        });
    }

    let mut seen_real = HashSet::new();
    for item in &file.real {
        if item.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                name: None,
                message: "real item with empty name".to_string(),
            });
            continue;
        }
        if !seen_real.insert(item.name.as_str()) {
            warnings.push(ValidationWarning::for_name(
                &item.name,
                format!("duplicate real item: {}", item.name),
            ));
        }
        if item.description.ja.trim().is_empty() || item.description.en.trim().is_empty() {
            warnings.push(ValidationWarning::for_name(
                &item.name,
                "missing description in one or more locales".to_string(),
            ));
        }
        for url in [
            &item.specification_url,
            &item.reference_url.ja,
            &item.reference_url.en,
        ] {
            if !is_http_url(url) {
                warnings.push(ValidationWarning::for_name(
                    &item.name,
                    format!("not an http(s) URL: {url:?}"),
                ));
            }
        }
    }

    let mut seen_decoys = HashSet::new();
    for decoy in &file.decoys {
        if decoy.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                name: None,
                message: "decoy with empty name".to_string(),
            });
            continue;
        }
        if !seen_decoys.insert(decoy.name.as_str()) {
            warnings.push(ValidationWarning::for_name(
                &decoy.name,
                format!("duplicate decoy: {}", decoy.name),
            ));
        }
        if seen_real.contains(decoy.name.as_str()) {
            warnings.push(ValidationWarning::for_name(
                &decoy.name,
                format!("name is both real and a decoy: {}", decoy.name),
            ));
        }
    }

    warnings
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
