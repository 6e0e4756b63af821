//! The `selectall validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use selectall_core::catalog::{validate_catalog, CatalogFile, CatalogFormat, BUILTIN_CATALOG};

pub fn execute(catalog_path: Option<PathBuf>) -> Result<()> {
    let (label, file) = match &catalog_path {
        Some(path) => (path.display().to_string(), CatalogFile::load(path)?),
        None => (
            "built-in catalog".to_string(),
            CatalogFile::parse_str(BUILTIN_CATALOG, CatalogFormat::Toml, Path::new("<builtin>"))?,
        ),
    };

    println!(
        "Catalog: {label} ({} real, {} decoys)",
        file.real.len(),
        file.decoys.len()
    );

    let warnings = validate_catalog(&file);
    for w in &warnings {
        let prefix = w
            .name
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
