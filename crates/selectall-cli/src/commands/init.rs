//! The `selectall init` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use selectall_core::catalog::ReferenceCatalog;

pub fn execute(from: Option<PathBuf>) -> Result<()> {
    // Create selectall.toml
    if Path::new("selectall.toml").exists() {
        println!("selectall.toml already exists, skipping.");
    } else {
        std::fs::write("selectall.toml", SAMPLE_CONFIG)?;
        println!("Created selectall.toml");
    }

    // Written de-duplicated, in TOML whatever the source format
    if Path::new("catalog.toml").exists() {
        println!("catalog.toml already exists, skipping.");
    } else {
        let catalog = ReferenceCatalog::load_or_builtin(from.as_deref())?;
        std::fs::write("catalog.toml", catalog.to_file().to_toml()?)?;
        println!(
            "Created catalog.toml ({} real, {} decoys)",
            catalog.total_real(),
            catalog.decoys().len()
        );
    }

    println!("\nNext steps:");
    println!("  1. Edit catalog.toml to add elements or decoys");
    println!("  2. Run: selectall validate --catalog catalog.toml");
    println!("  3. Run: selectall play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# selectall configuration

# strict: each non-existent element picked cancels one correct pick
# lenient: only correct picks count
policy = "strict"

# ja or en
locale = "ja"

catalog = "catalog.toml"

# seed = 42
"#;
