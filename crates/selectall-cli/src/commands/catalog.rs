//! The `selectall catalog` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use selectall_core::model::Item;

use crate::settings::{Overrides, Settings};

pub fn execute(overrides: Overrides, kind: String) -> Result<()> {
    let settings = Settings::resolve(overrides)?;
    let (show_real, show_decoys) = match kind.as_str() {
        "real" => (true, false),
        "decoys" | "decoy" => (false, true),
        "all" => (true, true),
        other => anyhow::bail!("unknown kind: {other} (expected real, decoys or all)"),
    };

    let mut table = Table::new();
    table.set_header(vec!["Name", "Kind", "Description"]);

    let mut rows = 0;
    for item in settings.catalog.items() {
        let row = match &item {
            Item::Documented(doc) if show_real => vec![
                Cell::new(&doc.name),
                Cell::new("real"),
                Cell::new(doc.description.get(settings.locale)),
            ],
            Item::Decoy { name } if show_decoys => {
                vec![Cell::new(name), Cell::new("decoy"), Cell::new("")]
            }
            Item::Documented(_) | Item::Decoy { .. } => continue,
        };
        table.add_row(row);
        rows += 1;
    }

    println!("{table}");
    println!("{rows} item(s)");
    Ok(())
}
