//! The `selectall score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use selectall_core::i18n::Message;
use selectall_core::model::Locale;
use selectall_core::scoring::ScoreCard;
use selectall_core::selection::Selection;

use crate::settings::{Overrides, Settings};

pub fn execute(
    overrides: Overrides,
    select: Vec<String>,
    selection_file: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let settings = Settings::resolve(overrides)?;

    let mut names: Vec<String> = select
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if let Some(path) = &selection_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read selection file: {}", path.display()))?;
        names.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_string),
        );
    }

    let mut selection = Selection::new();
    for name in &names {
        if selection.contains(name) {
            tracing::warn!(name = %name, "listed more than once, counted once");
            continue;
        }
        if !settings.catalog.is_real(name) && !settings.catalog.is_decoy(name) {
            tracing::warn!(name = %name, "not in catalog, ignored by scoring");
        }
        selection.toggle(name);
    }

    let card = ScoreCard::compute(&selection, &settings.catalog, settings.policy);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&card)?),
        "markdown" | "md" => println!("{}", card.to_markdown(settings.locale)),
        _ => print_summary(&card, settings.locale),
    }

    if let Some(path) = output {
        card.save_json(&path)?;
        eprintln!("Score card saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(card: &ScoreCard, locale: Locale) {
    let mut table = Table::new();
    table.add_row(vec![
        Cell::new(Message::Score.text(locale)),
        Cell::new(format!(
            "{}/{} ({:.1}%)",
            card.score,
            card.total_real,
            card.ratio() * 100.0
        )),
    ]);
    table.add_row(vec![Cell::new(Message::Policy.text(locale)), Cell::new(card.policy)]);
    table.add_row(vec![
        Cell::new(Message::Selected.text(locale)),
        Cell::new(card.selected),
    ]);
    table.add_row(vec![
        Cell::new(Message::Unselected.text(locale)),
        Cell::new(card.unselected_correct.len()),
    ]);
    table.add_row(vec![
        Cell::new(Message::NonExistentSelected.text(locale)),
        Cell::new(card.decoys_selected),
    ]);
    println!("{table}");

    if !card.selected_decoys.is_empty() {
        println!(
            "\n{}: {}",
            Message::NonExistentSelected.text(locale),
            card.selected_decoys.join(", ")
        );
    }
}
