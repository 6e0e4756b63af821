//! Scoring of a selection against a reference catalog.
//!
//! Everything here is a pure function of the selection and the catalog, so
//! results can be recomputed on every render without caching.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::error::QuizError;
use crate::i18n::Message;
use crate::model::{DocumentedItem, Locale};
use crate::selection::Selection;

/// How decoy picks affect the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPolicy {
    /// Each selected decoy cancels one correct pick; the total floors at 0.
    #[default]
    Strict,
    /// Only correct picks count.
    Lenient,
}

impl ScoringPolicy {
    /// Whether the view should warn that decoys cost points.
    pub fn penalizes_decoys(self) -> bool {
        match self {
            ScoringPolicy::Strict => true,
            ScoringPolicy::Lenient => false,
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Strict => write!(f, "strict"),
            ScoringPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "penalized" => Ok(ScoringPolicy::Strict),
            "lenient" | "unpenalized" => Ok(ScoringPolicy::Lenient),
            other => Err(QuizError::UnknownPolicy(other.to_string())),
        }
    }
}

/// `|selected ∩ Real|`.
pub fn correct_count(selection: &Selection, catalog: &ReferenceCatalog) -> usize {
    selection.iter().filter(|n| catalog.is_real(n)).count()
}

/// `|selected ∩ Decoys|`.
pub fn decoy_count(selection: &Selection, catalog: &ReferenceCatalog) -> usize {
    selection.iter().filter(|n| catalog.is_decoy(n)).count()
}

/// Score under `policy`. Names in neither list count for nothing.
pub fn score(selection: &Selection, catalog: &ReferenceCatalog, policy: ScoringPolicy) -> usize {
    let correct = correct_count(selection, catalog);
    match policy {
        ScoringPolicy::Strict => correct.saturating_sub(decoy_count(selection, catalog)),
        ScoringPolicy::Lenient => correct,
    }
}

/// Real items the user did not pick, in catalog order.
pub fn unselected_correct<'a>(
    selection: &Selection,
    catalog: &'a ReferenceCatalog,
) -> Vec<&'a DocumentedItem> {
    catalog
        .real()
        .iter()
        .filter(|item| !selection.contains(&item.name))
        .collect()
}

/// Decoys the user picked, in pick order.
pub fn selected_decoys<'s>(selection: &'s Selection, catalog: &ReferenceCatalog) -> Vec<&'s str> {
    selection.iter().filter(|n| catalog.is_decoy(n)).collect()
}

/// Everything a results view or report needs, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub policy: ScoringPolicy,
    pub score: usize,
    pub total_real: usize,
    /// Number of names selected, including unknown ones.
    pub selected: usize,
    pub correct: usize,
    pub decoys_selected: usize,
    /// Names of real items not picked.
    pub unselected_correct: Vec<String>,
    /// Decoy names that were picked.
    pub selected_decoys: Vec<String>,
}

impl ScoreCard {
    pub fn compute(selection: &Selection, catalog: &ReferenceCatalog, policy: ScoringPolicy) -> Self {
        Self {
            policy,
            score: score(selection, catalog, policy),
            total_real: catalog.total_real(),
            selected: selection.len(),
            correct: correct_count(selection, catalog),
            decoys_selected: decoy_count(selection, catalog),
            unselected_correct: unselected_correct(selection, catalog)
                .into_iter()
                .map(|item| item.name.clone())
                .collect(),
            selected_decoys: selected_decoys(selection, catalog)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Score as a fraction of the real items, 0.0 for an empty catalog.
    pub fn ratio(&self) -> f64 {
        if self.total_real == 0 {
            0.0
        } else {
            self.score as f64 / self.total_real as f64
        }
    }

    /// Save the score card as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize score card")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write score card to {}", path.display()))?;
        Ok(())
    }

    /// Format the score card as markdown in `locale`.
    pub fn to_markdown(&self, locale: Locale) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}:** {}/{} ({:.1}%)\n\n",
            Message::Score.text(locale),
            self.score,
            self.total_real,
            self.ratio() * 100.0
        ));

        if self.policy.penalizes_decoys() {
            md.push_str(Message::PenaltyNotice.text(locale));
            md.push_str("\n\n");
        }

        md.push_str(&format!(
            "### {} {}{}\n\n",
            Message::Unselected.text(locale),
            self.unselected_correct.len(),
            Message::ItemsSuffix.text(locale)
        ));
        for name in &self.unselected_correct {
            md.push_str(&format!("- `{name}`\n"));
        }
        md.push('\n');

        md.push_str(&format!(
            "### {} {}{}\n\n",
            Message::NonExistentSelected.text(locale),
            self.selected_decoys.len(),
            Message::ItemsSuffix.text(locale)
        ));
        for name in &self.selected_decoys {
            md.push_str(&format!("- `{name}`\n"));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{abc_x, catalog};

    fn names(items: &[&DocumentedItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn policy_parse_and_display() {
        assert_eq!("strict".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Strict);
        assert_eq!("Lenient".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Lenient);
        assert!("harsh".parse::<ScoringPolicy>().is_err());
        assert_eq!(ScoringPolicy::default(), ScoringPolicy::Strict);
        assert_eq!(ScoringPolicy::Lenient.to_string(), "lenient");
    }

    #[test]
    fn one_real_one_decoy() {
        let catalog = abc_x();
        let sel: Selection = ["a", "x"].into_iter().collect();
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Strict), 0);
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Lenient), 1);
        assert_eq!(names(&unselected_correct(&sel, &catalog)), ["b", "c"]);
        assert_eq!(selected_decoys(&sel, &catalog), ["x"]);
    }

    #[test]
    fn nothing_selected() {
        let catalog = abc_x();
        let sel = Selection::new();
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Strict), 0);
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Lenient), 0);
        assert_eq!(names(&unselected_correct(&sel, &catalog)), ["a", "b", "c"]);
        assert!(selected_decoys(&sel, &catalog).is_empty());
    }

    #[test]
    fn everything_selected() {
        let catalog = catalog(&["a", "b", "c"], &["x", "y"]);
        let sel: Selection = ["a", "b", "c", "x", "y"].into_iter().collect();
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Strict), 1);
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Lenient), 3);
        assert!(unselected_correct(&sel, &catalog).is_empty());
    }

    #[test]
    fn strict_floors_at_zero() {
        let catalog = catalog(&["a"], &["x", "y", "z"]);
        let sel: Selection = ["a", "x", "y", "z"].into_iter().collect();
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Strict), 0);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let catalog = abc_x();
        let sel: Selection = ["a", "ghost"].into_iter().collect();
        assert_eq!(correct_count(&sel, &catalog), 1);
        assert_eq!(decoy_count(&sel, &catalog), 0);
        assert_eq!(score(&sel, &catalog, ScoringPolicy::Strict), 1);
        assert!(selected_decoys(&sel, &catalog).is_empty());
    }

    #[test]
    fn selected_decoys_follow_pick_order() {
        let catalog = catalog(&["a"], &["x", "y", "z"]);
        let sel: Selection = ["z", "a", "x"].into_iter().collect();
        assert_eq!(selected_decoys(&sel, &catalog), ["z", "x"]);
    }

    #[test]
    fn score_card_summarises() {
        let catalog = abc_x();
        let sel: Selection = ["a", "x", "ghost"].into_iter().collect();
        let card = ScoreCard::compute(&sel, &catalog, ScoringPolicy::Strict);
        assert_eq!(card.score, 0);
        assert_eq!(card.total_real, 3);
        assert_eq!(card.selected, 3);
        assert_eq!(card.correct, 1);
        assert_eq!(card.decoys_selected, 1);
        assert_eq!(card.unselected_correct, ["b", "c"]);
        assert_eq!(card.selected_decoys, ["x"]);
        assert_eq!(card.ratio(), 0.0);
    }

    #[test]
    fn ratio_handles_empty_catalog() {
        let catalog = catalog(&[], &[]);
        let card = ScoreCard::compute(&Selection::new(), &catalog, ScoringPolicy::Lenient);
        assert_eq!(card.ratio(), 0.0);
    }

    #[test]
    fn markdown_output() {
        let catalog = abc_x();
        let sel: Selection = ["a", "b", "x"].into_iter().collect();
        let card = ScoreCard::compute(&sel, &catalog, ScoringPolicy::Strict);

        let md = card.to_markdown(Locale::En);
        assert!(md.contains("**Score:** 1/3 (33.3%)"));
        assert!(md.contains("penalized"));
        assert!(md.contains("### Unselected 1 items"));
        assert!(md.contains("- `c`"));
        assert!(md.contains("### Non-existent selected 1 items"));
        assert!(md.contains("- `x`"));

        let lenient = ScoreCard::compute(&sel, &catalog, ScoringPolicy::Lenient);
        let md = lenient.to_markdown(Locale::Ja);
        assert!(md.contains("**スコア:** 2/3"));
        assert!(!md.contains("減点"));
    }

    #[test]
    fn json_roundtrip() {
        let catalog = abc_x();
        let sel: Selection = ["c"].into_iter().collect();
        let card = ScoreCard::compute(&sel, &catalog, ScoringPolicy::Lenient);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("card.json");
        card.save_json(&path).unwrap();
        let loaded: ScoreCard =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, card);
    }
}
