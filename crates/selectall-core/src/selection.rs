//! Selection state and display mode for one quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// Which view the session is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Answering in progress.
    #[default]
    Choosing,
    /// Score and per-item correctness shown.
    Reviewing,
    /// Review plus the missed real items and the selected decoys.
    Auditing,
}

impl DisplayMode {
    /// Whether the session may move from `self` to `to`.
    ///
    /// Staying in the same mode is always allowed. The only forbidden move is
    /// straight from choosing into auditing.
    pub fn can_transition_to(self, to: DisplayMode) -> bool {
        !matches!((self, to), (DisplayMode::Choosing, DisplayMode::Auditing))
    }

    /// Modes in which results are visible.
    pub fn shows_results(self) -> bool {
        match self {
            DisplayMode::Choosing => false,
            DisplayMode::Reviewing | DisplayMode::Auditing => true,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Choosing => write!(f, "choosing"),
            DisplayMode::Reviewing => write!(f, "reviewing"),
            DisplayMode::Auditing => write!(f, "auditing"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "choosing" | "q" => Ok(DisplayMode::Choosing),
            "reviewing" | "a" => Ok(DisplayMode::Reviewing),
            "auditing" | "n" => Ok(DisplayMode::Auditing),
            other => Err(QuizError::UnknownMode(other.to_string())),
        }
    }
}

/// Outcome of a successful mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub from: DisplayMode,
    pub to: DisplayMode,
}

impl ModeChange {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// The view should scroll back to the top. Set whenever results are
    /// (re)entered, even when the mode was already showing them.
    pub fn reset_viewport(&self) -> bool {
        self.to.shows_results()
    }
}

/// The set of names the user has toggled on.
///
/// Insertion order is kept so reports list picks in the order they were
/// made. Sizes are small (one catalog), so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name`; returns `true` if it is now selected.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names in the order they were picked.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Selection {
    /// Builds a selection by toggling each name once, so a name listed twice
    /// ends up unselected.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for name in iter {
            selection.toggle(name.as_ref());
        }
        selection
    }
}

/// Selection plus display mode: the mutable half of a session.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selection: Selection,
    mode: DisplayMode,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        let selected = self.selection.toggle(name);
        tracing::debug!(name, selected, "toggled");
        selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Move to `mode`, rejecting choosing → auditing.
    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<ModeChange, QuizError> {
        let from = self.mode;
        if !from.can_transition_to(mode) {
            return Err(QuizError::InvalidTransition { from, to: mode });
        }
        self.mode = mode;
        if from != mode {
            tracing::debug!(%from, to = %mode, "display mode changed");
        }
        Ok(ModeChange { from, to: mode })
    }

    /// Choosing → reviewing.
    pub fn answer(&mut self) -> Result<ModeChange, QuizError> {
        self.set_mode(DisplayMode::Reviewing)
    }

    /// Back to choosing from either result view.
    pub fn back(&mut self) -> Result<ModeChange, QuizError> {
        self.set_mode(DisplayMode::Choosing)
    }

    /// Reviewing ⇄ auditing. Fails while choosing.
    pub fn toggle_audit(&mut self) -> Result<ModeChange, QuizError> {
        match self.mode {
            DisplayMode::Choosing => Err(QuizError::InvalidTransition {
                from: DisplayMode::Choosing,
                to: DisplayMode::Auditing,
            }),
            DisplayMode::Reviewing => self.set_mode(DisplayMode::Auditing),
            DisplayMode::Auditing => self.set_mode(DisplayMode::Reviewing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_noop() {
        let mut sel = Selection::new();
        sel.toggle("a");
        let before = sel.clone();
        assert!(sel.toggle("b"));
        assert!(!sel.toggle("b"));
        assert_eq!(sel, before);
    }

    #[test]
    fn selection_keeps_pick_order() {
        let sel: Selection = ["c", "a", "b", "a"].into_iter().collect();
        assert_eq!(sel.iter().collect::<Vec<_>>(), ["c", "b"]);
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("c"));
        assert!(!sel.contains("a"));
    }

    #[test]
    fn unknown_names_are_accepted() {
        let mut store = SelectionStore::new();
        assert!(store.toggle("not-an-element"));
        assert!(store.is_selected("not-an-element"));
    }

    #[test]
    fn initial_mode_is_choosing() {
        let store = SelectionStore::new();
        assert_eq!(store.mode(), DisplayMode::Choosing);
        assert!(store.is_empty());
    }

    #[test]
    fn answer_then_audit_then_back() {
        let mut store = SelectionStore::new();
        let change = store.answer().unwrap();
        assert!(change.changed());
        assert!(change.reset_viewport());
        assert_eq!(store.mode(), DisplayMode::Reviewing);

        store.toggle_audit().unwrap();
        assert_eq!(store.mode(), DisplayMode::Auditing);
        store.toggle_audit().unwrap();
        assert_eq!(store.mode(), DisplayMode::Reviewing);

        store.set_mode(DisplayMode::Auditing).unwrap();
        let change = store.back().unwrap();
        assert_eq!(change.from, DisplayMode::Auditing);
        assert!(!change.reset_viewport());
        assert_eq!(store.mode(), DisplayMode::Choosing);
    }

    #[test]
    fn choosing_cannot_jump_to_auditing() {
        let mut store = SelectionStore::new();
        let err = store.set_mode(DisplayMode::Auditing).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidTransition {
                from: DisplayMode::Choosing,
                to: DisplayMode::Auditing
            }
        );
        assert!(store.toggle_audit().is_err());
        assert_eq!(store.mode(), DisplayMode::Choosing);
    }

    #[test]
    fn same_mode_is_allowed() {
        let mut store = SelectionStore::new();
        store.answer().unwrap();
        store.toggle_audit().unwrap();
        let change = store.set_mode(DisplayMode::Auditing).unwrap();
        assert!(!change.changed());
        assert!(change.reset_viewport());
    }

    #[test]
    fn mode_parse_and_display() {
        assert_eq!("reviewing".parse::<DisplayMode>().unwrap(), DisplayMode::Reviewing);
        assert_eq!("n".parse::<DisplayMode>().unwrap(), DisplayMode::Auditing);
        assert!("done".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::Auditing.to_string(), "auditing");
    }
}
