//! Quiz error types.
//!
//! Scoring and selection never fail; these errors cover rejected mode
//! transitions and unparseable user-supplied names for policies, locales,
//! and modes. File loading uses `anyhow` with context instead.

use thiserror::Error;

use crate::selection::DisplayMode;

/// Errors raised by the quiz core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The requested display mode cannot be reached from the current one.
    #[error("cannot switch from {from} to {to}")]
    InvalidTransition { from: DisplayMode, to: DisplayMode },

    /// A scoring policy name was not recognised.
    #[error("unknown scoring policy: {0}")]
    UnknownPolicy(String),

    /// A locale name was not recognised.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// A display mode name was not recognised.
    #[error("unknown display mode: {0}")]
    UnknownMode(String),
}

impl QuizError {
    /// Returns `true` if this error came from a mode transition rather than
    /// from parsing user input.
    pub fn is_transition(&self) -> bool {
        matches!(self, QuizError::InvalidTransition { .. })
    }
}
