//! selectall-core — catalog, selection state, and scoring.
//!
//! This crate holds everything about the select-all-html quiz that is not
//! rendering: the reference catalog of real and decoy element names, the
//! per-session selection and display mode, the fixed shuffled order, and the
//! scoring rules. View layers drive a [`session::QuizSession`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod shuffle;

#[cfg(test)]
pub(crate) mod testing;
