//! A single quiz session: the contract a view layer talks to.
//!
//! A session owns its selection, mode and display order; the catalog is
//! shared read-only. Views hold the session and call into it, nothing here
//! is global.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::ReferenceCatalog;
use crate::error::QuizError;
use crate::model::{DocumentedItem, Item};
use crate::scoring::{self, ScoreCard, ScoringPolicy};
use crate::selection::{DisplayMode, ModeChange, Selection, SelectionStore};
use crate::shuffle::DisplayOrder;

/// One interactive run of the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Arc<ReferenceCatalog>,
    order: DisplayOrder,
    store: SelectionStore,
    policy: ScoringPolicy,
}

impl QuizSession {
    /// Start a session, shuffling the display order with `rng`.
    pub fn new<R: Rng + ?Sized>(
        catalog: Arc<ReferenceCatalog>,
        policy: ScoringPolicy,
        rng: &mut R,
    ) -> Self {
        let order = DisplayOrder::new(&catalog, rng);
        tracing::debug!(items = order.len(), %policy, "session started");
        Self {
            catalog,
            order,
            store: SelectionStore::new(),
            policy,
        }
    }

    /// Start a session with a reproducible order.
    pub fn with_seed(catalog: Arc<ReferenceCatalog>, policy: ScoringPolicy, seed: u64) -> Self {
        Self::new(catalog, policy, &mut StdRng::seed_from_u64(seed))
    }

    /// Start a session with an order drawn from the thread RNG.
    pub fn random(catalog: Arc<ReferenceCatalog>, policy: ScoringPolicy) -> Self {
        Self::new(catalog, policy, &mut rand::rng())
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// The shuffled list, identical on every call.
    pub fn display_order(&self) -> &[Item] {
        self.order.items()
    }

    /// Item at a 1-based list position.
    pub fn item_at(&self, position: usize) -> Option<&Item> {
        self.order.at_position(position)
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        self.store.toggle(name)
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.store.is_selected(name)
    }

    pub fn selection(&self) -> &Selection {
        self.store.selection()
    }

    pub fn selected_count(&self) -> usize {
        self.store.len()
    }

    pub fn mode(&self) -> DisplayMode {
        self.store.mode()
    }

    pub fn set_mode(&mut self, mode: DisplayMode) -> Result<ModeChange, QuizError> {
        self.store.set_mode(mode)
    }

    pub fn answer(&mut self) -> Result<ModeChange, QuizError> {
        self.store.answer()
    }

    pub fn back(&mut self) -> Result<ModeChange, QuizError> {
        self.store.back()
    }

    pub fn toggle_audit(&mut self) -> Result<ModeChange, QuizError> {
        self.store.toggle_audit()
    }

    pub fn score(&self) -> usize {
        scoring::score(self.store.selection(), &self.catalog, self.policy)
    }

    pub fn total_real(&self) -> usize {
        self.catalog.total_real()
    }

    pub fn unselected_correct(&self) -> Vec<&DocumentedItem> {
        scoring::unselected_correct(self.store.selection(), &self.catalog)
    }

    pub fn selected_decoys(&self) -> Vec<&str> {
        scoring::selected_decoys(self.store.selection(), &self.catalog)
    }

    pub fn score_card(&self) -> ScoreCard {
        ScoreCard::compute(self.store.selection(), &self.catalog, self.policy)
    }
}
