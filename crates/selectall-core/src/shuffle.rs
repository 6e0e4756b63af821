//! Display-order shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::ReferenceCatalog;
use crate::model::Item;

/// Uniformly random permutation of a copy of `items` (Fisher–Yates).
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// The on-screen order of a session, fixed when the session starts.
///
/// Reshuffling on every render would move items under the user's cursor, so
/// the order is computed once and only read afterwards.
#[derive(Debug, Clone)]
pub struct DisplayOrder {
    items: Vec<Item>,
}

impl DisplayOrder {
    /// Shuffle decoys and real items together.
    pub fn new<R: Rng + ?Sized>(catalog: &ReferenceCatalog, rng: &mut R) -> Self {
        Self {
            items: shuffled(&catalog.items(), rng),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a 1-based position, as shown in numbered lists.
    pub fn at_position(&self, position: usize) -> Option<&Item> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }
}
