//! Pending selections.

use crate::cards::{same_cards, Card, Run};
use crate::receptacles::ReceptacleId;

/// A lifted run waiting to be placed, tagged with where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    source: ReceptacleId,
    cards: Run,
}

impl Selection {
    pub(crate) fn new(source: ReceptacleId, cards: Run) -> Self {
        Self { source, cards }
    }

    /// Receptacle the run was lifted from.
    #[must_use]
    pub fn source(&self) -> ReceptacleId {
        self.source
    }

    /// The lifted cards, head first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True if `run` lifted from `source` is this selection.
    #[must_use]
    pub fn matches(&self, run: &[Card], source: ReceptacleId) -> bool {
        self.source == source && same_cards(&self.cards, run)
    }
}
