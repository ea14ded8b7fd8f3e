//! Foundations: per-suit piles built upward from the ace.
//!
//! An empty foundation takes any ace; after that it follows the suit of its
//! base card. Only single cards are accepted.

use super::id::ReceptacleId;
use super::receptacle::{Pile, Receptacle};
use crate::cards::{Card, Suit, RANKS_PER_SUIT};
use crate::core::error::Rejection;
use crate::rules::continues_foundation;

/// A foundation pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Foundation {
    index: u8,
    pile: Pile,
}

impl Foundation {
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self {
            index,
            pile: Pile::new(),
        }
    }

    /// Suit being built, or `None` while empty.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.pile.cards().front().map(Card::suit)
    }

    /// True once ace through king are in place.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pile.len() == RANKS_PER_SUIT
    }
}

impl Receptacle for Foundation {
    fn id(&self) -> ReceptacleId {
        ReceptacleId::Foundation(self.index)
    }

    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    fn can_accept(&self, run: &[Card]) -> Result<(), Rejection> {
        match run {
            [] => Err(Rejection::EmptyRun),
            [card] => continues_foundation(self.top(), card),
            _ => Err(Rejection::MultiCardRun),
        }
    }
}
