//! Free cells: single-card parking spaces.

use super::id::ReceptacleId;
use super::receptacle::{Pile, Receptacle};
use crate::cards::Card;
use crate::core::error::Rejection;

/// A free cell. Holds at most one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeCell {
    index: u8,
    pile: Pile,
}

impl FreeCell {
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self {
            index,
            pile: Pile::new(),
        }
    }

    /// Number of cards held (0 or 1).
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.pile.len()
    }
}

impl Receptacle for FreeCell {
    fn id(&self) -> ReceptacleId {
        ReceptacleId::FreeCell(self.index)
    }

    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    fn can_accept(&self, run: &[Card]) -> Result<(), Rejection> {
        if run.is_empty() {
            return Err(Rejection::EmptyRun);
        }
        if !self.is_empty() {
            return Err(Rejection::CellOccupied);
        }
        if run.len() != 1 {
            return Err(Rejection::MultiCardRun);
        }
        Ok(())
    }
}
