//! Tableau columns.
//!
//! Columns build downward in alternating colors. Any run may go onto an
//! empty column. A run may be lifted only if it is itself a valid
//! descending, alternating sequence that fits the current drag capacity.

use super::id::ReceptacleId;
use super::receptacle::{Pile, Receptacle};
use crate::cards::{Card, CardKey};
use crate::core::error::Rejection;
use crate::rules::{check_liftable, continues_tableau};

/// One tableau column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableauColumn {
    index: u8,
    pile: Pile,
}

impl TableauColumn {
    /// Create an empty column.
    #[must_use]
    pub fn new(index: u8) -> Self {
        Self {
            index,
            pile: Pile::new(),
        }
    }

    /// Create a column holding `cards`, bottom first.
    pub fn with_cards(index: u8, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            index,
            pile: Pile::from_cards(cards),
        }
    }
}

impl Receptacle for TableauColumn {
    fn id(&self) -> ReceptacleId {
        ReceptacleId::Tableau(self.index)
    }

    fn pile(&self) -> &Pile {
        &self.pile
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    fn can_accept(&self, run: &[Card]) -> Result<(), Rejection> {
        let head = run.first().ok_or(Rejection::EmptyRun)?;
        match self.top() {
            None => Ok(()),
            Some(top) => continues_tableau(top, head),
        }
    }

    fn can_be_dragged(&self, card: CardKey, capacity: usize) -> Result<(), Rejection> {
        let run = self.run_from(card).ok_or(Rejection::NotInReceptacle)?;
        check_liftable(&run, capacity)
    }
}
