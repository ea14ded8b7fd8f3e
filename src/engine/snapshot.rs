//! Read-only views of the table for the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::receptacles::{Receptacle, ReceptacleId, Table};
use crate::rules::GameStatus;

/// Point-in-time copy of every receptacle's contents.
///
/// Cheap to take: card vectors are persistent and share structure with the
/// live table. Later engine calls do not affect an existing snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub columns: Vec<Vector<Card>>,
    pub free_cells: Vec<Vector<Card>>,
    pub foundations: Vec<Vector<Card>>,
    pub pending_source: Option<ReceptacleId>,
    pub status: GameStatus,
}

impl TableSnapshot {
    pub(crate) fn capture(table: &Table, pending_source: Option<ReceptacleId>, status: GameStatus) -> Self {
        Self {
            columns: table.columns().iter().map(|r| r.cards().clone()).collect(),
            free_cells: table.free_cells().iter().map(|r| r.cards().clone()).collect(),
            foundations: table.foundations().iter().map(|r| r.cards().clone()).collect(),
            pending_source,
            status,
        }
    }

    /// Total cards across all receptacles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns
            .iter()
            .chain(&self.free_cells)
            .chain(&self.foundations)
            .map(Vector::len)
            .sum()
    }
}
