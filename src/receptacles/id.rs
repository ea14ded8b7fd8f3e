//! Receptacle identifiers.

use serde::{Deserialize, Serialize};

/// Identifies one receptacle on the table.
///
/// The index is the receptacle's position within its kind, e.g.
/// `Tableau(0)` is the leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceptacleId {
    Tableau(u8),
    FreeCell(u8),
    Foundation(u8),
}

impl ReceptacleId {
    /// Position within its kind.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ReceptacleId::Tableau(i) | ReceptacleId::FreeCell(i) | ReceptacleId::Foundation(i) => {
                i as usize
            }
        }
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, ReceptacleId::Tableau(_))
    }

    #[must_use]
    pub const fn is_free_cell(self) -> bool {
        matches!(self, ReceptacleId::FreeCell(_))
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, ReceptacleId::Foundation(_))
    }
}

impl std::fmt::Display for ReceptacleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceptacleId::Tableau(i) => write!(f, "Tableau({})", i),
            ReceptacleId::FreeCell(i) => write!(f, "FreeCell({})", i),
            ReceptacleId::Foundation(i) => write!(f, "Foundation({})", i),
        }
    }
}
