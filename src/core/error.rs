//! Engine error types.
//!
//! Every failure is local to a single call and leaves the engine in a valid,
//! continuable state. Legality failures carry a `Rejection` naming the rule
//! that was broken.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::cards::CardKey;
use crate::receptacles::ReceptacleId;

/// Why a receptacle refused a run, or why a run cannot be lifted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Rejection {
    #[display("run is empty")]
    EmptyRun,

    /// Tableau: the run's head outranks the column's top card.
    #[display("run head is not below the top card")]
    RankNotBelow,

    /// Tableau: head and top card share a color.
    #[display("run head has the same color as the top card")]
    SameColor,

    /// Tableau: head is lower but not exactly one rank below.
    #[display("run head is not exactly one rank below the top card")]
    RankGap,

    #[display("free cell is occupied")]
    CellOccupied,

    /// Free cells and foundations take single cards only.
    #[display("only single cards are accepted")]
    MultiCardRun,

    #[display("an empty foundation only accepts an ace")]
    NotAnAce,

    #[display("card does not match the foundation's suit")]
    WrongSuit,

    #[display("card is not the next rank for the foundation")]
    NotNextRank,

    #[display("cards are not in descending sequence")]
    NotSequenced,

    #[display("card colors do not alternate")]
    ColorsNotAlternating,

    #[display("run of {run_len} exceeds drag capacity {capacity}")]
    ExceedsCapacity { run_len: usize, capacity: usize },

    #[display("card is not in this receptacle")]
    NotInReceptacle,
}

/// Errors returned by engine and receptacle operations.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum EngineError {
    /// The target receptacle refused the run.
    #[display("Illegal move: {}", _0)]
    IllegalMove(Rejection),

    /// Top card requested from an empty receptacle.
    #[display("{} is empty", _0)]
    EmptyReceptacle(ReceptacleId),

    /// `insert` was called with no pending selection.
    #[display("No card is selected")]
    MissingSelection,

    /// The run or origin passed to `insert` is not the pending selection.
    #[display("Selection from {} does not match pending selection from {}", found, expected)]
    SelectionMismatch {
        expected: ReceptacleId,
        found: ReceptacleId,
    },

    #[display("Unknown receptacle {}", _0)]
    UnknownReceptacle(ReceptacleId),

    /// The same card was given twice when arranging a position.
    #[display("Card {} appears more than once", _0)]
    DuplicateCard(CardKey),

    #[display("Card {} is not in {}", card, receptacle)]
    CardNotFound {
        card: CardKey,
        receptacle: ReceptacleId,
    },
}

impl std::error::Error for EngineError {}

impl From<Rejection> for EngineError {
    fn from(reason: Rejection) -> Self {
        EngineError::IllegalMove(reason)
    }
}
