//! Engine events.
//!
//! Events describe what just changed on the table. Observers receive them
//! synchronously after the mutation, before the engine call returns, and
//! re-read whatever state they need from the engine.

use serde::{Deserialize, Serialize};

use crate::core::error::Rejection;
use crate::receptacles::ReceptacleId;

/// Something that happened to the engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A fresh deal was laid out.
    Dealt {
        /// Shuffle seed, for reproducing the deal.
        seed: u64,
    },

    /// A run was lifted and is now pending.
    Selected { from: ReceptacleId, count: usize },

    /// A pending selection was dropped without moving anything.
    SelectionCleared { from: ReceptacleId },

    /// A run moved between receptacles.
    Moved {
        from: ReceptacleId,
        to: ReceptacleId,
        count: usize,
    },

    /// An insert was refused. The selection has been cleared.
    MoveRejected {
        from: ReceptacleId,
        to: ReceptacleId,
        reason: Rejection,
    },

    /// Every foundation is complete.
    Won,
}

impl EngineEvent {
    /// True for events that change which cards sit where.
    #[must_use]
    pub fn moves_cards(&self) -> bool {
        matches!(self, EngineEvent::Dealt { .. } | EngineEvent::Moved { .. })
    }
}
