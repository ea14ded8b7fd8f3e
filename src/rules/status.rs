//! Game status.

use serde::{Deserialize, Serialize};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// All four foundations are complete.
    Won,
}

impl GameStatus {
    #[must_use]
    pub fn from_won(won: bool) -> Self {
        if won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}
