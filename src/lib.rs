//! # freecell-engine
//!
//! Rules engine for FreeCell solitaire: deck, receptacles, move legality and
//! win detection. Rendering and input belong to the caller.
//!
//! ## Design Principles
//!
//! 1. **Receptacles own their rules**: Tableau columns, free cells and
//!    foundations share one `Receptacle` contract and each decides what it
//!    accepts and what may be lifted from it.
//!
//! 2. **Explicit transitions**: A move is `select` then `insert`. Selecting
//!    and clearing are separate operations, never a toggle.
//!
//! 3. **Observable**: Every state change is pushed to subscribers as an
//!    `EngineEvent`; `snapshot()` gives a serializable view at any time.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Receptacle contents are `im` vectors,
//!   so snapshots are O(1) clones.
//!
//! - **Deterministic Deals**: Shuffles use a seeded ChaCha8 RNG; the seed of
//!   every deal is recorded and reported.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `cards`: Cards, the deck, runs
//! - `rules`: Tableau/foundation/run predicates, game status
//! - `receptacles`: The receptacle trait, its three variants and the table
//! - `events`: Engine events and observers
//! - `engine`: The `Engine` and its selection/snapshot types

pub mod core;
pub mod cards;
pub mod rules;
pub mod receptacles;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{CapacityRule, ConfigError, DealRng, EngineConfig, EngineError, Rejection};

pub use crate::cards::{generate_deck, shuffle, Card, CardKey, Color, Run, Suit};

pub use crate::rules::GameStatus;

pub use crate::receptacles::{Foundation, FreeCell, Receptacle, ReceptacleId, Table, TableauColumn};

pub use crate::events::{EngineEvent, SubscriptionId};

pub use crate::engine::{Engine, Selection, TableSnapshot};
