//! Core building blocks: configuration, errors and deal randomness.
//!
//! Nothing in here knows about receptacles; the rest of the crate builds on
//! these types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{CapacityRule, ConfigError, EngineConfig, FOUNDATION_COUNT, MAX_COLUMNS, MAX_FREE_CELLS};
pub use error::{EngineError, Rejection};
pub use rng::DealRng;
