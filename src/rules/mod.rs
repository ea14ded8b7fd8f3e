//! Move legality rules and game status.
//!
//! The receptacles call into these predicates for their acceptance and drag
//! checks; the engine never interprets card relationships directly.

pub mod checks;
pub mod status;

pub use checks::{check_liftable, continues_foundation, continues_tableau, is_alternating, is_sequenced};
pub use status::GameStatus;
