//! Receptacles: every place a card can sit.
//!
//! ## Key Types
//!
//! - `Receptacle`: Shared contract (emptiness, top, insert, remove) with
//!   per-variant `can_accept` / `can_be_dragged`
//! - `TableauColumn`, `FreeCell`, `Foundation`: The three variants
//! - `ReceptacleId`: Opaque identifier for a receptacle on the table
//! - `Table`: Owner of all receptacles and the card location index

pub mod foundation;
pub mod free_cell;
pub mod id;
pub mod receptacle;
pub mod table;
pub mod tableau;

pub use foundation::Foundation;
pub use free_cell::FreeCell;
pub use id::ReceptacleId;
pub use receptacle::{Pile, Receptacle};
pub use table::Table;
pub use tableau::TableauColumn;
