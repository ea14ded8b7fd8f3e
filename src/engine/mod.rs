//! The engine: table ownership, the select/insert protocol and snapshots.

pub mod game;
pub mod selection;
pub mod snapshot;

pub use game::Engine;
pub use selection::Selection;
pub use snapshot::TableSnapshot;
