//! Engine notifications.
//!
//! ## Key Types
//!
//! - `EngineEvent`: What changed (deal, selection, move, rejection, win)
//! - `Observers`: Ordered callback registry
//! - `SubscriptionId`: Handle for unsubscribing

pub mod event;
pub mod observers;

pub use event::EngineEvent;
pub use observers::{Observers, SubscriptionId};
