//! Observer registry.
//!
//! Observers are callbacks registered with the engine. They are notified
//! synchronously, in registration order, after every state change. A
//! callback only sees the event, never the engine, so it cannot subscribe or
//! unsubscribe while a notification is in progress.

use serde::{Deserialize, Serialize};

use super::event::EngineEvent;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&EngineEvent)>;

/// Registered observers, in registration order.
#[derive(Default)]
pub struct Observers {
    entries: Vec<(SubscriptionId, Callback)>,
    next_id: u32,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Returns its handle.
    pub fn subscribe(&mut self, callback: impl FnMut(&EngineEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove exactly the callback registered under `id`.
    ///
    /// Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Deliver `event` to every observer.
    pub fn notify(&mut self, event: &EngineEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.entries.iter().map(|(id, _)| id.0).collect();
        f.debug_struct("Observers").field("subscriptions", &ids).finish()
    }
}
