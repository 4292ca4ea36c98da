//! Change notifications for renderers.

use crate::response::DeferredAction;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// What changed in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Input line or history cursor changed
    Input,

    /// Records were appended to the output log
    Output,

    /// The output log was cleared
    Cleared,

    /// Placeholder text changed
    Placeholder,

    /// A deferred action was handed to the host
    ActionFired(DeferredAction),

    /// Session mounted
    Mounted,

    /// Session unmounted and reset
    Unmounted,
}

/// Handle returned by `Session::subscribe`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Change)>;

/// Subscribed callbacks, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    /// Register a callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Change) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(other, _)| *other != id);
        before != self.callbacks.len()
    }

    /// Tell every subscriber about `change`.
    pub fn notify(&mut self, change: &Change) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(change);
        }
    }

    /// Number of subscribers.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// True if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
