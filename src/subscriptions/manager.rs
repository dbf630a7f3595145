//! Subscription manager dispatching session events.

use crate::types::{Sequence, Slot, SumSnapshot};

use super::types::{SubscriptionFilter, SubscriptionId, SumEvent};

/// Callback invoked for every matching event.
pub type Observer = Box<dyn FnMut(&SumEvent)>;

struct Subscription {
    id: SubscriptionId,
    filter: SubscriptionFilter,
    observer: Observer,
}

/// Calls subscribers synchronously, in subscription order, as events happen.
pub struct SubscriptionManager {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl SubscriptionManager {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 1,
        }
    }

    /// Register `observer` for events matching `filter`.
    pub fn subscribe<F>(&mut self, filter: SubscriptionFilter, observer: F) -> SubscriptionId
    where
        F: FnMut(&SumEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.subscriptions.push(Subscription {
            id,
            filter,
            observer: Box::new(observer),
        });
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    // --- Broadcasting ---

    /// Broadcast an applied assignment.
    pub fn broadcast_write(&mut self, slot: Slot, value: i32, changed: bool, sequence: Sequence) {
        self.broadcast(SumEvent::SlotWritten {
            slot,
            value,
            changed,
            sequence,
        });
    }

    /// Broadcast a reported sum.
    pub fn broadcast_sum(&mut self, snapshot: SumSnapshot) {
        self.broadcast(SumEvent::SumUpdated { snapshot });
    }

    /// Broadcast a rejected input line.
    pub fn broadcast_invalid(&mut self, line: &str) {
        self.broadcast(SumEvent::InvalidInput {
            line: line.to_string(),
        });
    }

    /// Broadcast session end.
    pub fn broadcast_session_ended(&mut self, sequence: Sequence) {
        self.broadcast(SumEvent::SessionEnded { sequence });
    }

    fn broadcast(&mut self, event: SumEvent) {
        for sub in self.subscriptions.iter_mut() {
            if sub.filter.matches(&event) {
                (sub.observer)(&event);
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}
