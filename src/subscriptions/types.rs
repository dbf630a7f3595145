//! Subscription types for session updates.

use crate::types::{Sequence, Slot, SumSnapshot};
use serde::{Deserialize, Serialize};

/// Filter criteria for subscriptions.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionFilter {
    /// Include every accepted slot write, changed or not.
    pub include_writes: bool,

    /// Include reported sums.
    pub include_sums: bool,

    /// Include rejected input lines.
    pub include_errors: bool,

    /// Include session end.
    pub include_lifecycle: bool,
}

impl SubscriptionFilter {
    /// Subscribe to slot writes.
    pub fn writes() -> Self {
        Self {
            include_writes: true,
            ..Default::default()
        }
    }

    /// Subscribe to reported sums.
    pub fn sums() -> Self {
        Self {
            include_sums: true,
            ..Default::default()
        }
    }

    /// Subscribe to rejected input.
    pub fn errors() -> Self {
        Self {
            include_errors: true,
            ..Default::default()
        }
    }

    /// Subscribe to everything.
    pub fn all() -> Self {
        Self {
            include_writes: true,
            include_sums: true,
            include_errors: true,
            include_lifecycle: true,
        }
    }

    pub(crate) fn matches(&self, event: &SumEvent) -> bool {
        match event {
            SumEvent::SlotWritten { .. } => self.include_writes,
            SumEvent::SumUpdated { .. } => self.include_sums,
            SumEvent::InvalidInput { .. } => self.include_errors,
            SumEvent::SessionEnded { .. } => self.include_lifecycle,
        }
    }
}

/// Events delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SumEvent {
    // --- Model Events ---
    /// An assignment line was applied to a slot.
    SlotWritten {
        slot: Slot,
        value: i32,
        /// False when the slot already held `value`.
        changed: bool,
        sequence: Sequence,
    },

    /// A sum was reported to the output.
    SumUpdated { snapshot: SumSnapshot },

    // --- Input Events ---
    /// A line matched neither the quit token nor the assignment grammar.
    InvalidInput { line: String },

    // --- Lifecycle Events ---
    /// The quit token was read.
    SessionEnded { sequence: Sequence },
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);
