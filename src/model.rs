//! Two-slot accumulator with per-slot change tracking.

use crate::types::{Sequence, Slot, SumSnapshot};

/// Holds the `a` and `b` slots and whether each slot's most recent write
/// changed its value.
///
/// Both flags start out `true`, so a fresh model already reports itself as
/// updated before anything is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccumulatorModel {
    a: i32,
    b: i32,
    a_changed: bool,
    b_changed: bool,
}

impl AccumulatorModel {
    pub fn new() -> Self {
        Self {
            a: 0,
            b: 0,
            a_changed: true,
            b_changed: true,
        }
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    /// Write slot `a`. Writing the current value clears the flag.
    pub fn set_a(&mut self, value: i32) {
        if value != self.a {
            self.a = value;
            self.a_changed = true;
            return;
        }

        self.a_changed = false;
    }

    /// Write slot `b`. Writing the current value clears the flag.
    pub fn set_b(&mut self, value: i32) {
        if value != self.b {
            self.b = value;
            self.b_changed = true;
            return;
        }

        self.b_changed = false;
    }

    /// Write the named slot. Returns whether the value changed.
    pub fn set(&mut self, slot: Slot, value: i32) -> bool {
        match slot {
            Slot::A => self.set_a(value),
            Slot::B => self.set_b(value),
        }
        self.changed(slot)
    }

    pub fn value(&self, slot: Slot) -> i32 {
        match slot {
            Slot::A => self.a,
            Slot::B => self.b,
        }
    }

    /// Whether the most recent write to `slot` changed it.
    pub fn changed(&self, slot: Slot) -> bool {
        match slot {
            Slot::A => self.a_changed,
            Slot::B => self.b_changed,
        }
    }

    pub fn sum(&self) -> i64 {
        i64::from(self.a) + i64::from(self.b)
    }

    /// True only when *both* slots' latest writes changed their values.
    pub fn is_updated(&self) -> bool {
        self.a_changed && self.b_changed
    }

    pub fn snapshot(&self, sequence: Sequence) -> SumSnapshot {
        SumSnapshot {
            a: self.a,
            b: self.b,
            sum: self.sum(),
            updated: self.is_updated(),
            sequence,
        }
    }
}

impl Default for AccumulatorModel {
    fn default() -> Self {
        Self::new()
    }
}
