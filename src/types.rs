//! Core types for the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two named integer slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// The variable name used for this slot on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Slot::A => "a",
            Slot::B => "b",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of assignments accepted so far in a session.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Sequence(pub u64);

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({})", self.0)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sequence {
    pub fn next(self) -> Self {
        Sequence(self.0 + 1)
    }
}

/// Point-in-time view of the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumSnapshot {
    pub a: i32,
    pub b: i32,
    pub sum: i64,
    /// Whether both slots' most recent writes changed their values.
    pub updated: bool,
    pub sequence: Sequence,
}

/// Counters kept by the interpreter over a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpreterStats {
    /// Lines processed, including the quit line.
    pub cycles: u64,
    /// Assignment lines accepted.
    pub assignments: u64,
    /// "Sum: ..." messages emitted.
    pub sums_reported: u64,
    /// Lines answered with the invalid-input message.
    pub invalid_inputs: u64,
}
