//! Line classification.

use crate::types::Slot;
use regex::Regex;
use std::sync::LazyLock;

/// Token that ends a session, compared ignoring ASCII case.
pub const QUIT_TOKEN: &str = "quit";

/// `<a|b>:<one whitespace><digits>`, anchored at both ends. `\s` and the
/// digit class are ASCII-only.
const ASSIGNMENT_PATTERN: &str = r"^(?P<variable>[ab]):(?-u:\s)(?P<value>[0-9]+)$";

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ASSIGNMENT_PATTERN).expect("assignment pattern compiles"));

/// What a single input line asks the interpreter to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Assign { slot: Slot, value: i32 },
    Invalid,
}

impl Command {
    /// Classify a line (without its terminator).
    ///
    /// Digit runs that do not fit in an `i32` are `Invalid`.
    pub fn parse(line: &str) -> Self {
        if line.eq_ignore_ascii_case(QUIT_TOKEN) {
            return Command::Quit;
        }

        let Some(caps) = ASSIGNMENT.captures(line) else {
            return Command::Invalid;
        };

        let slot = match &caps["variable"] {
            "a" => Slot::A,
            "b" => Slot::B,
            _ => return Command::Invalid,
        };

        match caps["value"].parse::<i32>() {
            Ok(value) => Command::Assign { slot, value },
            Err(_) => Command::Invalid,
        }
    }
}
