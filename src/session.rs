//! Console session loop.

use crate::config::SessionConfig;
use crate::error::{Result, SumError};
use crate::interpreter::CommandInterpreter;
use crate::io::{LineSource, MessageSink};
use tracing::info;

pub const BANNER_TITLE: &str = "Imperative Sum";
pub const BANNER_HELP: &str = "Type 'a: <number>' and 'b: <number>' to try it";

/// How a session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The quit token was read.
    Quit,
    /// The input collaborator ran out of lines.
    InputExhausted,
}

/// Outcome of [`run_session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub cycles: u64,
    pub sums_reported: u64,
    pub invalid_inputs: u64,
    pub ended_by: EndReason,
}

/// Drive `interpreter` until it signals the end of the session.
///
/// Running out of input ends the session normally; any other collaborator
/// error is returned.
pub fn run_session<T>(
    interpreter: &mut CommandInterpreter,
    io: &mut T,
    config: &SessionConfig,
) -> Result<SessionSummary>
where
    T: LineSource + MessageSink + ?Sized,
{
    if config.show_banner {
        io.print_line(BANNER_TITLE);
        io.print_line(BANNER_HELP);
    }

    info!("session started");

    let ended_by = loop {
        match interpreter.parse_input(io) {
            Ok(true) => {
                if config.blank_line_after_cycle {
                    io.print_line("");
                }
            }
            Ok(false) => break EndReason::Quit,
            Err(SumError::InputExhausted) => break EndReason::InputExhausted,
            Err(e) => return Err(e),
        }
    };

    let stats = interpreter.stats();
    info!(
        cycles = stats.cycles,
        sums = stats.sums_reported,
        invalid = stats.invalid_inputs,
        ?ended_by,
        "session ended"
    );

    Ok(SessionSummary {
        cycles: stats.cycles,
        sums_reported: stats.sums_reported,
        invalid_inputs: stats.invalid_inputs,
        ended_by,
    })
}
