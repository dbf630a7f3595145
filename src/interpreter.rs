//! Command interpreter driving the accumulator.

use crate::command::Command;
use crate::error::Result;
use crate::io::{LineSource, MessageSink};
use crate::model::AccumulatorModel;
use crate::subscriptions::{SubscriptionFilter, SubscriptionId, SubscriptionManager, SumEvent};
use crate::types::{InterpreterStats, Sequence};
use tracing::debug;

/// Prefix of the message emitted when both slots report an update.
pub const SUM_MESSAGE: &str = "Sum: ";

/// Message emitted for lines that are neither quit nor an assignment.
pub const ERROR_MESSAGE: &str = "Error: Invalid input";

/// Reads one line per cycle and applies it to an owned [`AccumulatorModel`].
///
/// A sum is written to the output only when [`AccumulatorModel::is_updated`]
/// holds after the assignment, i.e. when the latest writes to *both* slots
/// changed their values.
pub struct CommandInterpreter {
    model: AccumulatorModel,
    sequence: Sequence,
    stats: InterpreterStats,
    subscriptions: SubscriptionManager,
}

impl CommandInterpreter {
    pub fn new() -> Self {
        Self {
            model: AccumulatorModel::new(),
            sequence: Sequence::default(),
            stats: InterpreterStats::default(),
            subscriptions: SubscriptionManager::new(),
        }
    }

    pub fn model(&self) -> &AccumulatorModel {
        &self.model
    }

    /// Number of assignments applied so far.
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    pub fn stats(&self) -> InterpreterStats {
        self.stats
    }

    /// Read one line from `io` and act on it.
    ///
    /// Returns `Ok(false)` only for the quit token. Errors come from the
    /// input collaborator, never from the line's content.
    pub fn parse_input<T>(&mut self, io: &mut T) -> Result<bool>
    where
        T: LineSource + MessageSink + ?Sized,
    {
        let line = io.read_line()?;
        Ok(self.process_line(&line, io))
    }

    /// Act on an already-read line, writing any response to `output`.
    pub fn process_line<O>(&mut self, line: &str, output: &mut O) -> bool
    where
        O: MessageSink + ?Sized,
    {
        self.stats.cycles += 1;

        match Command::parse(line) {
            Command::Quit => {
                debug!(sequence = self.sequence.0, "quit requested");
                self.subscriptions.broadcast_session_ended(self.sequence);
                false
            }
            Command::Assign { slot, value } => {
                let changed = self.model.set(slot, value);
                self.sequence = self.sequence.next();
                self.stats.assignments += 1;
                debug!(%slot, value, changed, sequence = self.sequence.0, "slot written");
                self.subscriptions.broadcast_write(slot, value, changed, self.sequence);

                if self.model.is_updated() {
                    output.print_message(&format!("{SUM_MESSAGE}{}", self.model.sum()));
                    self.stats.sums_reported += 1;
                    self.subscriptions.broadcast_sum(self.model.snapshot(self.sequence));
                }
                true
            }
            Command::Invalid => {
                debug!(line, "invalid input");
                output.print_message(ERROR_MESSAGE);
                self.stats.invalid_inputs += 1;
                self.subscriptions.broadcast_invalid(line);
                true
            }
        }
    }

    /// Call `observer` for every matching event, synchronously and in order.
    pub fn subscribe<F>(&mut self, filter: SubscriptionFilter, observer: F) -> SubscriptionId
    where
        F: FnMut(&SumEvent) + 'static,
    {
        self.subscriptions.subscribe(filter, observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.unsubscribe(id)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
