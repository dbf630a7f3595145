//! Input/output collaborators for the interpreter.
//!
//! The interpreter never touches process streams directly: it reads lines
//! from a [`LineSource`] and writes messages to a [`MessageSink`]. The
//! binary wires both to stdin/stdout through [`IoWrapper`]; tests use
//! [`ScriptedConsole`].

use crate::error::{Result, SumError};
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use tracing::warn;

/// Blocking source of input lines.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Returns [`SumError::InputExhausted`] once the source has no more lines.
    fn read_line(&mut self) -> Result<String>;
}

/// Fire-and-forget message output.
pub trait MessageSink {
    /// Write `message` as-is, with no trailing newline.
    fn print_message(&mut self, message: &str);

    /// Write `line` followed by a newline.
    fn print_line(&mut self, line: &str) {
        self.print_message(line);
        self.print_message("\n");
    }
}

/// Line reader and message writer over any buffered reader and writer.
pub struct IoWrapper<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoWrapper<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the wrapper, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl IoWrapper<BufReader<Stdin>, Stdout> {
    /// Bind to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineSource for IoWrapper<R, W> {
    fn read_line(&mut self) -> Result<String> {
        // Prompt text written without a newline must be visible before we block.
        if let Err(e) = self.writer.flush() {
            warn!(error = %e, "failed to flush output");
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(SumError::InputExhausted);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        // Undecodable bytes become U+FFFD, so the line is answered as invalid
        // input instead of ending the session.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl<R: BufRead, W: Write> MessageSink for IoWrapper<R, W> {
    fn print_message(&mut self, message: &str) {
        if let Err(e) = self.writer.write_all(message.as_bytes()) {
            warn!(error = %e, "failed to write message");
        }
    }
}

/// In-memory collaborator that replays scripted lines and records every
/// message written to it.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    messages: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            messages: Vec::new(),
        }
    }

    /// Queue another line to be read.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Every message written so far, one entry per `print_message` call.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All output concatenated, as a terminal would show it.
    pub fn transcript(&self) -> String {
        self.messages.concat()
    }

    pub fn remaining_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

impl LineSource for ScriptedConsole {
    fn read_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or(SumError::InputExhausted)
    }
}

impl MessageSink for ScriptedConsole {
    fn print_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
