//! # Reactive Sum
//!
//! A two-variable running sum that only reports itself when the inputs
//! actually change.
//!
//! ## Core Concepts
//!
//! - **Model**: two integer slots, `a` and `b`, each with a change flag
//!   recording whether its latest write altered it
//! - **Commands**: one line per cycle, either `quit`, `a: <digits>`,
//!   `b: <digits>`, or anything else (invalid)
//! - **Interpreter**: applies commands to the model and prints
//!   `Sum: <n>` when both change flags are set
//! - **Subscriptions**: callbacks invoked in order for writes, sums,
//!   invalid lines and session end
//!
//! ## Example
//!
//! ```
//! use reactive_sum::{CommandInterpreter, ScriptedConsole};
//!
//! let mut interpreter = CommandInterpreter::new();
//! let mut console = ScriptedConsole::new(["a: 33", "b: 1", "a: 33", "quit"]);
//!
//! while interpreter.parse_input(&mut console).unwrap() {}
//!
//! assert_eq!(console.messages(), ["Sum: 33", "Sum: 34"]);
//! assert_eq!(interpreter.model().sum(), 34);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod io;
pub mod model;
pub mod session;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use command::{Command, QUIT_TOKEN};
pub use config::{validate_log_level, SessionConfig, LOG_LEVELS};
pub use error::{Result, SumError};
pub use interpreter::{CommandInterpreter, ERROR_MESSAGE, SUM_MESSAGE};
pub use io::{IoWrapper, LineSource, MessageSink, ScriptedConsole};
pub use model::AccumulatorModel;
pub use session::{run_session, EndReason, SessionSummary, BANNER_HELP, BANNER_TITLE};
pub use subscriptions::{
    Observer, SubscriptionFilter, SubscriptionId, SubscriptionManager, SumEvent,
};
pub use types::*;
