//! Subscriptions to interpreter events.
//!
//! Subscribers are plain callbacks invoked synchronously, in subscription
//! order, on the interpreter's own thread:
//! - Slot writes (changed or not)
//! - Reported sums
//! - Rejected input and session end
//!
//! # Example
//!
//! ```ignore
//! let mut interpreter = CommandInterpreter::new();
//!
//! interpreter.subscribe(SubscriptionFilter::sums(), |event| {
//!     if let SumEvent::SumUpdated { snapshot } = event {
//!         println!("Sum changed to {}", snapshot.sum);
//!     }
//! });
//! ```

mod manager;
mod types;

pub use manager::{Observer, SubscriptionManager};
pub use types::{SubscriptionFilter, SubscriptionId, SumEvent};
