//! The state machine engine.
//!
//! A [`StateMachine`] holds the current state and a transition table.
//! Each call to [`StateMachine::process_event`] looks up the row for the
//! current state and the event, fires the first transition whose guard
//! passes, and reports a [`ProcessStatus`].
//!
//! State types implement [`Lifecycle`] to run code on entry and exit; the
//! state set is declared `: dyn Lifecycle` so the machine can reach the
//! hooks of whichever state is active.

mod config;
mod coverage;
mod engine;
mod error;
mod lifecycle;
mod status;

pub use config::{MachineConfig, ViolationStrategy};
pub use coverage::{check_coverage, CoverageViolation};
pub use engine::StateMachine;
pub use error::MachineError;
pub use lifecycle::Lifecycle;
pub use status::ProcessStatus;
