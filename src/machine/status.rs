//! Outcomes of processing an event.

use std::fmt;

/// What happened to an event handed to
/// [`StateMachine::process_event`](super::StateMachine::process_event).
///
/// Every variant is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessStatus {
    /// A transition's action ran; external transitions changed the state.
    Completed,

    /// The matched transition is an internal placeholder; nothing ran.
    EventIgnored,

    /// A row exists for the state and event, but every guard refused.
    GuardFailure,

    /// No row exists for the state and event.
    UndefinedTransition,
}

impl ProcessStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Completed => "completed",
            Self::EventIgnored => "event ignored",
            Self::GuardFailure => "guard failure",
            Self::UndefinedTransition => "undefined transition",
        };
        f.write_str(name)
    }
}
