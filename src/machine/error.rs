//! Machine construction and runtime errors.

use super::coverage::CoverageViolation;
use crate::containers::Kind;
use crate::variant::VariantAccessError;
use thiserror::Error;

/// Errors raised by a [`StateMachine`](super::StateMachine).
///
/// The expected event outcomes are reported through
/// [`ProcessStatus`](super::ProcessStatus), never through this type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Bad state access: the machine holds no state")]
    BadStateAccess,

    #[error("Initial state '{found}' is not the table's first source '{expected}'")]
    InitialStateMismatch { expected: Kind, found: Kind },

    #[error("{} declared kind(s) do not appear in the table", .0.len())]
    Coverage(Vec<CoverageViolation>),

    #[error(transparent)]
    Variant(#[from] VariantAccessError),
}
