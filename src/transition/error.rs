//! Build errors for rows, tables and the table builder.

use super::key::Key;
use crate::containers::MappingError;
use thiserror::Error;

/// Errors that can occur when assembling a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition key {found} does not match row key {expected}")]
    KeyMismatch { expected: Key, found: Key },

    #[error("Invalid row layout: {0}")]
    Mapping(#[from] MappingError),
}
