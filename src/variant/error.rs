//! Variant access errors.

use crate::containers::Kind;
use thiserror::Error;

/// Errors raised when a [`Variant`](super::Variant) is read as the wrong kind.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VariantAccessError {
    #[error("Bad variant access: expected '{expected}', variant holds '{found}'")]
    Mismatch { expected: Kind, found: Kind },

    #[error("Bad variant access: variant is empty")]
    Vacant,
}
