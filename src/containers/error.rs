//! Map construction errors.

use thiserror::Error;

/// Errors that can occur when building a map.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("Duplicate key {key} in map")]
    DuplicateKey { key: String },

    #[error("Duplicate value {value} in bijection")]
    DuplicateValue { value: String },
}
