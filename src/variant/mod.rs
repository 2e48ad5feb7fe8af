//! Tagged union storage over a closed set of kinds.
//!
//! A set is declared with [`variant!`](crate::variant!), which produces the
//! enum backing a [`Variant`]. The variant tracks which member is active,
//! destroys the previous value on every store, and checks the tag on every
//! typed read.

mod alternatives;
mod error;
mod macros;
mod storage;

pub use alternatives::{Alternative, Alternatives, Empty, EMPTY_TAG};
pub use error::VariantAccessError;
pub use storage::Variant;
