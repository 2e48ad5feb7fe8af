//! Kind lists and the maps built over them.
//!
//! This module contains the container algebra the rest of the crate is
//! built on:
//! - `Kind` descriptors identifying state and event types
//! - `List` with membership, de-duplication, filter, map, flatten, repack
//! - `Surjection`, `Bijection` and `IndexMap` associations
//!
//! All operations are pure and return new values.

mod error;
mod kind;
mod list;
mod mapping;

pub use error::MappingError;
pub use kind::Kind;
pub use list::{KindList, List};
pub use mapping::{Bijection, IndexMap, Surjection};
