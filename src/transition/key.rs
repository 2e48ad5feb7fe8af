//! Row keys.

use crate::containers::Kind;
use std::fmt;

/// The `(source kind, event kind)` pair a transition fires on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub source: Kind,
    pub event: Kind,
}

impl Key {
    pub fn new(source: Kind, event: Kind) -> Self {
        Self { source, event }
    }

    /// Key of the state type `S` and event type `E`.
    pub fn of<S: 'static, E: 'static>() -> Self {
        Self::new(Kind::of::<S>(), Kind::of::<E>())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.event)
    }
}
