//! Type-erased guard predicates.
//!
//! A guard is written against concrete source and event types. Once stored
//! in a transition it is erased to a predicate over the whole state and
//! event sets, so transitions of different kinds can share a table.

use super::callable::GuardFn;
use crate::variant::{Alternative, Alternatives};

/// Predicate deciding whether a transition may fire.
///
/// Guards are evaluated in declaration order by
/// [`Row::find_transition`](super::Row::find_transition); the first one
/// returning `true` selects its transition.
pub struct Guard<SV, EV> {
    predicate: Box<dyn Fn(&SV, &EV) -> bool + Send + Sync>,
    always: bool,
}

impl<SV: Alternatives, EV: Alternatives> Guard<SV, EV> {
    /// Erase `guard`, declared over the source kind `S` and event kind `E`.
    ///
    /// The erased predicate is `false` when the live values are not of
    /// kinds `S` and `E`.
    pub fn new<S, E, G, M>(guard: G) -> Self
    where
        S: Alternative<SV>,
        E: Alternative<EV>,
        G: GuardFn<S, E, M>,
        M: 'static,
    {
        Guard {
            predicate: Box::new(move |source: &SV, event: &EV| {
                match (S::peek(source), E::peek(event)) {
                    (Some(source), Some(event)) => guard.check(source, event),
                    _ => false,
                }
            }),
            always: G::ALWAYS,
        }
    }

    /// Check the predicate against the live state and event.
    pub fn check(&self, source: &SV, event: &EV) -> bool {
        (self.predicate)(source, event)
    }
}

impl<SV, EV> Guard<SV, EV> {
    /// Whether this guard was declared with the placeholder.
    pub fn is_always(&self) -> bool {
        self.always
    }
}
