//! Call shapes accepted as guards, actions and destinations.
//!
//! A guard or action may take no argument, the source state, the event, or
//! both. The shape is picked by trait selection over the marker types
//! below; a callable matching no shape, or more than one, does not compile.

use super::tag::{Placeholder, StateTag};
use crate::containers::Kind;
use crate::variant::{Alternative, Alternatives};

/// Shape marker: takes no argument.
pub struct NoArgs;

/// Shape marker: takes the source state.
pub struct SourceArg;

/// Shape marker: takes the event.
pub struct EventArg;

/// Shape marker: takes the source state and the event.
pub struct SourceEventArgs;

/// Shape marker for the placeholder guard.
pub struct Always;

/// Shape marker for the placeholder action.
pub struct Pass;

/// A predicate deciding whether a transition fires.
pub trait GuardFn<S, E, M>: Send + Sync + 'static {
    /// True for the placeholder guard.
    const ALWAYS: bool = false;

    fn check(&self, source: &S, event: &E) -> bool;
}

impl<S, E, F> GuardFn<S, E, NoArgs> for F
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    fn check(&self, _source: &S, _event: &E) -> bool {
        self()
    }
}

impl<S, E, F> GuardFn<S, E, SourceArg> for F
where
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    fn check(&self, source: &S, _event: &E) -> bool {
        self(source)
    }
}

impl<S, E, F> GuardFn<S, E, EventArg> for F
where
    F: Fn(&E) -> bool + Send + Sync + 'static,
{
    fn check(&self, _source: &S, event: &E) -> bool {
        self(event)
    }
}

impl<S, E, F> GuardFn<S, E, SourceEventArgs> for F
where
    F: Fn(&S, &E) -> bool + Send + Sync + 'static,
{
    fn check(&self, source: &S, event: &E) -> bool {
        self(source, event)
    }
}

impl<S, E> GuardFn<S, E, Always> for Placeholder {
    const ALWAYS: bool = true;

    fn check(&self, _source: &S, _event: &E) -> bool {
        true
    }
}

/// The effect of a transition, producing `D`.
///
/// `D` is the destination state for external transitions and `()` for
/// internal ones.
pub trait ActionFn<S, E, D, M>: Send + Sync + 'static {
    /// True for the placeholder action.
    const PASS: bool = false;

    fn call(&self, source: &mut S, event: &mut E) -> D;
}

impl<S, E, D, F> ActionFn<S, E, D, NoArgs> for F
where
    F: Fn() -> D + Send + Sync + 'static,
{
    fn call(&self, _source: &mut S, _event: &mut E) -> D {
        self()
    }
}

impl<S, E, D, F> ActionFn<S, E, D, SourceArg> for F
where
    F: Fn(&mut S) -> D + Send + Sync + 'static,
{
    fn call(&self, source: &mut S, _event: &mut E) -> D {
        self(source)
    }
}

impl<S, E, D, F> ActionFn<S, E, D, EventArg> for F
where
    F: Fn(&mut E) -> D + Send + Sync + 'static,
{
    fn call(&self, _source: &mut S, event: &mut E) -> D {
        self(event)
    }
}

impl<S, E, D, F> ActionFn<S, E, D, SourceEventArgs> for F
where
    F: Fn(&mut S, &mut E) -> D + Send + Sync + 'static,
{
    fn call(&self, source: &mut S, event: &mut E) -> D {
        self(source, event)
    }
}

impl<S, E> ActionFn<S, E, (), Pass> for Placeholder {
    const PASS: bool = true;

    fn call(&self, _source: &mut S, _event: &mut E) {}
}

/// Where a transition leads.
///
/// A state tag makes the transition external: the action's output becomes
/// the new state. The placeholder makes it internal.
pub trait Destination<SV: Alternatives>: 'static {
    /// What the action has to return.
    type Output;

    /// Destination kind, `None` for internal transitions.
    fn kind() -> Option<Kind>;

    /// Wrap the action's output as the next state, if any.
    fn commit(output: Self::Output) -> Option<SV>;
}

impl<SV, D> Destination<SV> for StateTag<D>
where
    SV: Alternatives,
    D: Alternative<SV>,
{
    type Output = D;

    fn kind() -> Option<Kind> {
        Some(Kind::of::<D>())
    }

    fn commit(output: D) -> Option<SV> {
        Some(output.wrap())
    }
}

impl<SV: Alternatives> Destination<SV> for Placeholder {
    type Output = ();

    fn kind() -> Option<Kind> {
        None
    }

    fn commit(_output: ()) -> Option<SV> {
        None
    }
}
