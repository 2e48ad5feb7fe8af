//! Transitions: a key, a guard, an action and a destination.

use super::action::Action;
use super::callable::{ActionFn, Destination, GuardFn};
use super::guard::Guard;
use super::key::Key;
use super::tag::{EventTag, StateTag};
use crate::containers::Kind;
use crate::variant::{Alternative, Alternatives, VariantAccessError};
use std::fmt;

/// One entry of a transition table.
///
/// A transition fires on its [`Key`] when its guard passes. External
/// transitions replace the state with the action's output; internal ones
/// (placeholder destination) leave the state in place.
pub struct Transition<SV, EV> {
    key: Key,
    destination: Option<Kind>,
    guard: Guard<SV, EV>,
    action: Action<SV, EV>,
}

/// Build a transition from `source` on `event` to `destination`.
///
/// Pass [`Placeholder`](super::Placeholder) as the guard for "always", as
/// the action for "do nothing" and as the destination for "stay".
///
/// # Example
///
/// ```rust
/// use stateline::transition::{event, make_transition, state, Placeholder, Transition};
/// use stateline::variant;
///
/// pub struct Locked;
/// pub struct Unlocked;
/// pub struct Coin(pub u32);
///
/// variant! { pub enum Turnstile { Locked, Unlocked } }
/// variant! { pub enum Input { Coin } }
///
/// let pay: Transition<Turnstile, Input> = make_transition(
///     state::<Locked>(),
///     event::<Coin>(),
///     |coin: &Coin| coin.0 >= 25,
///     || Unlocked,
///     state::<Unlocked>(),
/// );
/// assert!(!pay.is_internal());
///
/// let spare: Transition<Turnstile, Input> = make_transition(
///     state::<Unlocked>(),
///     event::<Coin>(),
///     Placeholder,
///     Placeholder,
///     Placeholder,
/// );
/// assert!(spare.ignores_event());
/// ```
pub fn make_transition<SV, EV, S, E, G, GM, A, AM, D>(
    _source: StateTag<S>,
    _event: EventTag<E>,
    guard: G,
    action: A,
    _destination: D,
) -> Transition<SV, EV>
where
    SV: Alternatives,
    EV: Alternatives,
    S: Alternative<SV>,
    E: Alternative<EV>,
    G: GuardFn<S, E, GM>,
    GM: 'static,
    D: Destination<SV>,
    A: ActionFn<S, E, D::Output, AM>,
    AM: 'static,
{
    Transition {
        key: Key::of::<S, E>(),
        destination: D::kind(),
        guard: Guard::new::<S, E, G, GM>(guard),
        action: Action::new::<S, E, D, A, AM>(action),
    }
}

impl<SV: Alternatives, EV: Alternatives> Transition<SV, EV> {
    pub fn key(&self) -> Key {
        self.key
    }

    pub fn source(&self) -> Kind {
        self.key.source
    }

    pub fn event(&self) -> Kind {
        self.key.event
    }

    /// Destination kind, `None` for an internal transition.
    pub fn destination(&self) -> Option<Kind> {
        self.destination
    }

    pub fn is_internal(&self) -> bool {
        self.destination.is_none()
    }

    /// Whether the guard is the placeholder.
    pub fn has_empty_guard(&self) -> bool {
        self.guard.is_always()
    }

    /// Whether the event is acknowledged without any effect: an internal
    /// transition whose action is the placeholder.
    pub fn ignores_event(&self) -> bool {
        self.is_internal() && self.action.is_pass()
    }

    pub fn invoke_guard(&self, source: &SV, event: &EV) -> bool {
        self.guard.check(source, event)
    }

    pub fn invoke_action(
        &self,
        source: &mut SV,
        event: &mut EV,
    ) -> Result<Option<SV>, VariantAccessError> {
        self.action.invoke(source, event)
    }
}

impl<SV, EV> fmt::Debug for Transition<SV, EV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("source", &self.key.source)
            .field("event", &self.key.event)
            .field("destination", &self.destination)
            .field("empty_guard", &self.guard.is_always())
            .field("pass", &self.action.is_pass())
            .finish()
    }
}
