//! Zero-sized tags naming the kinds a transition is declared over.

use std::fmt;
use std::marker::PhantomData;

/// Names the state kind `T` in a transition declaration.
pub struct StateTag<T>(PhantomData<fn() -> T>);

/// Names the event kind `T` in a transition declaration.
pub struct EventTag<T>(PhantomData<fn() -> T>);

/// Tag for the state kind `T`.
pub const fn state<T>() -> StateTag<T> {
    StateTag(PhantomData)
}

/// Tag for the event kind `T`.
pub const fn event<T>() -> EventTag<T> {
    EventTag(PhantomData)
}

/// Explicit "nothing here" marker.
///
/// As a guard it always passes, as an action it does nothing, and as a
/// destination it marks the transition internal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placeholder;

macro_rules! impl_tag {
    ($tag:ident, $label:literal) => {
        impl<T> Clone for $tag<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $tag<T> {}

        impl<T> Default for $tag<T> {
            fn default() -> Self {
                $tag(PhantomData)
            }
        }

        impl<T> fmt::Debug for $tag<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", $label, std::any::type_name::<T>())
            }
        }
    };
}

impl_tag!(StateTag, "StateTag");
impl_tag!(EventTag, "EventTag");
