//! Traits describing a closed set of alternative kinds.
//!
//! A set is a plain enum with one tuple variant per member type. The
//! [`variant!`](crate::variant!) macro generates the enum together with the
//! impls below, so a type outside the set has no `Alternative` impl and is
//! rejected at compile time wherever a member is required.

use crate::containers::{Kind, KindList};

/// Tag reserved for the `empty` sentinel.
pub const EMPTY_TAG: usize = 0;

/// Sentinel kind held by a [`Variant`](super::Variant) that stores nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Empty;

/// A closed, ordered set of alternative kinds.
pub trait Alternatives: Sized + 'static {
    /// Object type the active payload is viewed through by `visit`.
    type Dyn: ?Sized;

    /// Number of alternatives, not counting `empty`.
    const SIZE: usize;

    /// Member kinds in declaration order.
    fn kinds() -> KindList;

    /// Tag of the active alternative, in `1..=SIZE`.
    fn tag(&self) -> usize;

    /// Kind of the active alternative.
    fn kind(&self) -> Kind;

    fn as_dyn(&self) -> &Self::Dyn;

    fn as_dyn_mut(&mut self) -> &mut Self::Dyn;
}

/// A member type of the set `A`.
pub trait Alternative<A: Alternatives>: Sized + 'static {
    /// Tag of this alternative, in `1..=A::SIZE`.
    const TAG: usize;

    fn kind() -> Kind {
        Kind::of::<Self>()
    }

    /// Store this value as the set's active alternative.
    fn wrap(self) -> A;

    fn peek(alternatives: &A) -> Option<&Self>;

    fn peek_mut(alternatives: &mut A) -> Option<&mut Self>;

    /// Move the value out, or hand the set back if another kind is active.
    fn unwrap(alternatives: A) -> Result<Self, A>;
}
