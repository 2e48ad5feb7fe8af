//! Tagged union storage holding at most one alternative.

use super::alternatives::{Alternative, Alternatives, Empty, EMPTY_TAG};
use super::error::VariantAccessError;
use crate::containers::{IndexMap, Kind, KindList};
use std::fmt;

/// Storage for exactly one value out of the closed set `A`, or nothing.
///
/// A new variant is empty. Storing a value destroys the previous one
/// first, whatever its kind; reading through a type-qualified accessor
/// checks the tag and reports a [`VariantAccessError`] on mismatch.
///
/// # Example
///
/// ```rust
/// use stateline::variant;
/// use stateline::variant::Variant;
///
/// #[derive(Debug, PartialEq)]
/// pub struct Idle;
/// #[derive(Debug, PartialEq)]
/// pub struct Busy(u32);
///
/// variant! {
///     pub enum Work { Idle, Busy }
/// }
///
/// let mut v: Variant<Work> = Variant::new();
/// assert!(v.is_empty());
///
/// v.emplace(|| Busy(3));
/// assert!(v.holds::<Busy>());
/// assert_eq!(v.get::<Busy>().unwrap(), &Busy(3));
/// assert!(v.get::<Idle>().is_err());
///
/// assert_eq!(v.take::<Busy>().unwrap(), Busy(3));
/// assert!(v.is_empty());
/// ```
pub struct Variant<A> {
    slot: Option<A>,
}

impl<A: Alternatives> Variant<A> {
    /// Create an empty variant.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Ordinals of `[Empty, T1..Tn]`, the sentinel first.
    pub fn alternative_index_map() -> IndexMap<Kind> {
        let kinds = KindList::from(vec![Kind::of::<Empty>()]).concat(A::kinds());
        IndexMap::from_unique(kinds)
    }

    /// Tag of the active alternative; `0` when empty.
    pub fn index(&self) -> usize {
        self.slot.as_ref().map_or(EMPTY_TAG, Alternatives::tag)
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Kind of the active alternative, `None` when empty.
    pub fn active_kind(&self) -> Option<Kind> {
        self.slot.as_ref().map(Alternatives::kind)
    }

    pub fn holds<T: Alternative<A>>(&self) -> bool {
        self.index() == T::TAG
    }

    /// Destroy the active value, then construct `T` from `make` and store it.
    pub fn emplace<T, F>(&mut self, make: F) -> &mut T
    where
        T: Alternative<A>,
        F: FnOnce() -> T,
    {
        self.slot = None;
        let value = make();
        Self::stored(self.slot.insert(value.wrap()))
    }

    pub fn emplace_default<T>(&mut self) -> &mut T
    where
        T: Alternative<A> + Default,
    {
        self.emplace(T::default)
    }

    /// Destroy the active value and store `value`.
    pub fn set<T: Alternative<A>>(&mut self, value: T) -> &mut T {
        self.slot = None;
        Self::stored(self.slot.insert(value.wrap()))
    }

    /// Destroy the active value and store an already wrapped alternative.
    pub fn set_alternatives(&mut self, alternatives: A) -> &mut A {
        self.slot = None;
        self.slot.insert(alternatives)
    }

    pub fn get<T: Alternative<A>>(&self) -> Result<&T, VariantAccessError> {
        match self.slot.as_ref().and_then(T::peek) {
            Some(value) => Ok(value),
            None => Err(self.mismatch::<T>()),
        }
    }

    pub fn get_mut<T: Alternative<A>>(&mut self) -> Result<&mut T, VariantAccessError> {
        let error = self.mismatch::<T>();
        self.slot.as_mut().and_then(T::peek_mut).ok_or(error)
    }

    pub fn get_if<T: Alternative<A>>(&self) -> Option<&T> {
        self.slot.as_ref().and_then(T::peek)
    }

    pub fn get_if_mut<T: Alternative<A>>(&mut self) -> Option<&mut T> {
        self.slot.as_mut().and_then(T::peek_mut)
    }

    /// Move the active `T` out, leaving the variant empty.
    ///
    /// On mismatch the variant is left untouched.
    pub fn take<T: Alternative<A>>(&mut self) -> Result<T, VariantAccessError> {
        let Some(alternatives) = self.slot.take() else {
            return Err(self.mismatch::<T>());
        };
        match T::unwrap(alternatives) {
            Ok(value) => Ok(value),
            Err(other) => {
                self.slot = Some(other);
                Err(self.mismatch::<T>())
            }
        }
    }

    /// Destroy the active value, if any.
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Move the whole content into a new variant, leaving this one empty.
    pub fn transfer(&mut self) -> Self {
        Self {
            slot: self.slot.take(),
        }
    }

    /// Call `f` with the active value.
    ///
    /// `f` sees the value through the set's object type (`dyn Any` unless
    /// the set names another). For per-kind dispatch without downcasting,
    /// match on [`as_alternatives`](Self::as_alternatives) instead:
    ///
    /// ```
    /// use stateline::variant;
    /// use stateline::variant::Variant;
    ///
    /// pub struct Circle(f64);
    /// pub struct Square(f64);
    ///
    /// variant! { pub enum Shape { Circle, Square } }
    ///
    /// let mut shape: Variant<Shape> = Variant::new();
    /// shape.set(Square(2.0));
    ///
    /// let area = match shape.as_alternatives() {
    ///     Some(Shape::Circle(c)) => 3.0 * c.0 * c.0,
    ///     Some(Shape::Square(s)) => s.0 * s.0,
    ///     None => 0.0,
    /// };
    /// assert_eq!(area, 4.0);
    /// ```
    pub fn visit<R, F>(&self, f: F) -> Result<R, VariantAccessError>
    where
        F: FnOnce(&A::Dyn) -> R,
    {
        match &self.slot {
            Some(alternatives) => Ok(f(alternatives.as_dyn())),
            None => Err(VariantAccessError::Vacant),
        }
    }

    /// Call `f` with the active value, mutably.
    pub fn visit_mut<R, F>(&mut self, f: F) -> Result<R, VariantAccessError>
    where
        F: FnOnce(&mut A::Dyn) -> R,
    {
        match &mut self.slot {
            Some(alternatives) => Ok(f(alternatives.as_dyn_mut())),
            None => Err(VariantAccessError::Vacant),
        }
    }

    /// The active alternative as the set enum, `None` when empty.
    pub fn as_alternatives(&self) -> Option<&A> {
        self.slot.as_ref()
    }

    pub fn as_alternatives_mut(&mut self) -> Option<&mut A> {
        self.slot.as_mut()
    }

    pub fn into_alternatives(self) -> Option<A> {
        self.slot
    }

    fn mismatch<T: Alternative<A>>(&self) -> VariantAccessError {
        VariantAccessError::Mismatch {
            expected: T::kind(),
            found: self.active_kind().unwrap_or_else(Kind::of::<Empty>),
        }
    }

    fn stored<T: Alternative<A>>(alternatives: &mut A) -> &mut T {
        T::peek_mut(alternatives).expect("a freshly stored alternative has its own kind")
    }
}

impl<A: Alternatives> Default for Variant<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Alternatives> From<A> for Variant<A> {
    fn from(alternatives: A) -> Self {
        Self {
            slot: Some(alternatives),
        }
    }
}

impl<A: Alternatives + fmt::Debug> fmt::Debug for Variant<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(alternatives) => f.debug_tuple("Variant").field(alternatives).finish(),
            None => f.debug_tuple("Variant").field(&Empty).finish(),
        }
    }
}
