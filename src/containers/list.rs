//! Ordered kind lists and the operations over them.
//!
//! Every operation is pure: it borrows or consumes a list and returns a new
//! one, leaving the input untouched.

use super::kind::Kind;

/// Ordered sequence of elements, compared by equality.
///
/// # Example
///
/// ```rust
/// use stateline::containers::{Kind, KindList};
///
/// struct A;
/// struct B;
///
/// let list: KindList = vec![Kind::of::<A>(), Kind::of::<B>(), Kind::of::<A>()].into();
/// let unique = list.make_unique();
///
/// assert_eq!(unique.len(), 2);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

/// List of kind descriptors.
pub type KindList = List<Kind>;

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Apply `f` to each element, keeping order and length.
    pub fn map<U, F>(&self, f: F) -> List<U>
    where
        F: FnMut(&T) -> U,
    {
        self.items.iter().map(f).collect()
    }

    /// Keep the elements for which `f` returns `Some`, mapped.
    pub fn filter_map<U, F>(&self, f: F) -> List<U>
    where
        F: FnMut(&T) -> Option<U>,
    {
        self.items.iter().filter_map(f).collect()
    }

    /// Append the elements of `other` after the elements of `self`.
    pub fn concat(self, other: List<T>) -> Self {
        let mut items = self.items;
        items.extend(other.items);
        Self { items }
    }

    /// Collect the same elements, in the same order, into another container.
    pub fn repack<C>(self) -> C
    where
        C: FromIterator<T>,
    {
        self.items.into_iter().collect()
    }
}

impl<T: PartialEq> List<T> {
    /// Check whether `item` occurs in the list.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Position of the first occurrence of `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

impl<T: PartialEq + Clone> List<T> {
    /// Remove duplicates, keeping the first occurrence of each element.
    pub fn make_unique(&self) -> Self {
        let mut items: Vec<T> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !items.contains(item) {
                items.push(item.clone());
            }
        }
        Self { items }
    }

    /// Keep the elements satisfying `pred`, in order.
    pub fn filter<P>(&self, mut pred: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| pred(item)).cloned().collect()
    }
}

impl<T> List<List<T>> {
    /// Concatenate one level of nested lists.
    pub fn flatten(self) -> List<T> {
        self.items.into_iter().flat_map(|inner| inner.items).collect()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
