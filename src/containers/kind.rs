//! Runtime descriptors for kinds.
//!
//! A kind is a Rust type taking part in a machine, either as a state or as
//! an event. `Kind` carries its `TypeId` for identity and its type name for
//! diagnostics.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a `'static` type.
///
/// Two descriptors are equal iff they describe the same type; the name is
/// only used for display.
///
/// # Example
///
/// ```rust
/// use stateline::containers::Kind;
///
/// struct Idle;
/// struct Busy;
///
/// assert_eq!(Kind::of::<Idle>(), Kind::of::<Idle>());
/// assert_ne!(Kind::of::<Idle>(), Kind::of::<Busy>());
/// assert_eq!(Kind::of::<Idle>().short_name(), "Idle");
/// ```
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

impl Kind {
    /// Descriptor of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Check whether this descriptor identifies `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name, without generic arguments.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
