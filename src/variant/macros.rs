//! Macros declaring closed alternative sets.

/// Declare a closed set of alternative kinds.
///
/// Generates an enum with one tuple variant per listed type, an
/// [`Alternatives`](crate::variant::Alternatives) impl for the enum and an
/// [`Alternative`](crate::variant::Alternative) impl for every member.
/// Tags are assigned in declaration order starting at `1`.
///
/// An optional object type after the name sets what `visit` hands out;
/// it defaults to `dyn Any`.
///
/// # Example
///
/// ```
/// use stateline::variant;
/// use stateline::variant::{Alternative, Alternatives};
///
/// pub struct Red;
/// pub struct Green;
///
/// variant! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::SIZE, 2);
/// assert_eq!(<Green as Alternative<Light>>::TAG, 2);
/// ```
#[macro_export]
macro_rules! variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(: $dyn:ty)? {
            $(
                $(#[$alt_meta:meta])*
                $alt:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$alt_meta])*
                $alt($alt)
            ),+
        }

        impl $crate::variant::Alternatives for $name {
            type Dyn = $crate::__variant_dyn!($($dyn)?);

            const SIZE: usize = [$(stringify!($alt)),+].len();

            fn kinds() -> $crate::containers::KindList {
                $crate::containers::KindList::from(::std::vec![
                    $($crate::containers::Kind::of::<$alt>()),+
                ])
            }

            fn tag(&self) -> usize {
                match self {
                    $(Self::$alt(_) => <$alt as $crate::variant::Alternative<Self>>::TAG),+
                }
            }

            fn kind(&self) -> $crate::containers::Kind {
                match self {
                    $(Self::$alt(_) => $crate::containers::Kind::of::<$alt>()),+
                }
            }

            fn as_dyn(&self) -> &Self::Dyn {
                match self {
                    $(Self::$alt(value) => value as &Self::Dyn),+
                }
            }

            fn as_dyn_mut(&mut self) -> &mut Self::Dyn {
                match self {
                    $(Self::$alt(value) => value as &mut Self::Dyn),+
                }
            }
        }

        $crate::__variant_alternatives!($name; 1usize; $($alt),+);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_dyn {
    () => {
        dyn ::core::any::Any
    };
    ($dyn:ty) => {
        $dyn
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_alternatives {
    ($name:ident; $tag:expr;) => {};
    ($name:ident; $tag:expr; $alt:ident $(, $rest:ident)*) => {
        #[allow(unreachable_patterns)]
        impl $crate::variant::Alternative<$name> for $alt {
            const TAG: usize = $tag;

            fn wrap(self) -> $name {
                $name::$alt(self)
            }

            fn peek(alternatives: &$name) -> ::core::option::Option<&Self> {
                match alternatives {
                    $name::$alt(value) => ::core::option::Option::Some(value),
                    _ => ::core::option::Option::None,
                }
            }

            fn peek_mut(alternatives: &mut $name) -> ::core::option::Option<&mut Self> {
                match alternatives {
                    $name::$alt(value) => ::core::option::Option::Some(value),
                    _ => ::core::option::Option::None,
                }
            }

            fn unwrap(alternatives: $name) -> ::core::result::Result<Self, $name> {
                match alternatives {
                    $name::$alt(value) => ::core::result::Result::Ok(value),
                    other => ::core::result::Result::Err(other),
                }
            }
        }

        $crate::__variant_alternatives!($name; $tag + 1usize; $($rest),*);
    };
}
