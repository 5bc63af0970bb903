//! Macros for declaring registry kinds.

/// Declares a zero-sized registry kind with a single macro invocation.
///
/// The macro generates a unit struct deriving `Default` (so the kind can be
/// used with [`RegistryContext`](crate::RegistryContext)) and a
/// [`RegistryKind`](crate::RegistryKind) implementation with the given name,
/// optional default values and optional silent-fail policy. Default values are
/// converted with `From`, so numeric literals for non-`i32` value types need a
/// suffix.
///
/// # Examples
///
/// ```rust
/// use lazy_value_registry::{define_registry, ValueRegistry};
///
/// define_registry!(pub BlockNames<String> = "block names", defaults = ["air", "stone"]);
///
/// let mut blocks = ValueRegistry::<BlockNames>::default();
/// assert!(blocks.has("air").unwrap());
/// assert!(blocks.add_value("stone").is_err());
/// ```
///
/// # Silent failure
///
/// ```rust
/// use lazy_value_registry::{define_registry, ValueRegistry};
///
/// define_registry!(Tags<String> = "tags", fail_silently = true);
///
/// let mut tags = ValueRegistry::<Tags>::default();
/// tags.add_value("shiny").unwrap();
/// tags.add_value("shiny").unwrap();
/// assert_eq!(tags.len(), 1);
/// ```
#[macro_export]
macro_rules! define_registry {
    (@silent) => {
        false
    };
    (@silent $silent:expr) => {
        $silent
    };
    (
        $(#[$meta:meta])*
        $vis:vis $kind:ident<$value:ty> = $name:expr
        $(, defaults = [$($default:expr),* $(,)?])?
        $(, fail_silently = $silent:expr)?
        $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $kind;

        impl $crate::RegistryKind for $kind {
            type Value = $value;

            fn name(&self) -> &str {
                $name
            }

            fn default_values(&self) -> ::std::vec::Vec<$value> {
                ::std::vec![$($(<$value as ::std::convert::From<_>>::from($default)),*)?]
            }

            fn fail_silently(&self) -> bool {
                $crate::define_registry!(@silent $($silent)?)
            }
        }
    };
}
