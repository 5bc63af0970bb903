//! Capabilities that distinguish one kind of registry from another.
//!
//! A [`ValueRegistry`](crate::ValueRegistry) owns the storage and lifecycle;
//! the kind supplies the name, the default values, the validation hook and the
//! silent-fail policy. Variants are built by composing kinds, not by
//! overriding registry behavior.

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::Value;

/// Core trait describing a kind of registry.
///
/// Only [`name`](RegistryKind::name) is required; everything else has a
/// default matching a plain, strict, initially empty registry.
pub trait RegistryKind: Send + Sync + 'static {
    /// Values stored by registries of this kind. Duplicates are detected by `Eq`/`Hash`.
    type Value: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// Diagnostic name of the registry.
    fn name(&self) -> &str;

    /// Values present from construction and reinstated by every reset.
    fn default_values(&self) -> Vec<Self::Value> {
        Vec::new()
    }

    /// Extra validation, checked before the duplicate check.
    ///
    /// The registry itself rejects values already in its effective set; this
    /// hook only has to say whether the value is acceptable at all.
    fn valid_value(&self, _value: &Self::Value) -> bool {
        true
    }

    /// When `true`, invalid insertions are ignored instead of failing.
    fn fail_silently(&self) -> bool {
        false
    }
}

/// Restricts a [`Value`]-typed kind to string values.
///
/// The wrapped kind's validation still applies after the type check.
///
/// ```rust
/// use lazy_value_registry::{AdHoc, StringsOnly, Value, ValueRegistry};
///
/// let kind = StringsOnly(AdHoc::<Value>::named("block names"));
/// let mut blocks = ValueRegistry::new(kind);
/// assert!(blocks.add_value("stone").is_ok());
/// assert!(blocks.add_value(42).unwrap_err().is_invalid_value());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringsOnly<K>(pub K);

impl<K> RegistryKind for StringsOnly<K>
where
    K: RegistryKind<Value = Value>,
{
    type Value = Value;

    fn name(&self) -> &str {
        self.0.name()
    }

    fn default_values(&self) -> Vec<Value> {
        self.0.default_values()
    }

    fn valid_value(&self, value: &Value) -> bool {
        value.is_str() && self.0.valid_value(value)
    }

    fn fail_silently(&self) -> bool {
        self.0.fail_silently()
    }
}

/// A kind configured at runtime, for ad hoc sets that need no declared type.
#[derive(Debug, Clone)]
pub struct AdHoc<V> {
    name: String,
    defaults: Vec<V>,
    fail_silently: bool,
    _value: PhantomData<fn() -> V>,
}

impl<V> AdHoc<V> {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            defaults: Vec::new(),
            fail_silently: false,
            _value: PhantomData,
        }
    }

    pub fn with_defaults(mut self, defaults: impl IntoIterator<Item = V>) -> Self {
        self.defaults = defaults.into_iter().collect();
        self
    }

    pub fn with_fail_silently(mut self, fail_silently: bool) -> Self {
        self.fail_silently = fail_silently;
        self
    }
}

impl<V> RegistryKind for AdHoc<V>
where
    V: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    type Value = V;

    fn name(&self) -> &str {
        &self.name
    }

    fn default_values(&self) -> Vec<V> {
        self.defaults.clone()
    }

    fn fail_silently(&self) -> bool {
        self.fail_silently
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl RegistryKind for Plain {
        type Value = u32;

        fn name(&self) -> &str {
            "plain"
        }
    }

    #[test]
    fn test_trait_defaults() {
        assert!(Plain.default_values().is_empty());
        assert!(Plain.valid_value(&7));
        assert!(!Plain.fail_silently());
    }

    #[test]
    fn test_ad_hoc_builder() {
        let kind = AdHoc::named("numbers")
            .with_defaults([1, 2, 3])
            .with_fail_silently(true);
        assert_eq!(kind.name(), "numbers");
        assert_eq!(kind.default_values(), vec![1, 2, 3]);
        assert!(kind.fail_silently());
    }

    #[test]
    fn test_strings_only_delegates() {
        let kind = StringsOnly(
            AdHoc::named("names")
                .with_defaults([Value::from("a")])
                .with_fail_silently(true),
        );
        assert_eq!(kind.name(), "names");
        assert_eq!(kind.default_values(), vec![Value::from("a")]);
        assert!(kind.fail_silently());
    }

    #[test]
    fn test_strings_only_rejects_non_strings() {
        let kind = StringsOnly(AdHoc::<Value>::named("names"));
        assert!(kind.valid_value(&Value::from("stone")));
        assert!(!kind.valid_value(&Value::from(42)));
        assert!(!kind.valid_value(&Value::from(true)));
    }

    #[test]
    fn test_strings_only_composes_inner_validation() {
        struct ShortNames;

        impl RegistryKind for ShortNames {
            type Value = Value;

            fn name(&self) -> &str {
                "short names"
            }

            fn valid_value(&self, value: &Value) -> bool {
                match value.as_str() {
                    Some(s) => s.len() <= 4,
                    None => true,
                }
            }
        }

        let kind = StringsOnly(ShortNames);
        assert!(kind.valid_value(&Value::from("ore")));
        assert!(!kind.valid_value(&Value::from("obsidian")));
        assert!(!kind.valid_value(&Value::from(1)));
    }
}
