//! Integration tests for the ready-made registry variants and custom kinds.

use lazy_value_registry::{
    define_registry, AdHoc, RegistryKind, StringsOnly, Value, ValueRegistry, ValueSet,
};

define_registry!(BlockNames<Value> = "block names", defaults = ["air"]);

#[test]
fn test_strings_only_rejects_integers() {
    let mut registry = ValueRegistry::new(StringsOnly(BlockNames));

    // Rejected whether or not the value is a duplicate
    assert!(registry.add_value(42).unwrap_err().is_invalid_value());
    assert!(registry.add_value(true).unwrap_err().is_invalid_value());
    assert!(registry.add_value("stone").is_ok());
    assert!(registry.add_value("stone").unwrap_err().is_invalid_value());

    assert_eq!(
        registry.values(),
        vec![Value::from("air"), Value::from("stone")]
    );
}

#[test]
fn test_strings_only_applies_to_populators() {
    let mut registry = ValueRegistry::new(StringsOnly(BlockNames));
    registry.register(|r: &mut ValueRegistry<StringsOnly<BlockNames>>| {
        r.add_values([Value::from("dirt"), Value::from(3)])
    });

    assert!(registry.has(&Value::from("dirt")).is_err());
    assert!(!registry.is_populated());
}

#[test]
fn test_strings_only_silent() {
    let mut registry = ValueRegistry::new(StringsOnly(
        AdHoc::<Value>::named("quiet names").with_fail_silently(true),
    ));

    registry.add_values([Value::from(1), Value::from("a"), Value::from("a")])
        .unwrap();
    assert_eq!(registry.values(), vec![Value::from("a")]);
}

#[test]
fn test_ad_hoc_set_needs_no_declared_kind() {
    let mut set: ValueSet<&'static str> = ValueSet::named("scratch");
    set.add_values(["x", "y"]).unwrap();

    assert_eq!(set.name(), "scratch");
    assert!(set.has("x").unwrap());
    assert!(set.add_value("y").is_err());
}

#[test]
fn test_ad_hoc_defaults_survive_reset() {
    let mut set = ValueRegistry::new(AdHoc::named("versions").with_defaults(["1.20", "1.21"]));
    set.add_value("1.22").unwrap();
    set.reset();
    assert_eq!(set.values(), vec!["1.20", "1.21"]);
}

#[test]
fn test_custom_validation_hook() {
    /// Only lowercase, namespaced identifiers.
    struct Identifiers;

    impl RegistryKind for Identifiers {
        type Value = String;

        fn name(&self) -> &str {
            "identifiers"
        }

        fn valid_value(&self, value: &String) -> bool {
            value.contains(':') && value.chars().all(|c| !c.is_uppercase())
        }
    }

    let mut registry = ValueRegistry::new(Identifiers);
    assert!(registry.add_value("minecraft:stone").is_ok());
    assert!(registry.add_value("Minecraft:Stone").is_err());
    assert!(registry.add_value("stone").is_err());
    assert!(registry.valid_value(&"minecraft:dirt".to_string()));
    assert!(!registry.valid_value(&"minecraft:stone".to_string()));
}
