//! Custom populator example for lazy-value-registry.
//!
//! Demonstrates:
//! - Implementing `Populator` on a struct
//! - The string-only variant rejecting non-string input
//! - A failing populator and retrying the pass
//! - Structured logging through `tracing`
//!
//! Run with: `cargo run --example custom_populators`

use lazy_value_registry::{
    define_registry, Populator, RegistryError, StringsOnly, Value, ValueRegistry,
};
use std::sync::atomic::{AtomicBool, Ordering};

define_registry!(ItemIds<Value> = "item ids");

type Items = StringsOnly<ItemIds>;

/// Stands in for an expensive data source such as a version manifest.
struct VersionManifest {
    version: &'static str,
    reachable: AtomicBool,
}

impl Populator<Items> for VersionManifest {
    fn populate(&self, registry: &mut ValueRegistry<Items>) -> Result<(), RegistryError> {
        if !self.reachable.swap(true, Ordering::SeqCst) {
            return Err(RegistryError::populator_failed(
                registry.name(),
                format!("manifest for {} unreachable", self.version),
            ));
        }

        registry.add_values(["minecraft:stick", "minecraft:torch"])?;
        // A malformed entry in the data source
        registry.add_value(17)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== lazy-value-registry: Custom Populators ===\n");

    let mut items = ValueRegistry::new(StringsOnly(ItemIds));
    items.register(VersionManifest {
        version: "1.21",
        reachable: AtomicBool::new(false),
    });

    println!("1. First query, data source offline...");
    match items.has(&Value::from("minecraft:stick")) {
        Ok(found) => println!("   found: {found}"),
        Err(err) => println!("   error: {err}"),
    }

    println!("\n2. Retrying, data source has a non-string entry...");
    match items.has(&Value::from("minecraft:stick")) {
        Ok(found) => println!("   found: {found}"),
        Err(err) => println!("   error: {err}"),
    }
    println!("   Partially populated values: {:?}", items.values());

    println!("\n3. Replacing the populator...");
    items.clear_populators();
    items.depopulate();
    items.register(|r: &mut ValueRegistry<Items>| r.add_values(["minecraft:stick"]));
    println!(
        "   found: {}",
        items.has(&Value::from("minecraft:stick")).unwrap()
    );

    println!("\n=== Done ===");
}
