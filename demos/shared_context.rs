//! Shared context example for lazy-value-registry.
//!
//! Demonstrates:
//! - One registry instance per kind through `RegistryContext`
//! - Seed values only applying on first access
//! - Sharing an instance between threads
//!
//! Run with: `cargo run --example shared_context`

use lazy_value_registry::{define_registry, lock_registry, RegistryContext, ValueRegistry};
use std::sync::Arc;
use std::thread;

define_registry!(Biomes<String> = "biomes", defaults = ["plains"]);

fn main() {
    println!("=== lazy-value-registry: Shared Context ===\n");

    let context = Arc::new(RegistryContext::new());

    // -------------------------------------------------------------------------
    // 1. First access creates and seeds the instance
    // -------------------------------------------------------------------------
    println!("1. First access...");

    let biomes = context.get::<Biomes, _>(["desert"]).unwrap();
    lock_registry(&biomes).register(|r: &mut ValueRegistry<Biomes>| {
        r.add_values(["forest", "taiga", "ocean"])
    });
    println!("   Values: {:?}", lock_registry(&biomes).values());

    // -------------------------------------------------------------------------
    // 2. Later seeds are ignored
    // -------------------------------------------------------------------------
    println!("\n2. Second access with other seed values...");

    let again = context.get::<Biomes, _>(["swamp"]).unwrap();
    println!("   Same instance: {}", Arc::ptr_eq(&biomes, &again));
    println!("   Values: {:?}", lock_registry(&again).values());

    // -------------------------------------------------------------------------
    // 3. Threads query the same instance; population happens once
    // -------------------------------------------------------------------------
    println!("\n3. Querying from threads...");

    let handles: Vec<_> = ["forest", "swamp", "ocean"]
        .into_iter()
        .map(|biome| {
            let context = context.clone();
            thread::spawn(move || {
                let biomes = context.get_default::<Biomes>().unwrap();
                let found = lock_registry(&biomes).has(biome).unwrap();
                println!("   has({biome:?}) = {found}");
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Populated: {}",
        lock_registry(&biomes).is_populated()
    );

    println!("\n=== Done ===");
}
