//! Basic usage example for lazy-value-registry.
//!
//! Demonstrates:
//! - Declaring a registry kind with default values
//! - Manual insertion and the duplicate policy
//! - Lazy population on the first `has()`
//! - Depopulating and resetting
//!
//! Run with: `cargo run --example basic_usage`

use lazy_value_registry::{define_registry, ValueRegistry};

define_registry!(BlockNames<String> = "block names", defaults = ["air", "stone"]);

fn main() {
    println!("=== lazy-value-registry: Basic Usage ===\n");

    let mut blocks = ValueRegistry::<BlockNames>::default();

    // -------------------------------------------------------------------------
    // 1. Defaults and manual values
    // -------------------------------------------------------------------------
    println!("1. Adding manual values...");

    blocks.add_value("glass").unwrap();
    println!("   Values: {:?}", blocks.values());

    match blocks.add_value("stone") {
        Ok(()) => println!("   Unexpectedly accepted a duplicate"),
        Err(err) => println!("   Rejected duplicate: {err}"),
    }

    // -------------------------------------------------------------------------
    // 2. Register a populator; nothing runs yet
    // -------------------------------------------------------------------------
    println!("\n2. Registering a populator...");

    blocks.register(|r: &mut ValueRegistry<BlockNames>| {
        println!("   (populator running)");
        r.add_values(["dirt", "sand", "gravel"])
    });
    println!("   Populated: {}", blocks.is_populated());

    // -------------------------------------------------------------------------
    // 3. First query populates, later ones reuse the result
    // -------------------------------------------------------------------------
    println!("\n3. Querying...");

    println!("   has(\"sand\") = {}", blocks.has("sand").unwrap());
    println!("   has(\"lava\") = {}", blocks.has("lava").unwrap());
    println!("   Values: {:?}", blocks.values());

    // -------------------------------------------------------------------------
    // 4. Depopulate keeps manual values, reset goes back to defaults
    // -------------------------------------------------------------------------
    println!("\n4. Depopulating and resetting...");

    blocks.depopulate();
    println!("   After depopulate: {:?}", blocks.values());

    blocks.reset();
    println!("   After reset: {:?}", blocks.values());

    println!("\n=== Done ===");
}
