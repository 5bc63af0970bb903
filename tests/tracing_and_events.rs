//! Integration tests for tracing and event monitoring.
//!
//! Registries log through `tracing`; the per-registry trace callback is for
//! callers that want the events themselves.

use lazy_value_registry::{define_registry, RegistryEvent, RegistryKind, ValueRegistry};
use std::sync::{Arc, Mutex};

define_registry!(Traced<String> = "traced", defaults = ["air"]);
define_registry!(QuietTraced<String> = "quiet", fail_silently = true);

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn collect(registry: &mut ValueRegistry<impl RegistryKind>) -> Arc<Mutex<Vec<String>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    registry.set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });
    events
}

#[test]
fn test_full_lifecycle_trace() {
    init_logging();

    let mut registry = ValueRegistry::<Traced>::default();
    let events = collect(&mut registry);
    registry.register(|r: &mut ValueRegistry<Traced>| r.add_value("stone"));

    registry.add_value("glass").unwrap();
    assert!(registry.has("stone").unwrap());
    registry.depopulate();
    registry.reset();
    registry.clear();

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            "insert { registry: traced, value: \"glass\", dynamic: false }",
            "insert { registry: traced, value: \"stone\", dynamic: true }",
            "populate { registry: traced, populators: 1 }",
            "depopulate { registry: traced }",
            "reset { registry: traced }",
            "clear { registry: traced }",
        ]
    );
}

#[test]
fn test_reject_event_emitted_for_silent_failures() {
    init_logging();

    let mut registry = ValueRegistry::<QuietTraced>::default();
    let events = collect(&mut registry);

    registry.add_value("a").unwrap();
    registry.add_value("a").unwrap();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[1], "reject { registry: quiet, value: \"a\" }");
}

#[test]
fn test_populate_event_only_once() {
    init_logging();

    let mut registry = ValueRegistry::<Traced>::default();
    let events = collect(&mut registry);

    for _ in 0..3 {
        assert!(registry.has("air").unwrap());
    }

    let captured = events.lock().unwrap();
    assert_eq!(*captured, vec!["populate { registry: traced, populators: 0 }"]);
}

#[test]
fn test_clear_trace_callback() {
    let mut registry = ValueRegistry::<Traced>::default();
    let events = collect(&mut registry);

    registry.add_value("one").unwrap();
    registry.clear_trace_callback();
    registry.add_value("two").unwrap();
    registry.reset();

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_replacement() {
    let mut registry = ValueRegistry::<Traced>::default();
    let first = collect(&mut registry);
    registry.add_value("one").unwrap();

    let second = collect(&mut registry);
    registry.add_value("two").unwrap();

    assert_eq!(first.lock().unwrap().len(), 1);
    assert_eq!(second.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_with_custom_logic() {
    let inserts = Arc::new(Mutex::new(0));
    let dynamic_inserts = Arc::new(Mutex::new(0));
    let inserts_clone = inserts.clone();
    let dynamic_clone = dynamic_inserts.clone();

    let mut registry = ValueRegistry::<Traced>::default();
    registry.set_trace_callback(move |event| {
        if let RegistryEvent::Insert { dynamic, .. } = event {
            *inserts_clone.lock().unwrap() += 1;
            if *dynamic {
                *dynamic_clone.lock().unwrap() += 1;
            }
        }
    });
    registry.register(|r: &mut ValueRegistry<Traced>| r.add_values(["dirt", "sand"]));

    registry.add_value("glass").unwrap();
    registry.populate().unwrap();

    assert_eq!(*inserts.lock().unwrap(), 3);
    assert_eq!(*dynamic_inserts.lock().unwrap(), 2);
}
