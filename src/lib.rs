//! # Lazy Value Registry
//!
//! Named collections of unique values that defer expensive population work
//! until first queried, then cache the result for the rest of the process.
//!
//! Useful when many large validation sets are declared ("all valid block
//! names for version X") but only a few are ever consulted.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazy_value_registry::{define_registry, ValueRegistry};
//!
//! define_registry!(pub Blocks<String> = "blocks", defaults = ["air"]);
//!
//! let mut blocks = ValueRegistry::<Blocks>::default();
//! blocks.register(|r: &mut ValueRegistry<Blocks>| r.add_values(["stone", "dirt"]));
//!
//! // Nothing has been loaded yet
//! assert_eq!(blocks.values(), vec!["air".to_string()]);
//!
//! // The first query runs the populators, later queries reuse the result
//! assert!(blocks.has("stone").unwrap());
//! assert!(blocks.is_populated());
//! ```
//!
//! ## Features
//!
//! - **Lazy**: populators run once, on the first [`ValueRegistry::has`] or
//!   [`ValueRegistry::populate`]
//! - **Unique**: duplicates are rejected with [`RegistryError::InvalidValue`], or ignored by kinds
//!   that fail silently
//! - **Undoable**: [`ValueRegistry::depopulate`] drops only what populators added,
//!   [`ValueRegistry::reset`] goes back to the defaults
//! - **One instance per kind**: [`RegistryContext`] hands out a shared instance keyed by type
//! - **Tracing**: structured `tracing` logs and an optional per-registry event callback
//!
//! ## Main Types
//!
//! - [`ValueRegistry`] - the value store and population lifecycle
//! - [`RegistryKind`] - name, defaults, validation and silent-fail policy of a registry
//! - [`Populator`] - produces values during a population pass
//! - [`RegistryContext`] - registry of registries
//! - [`StringsOnly`] / [`AdHoc`] / [`ValueSet`] - ready-made variants

mod macros;
mod populator;
mod registry;
mod registry_context;
mod registry_error;
mod registry_event;
mod registry_kind;
mod value;

pub use populator::Populator;
pub use registry::{ValueRegistry, ValueSet};
pub use registry_context::{get, get_default, lock_registry, RegistryContext, SharedRegistry};
pub use registry_error::RegistryError;
pub use registry_event::{RegistryEvent, TraceCallback};
pub use registry_kind::{AdHoc, RegistryKind, StringsOnly};
pub use value::Value;
