//! A named set of unique values that populates itself on first query.
//!
//! Values live in three disjoint sets: the kind's defaults, values inserted
//! manually, and values inserted by populators during a population pass. The
//! effective set is their union, in that order.
//!
//! # Examples
//!
//! ```
//! use lazy_value_registry::ValueSet;
//!
//! let mut blocks: ValueSet<String> = ValueSet::named("blocks");
//! blocks.register(|r: &mut ValueSet<String>| r.add_values(["stone", "dirt"]));
//!
//! assert!(!blocks.is_populated());
//! assert!(blocks.has("stone").unwrap());
//! assert!(blocks.is_populated());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use indexmap::{Equivalent, IndexSet};
use tracing::{debug, trace, warn};

use crate::{AdHoc, Populator, RegistryError, RegistryEvent, RegistryKind, TraceCallback};

/// A named set of unique values whose populators run lazily, once, on first query.
///
/// The kind `K` supplies the name, defaults, validation and silent-fail policy.
pub struct ValueRegistry<K: RegistryKind> {
    kind: K,
    defaults: IndexSet<K::Value>,
    manual: IndexSet<K::Value>,
    dynamic: IndexSet<K::Value>,
    friendly_names: HashMap<K::Value, String>,
    populators: Vec<Arc<dyn Populator<K>>>,
    populated: bool,
    pass_completed: bool,
    populating: bool,
    trace: Option<TraceCallback>,
}

/// A registry without a declared kind, for ad hoc sets.
pub type ValueSet<V> = ValueRegistry<AdHoc<V>>;

impl<K: RegistryKind> ValueRegistry<K> {
    /// Creates an unpopulated registry holding only the kind's default values.
    pub fn new(kind: K) -> Self {
        let defaults = kind.default_values().into_iter().collect();
        Self {
            kind,
            defaults,
            manual: IndexSet::new(),
            dynamic: IndexSet::new(),
            friendly_names: HashMap::new(),
            populators: Vec::new(),
            populated: false,
            pass_completed: false,
            populating: false,
            trace: None,
        }
    }

    /// Creates a registry and inserts `values` as manual values.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::InvalidValue`] on the first value that does
    /// not validate, unless the kind fails silently.
    pub fn with_values<I>(
        kind: K,
        values: impl IntoIterator<Item = I>,
    ) -> Result<Self, RegistryError>
    where
        I: Into<K::Value>,
    {
        let mut registry = Self::new(kind);
        registry.add_values(values)?;
        Ok(registry)
    }

    pub fn name(&self) -> &str {
        self.kind.name()
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    // -------------------------------------------------------------------------------------------------
    // Value store
    // -------------------------------------------------------------------------------------------------

    /// Whether `value` may be inserted: the kind accepts it and it is not
    /// already in the effective set.
    pub fn valid_value(&self, value: &K::Value) -> bool {
        self.kind.valid_value(value) && !self.contains(value)
    }

    /// Membership in the effective set, without triggering population.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K::Value>,
    {
        self.defaults.contains(value) || self.manual.contains(value) || self.dynamic.contains(value)
    }

    /// Inserts a value into the dynamic set during a population pass and into
    /// the manual set otherwise.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidValue`] if the value fails validation and the
    /// kind does not fail silently. A silent failure leaves the registry unchanged.
    pub fn add_value(&mut self, value: impl Into<K::Value>) -> Result<(), RegistryError> {
        let value = value.into();

        if !self.valid_value(&value) {
            self.emit_event(|| RegistryEvent::Reject {
                registry: self.name().to_string(),
                value: format!("{value:?}"),
            });

            if self.kind.fail_silently() {
                trace!(registry = %self.name(), ?value, "ignoring invalid value");
                return Ok(());
            }

            debug!(registry = %self.name(), ?value, "rejected invalid value");
            return Err(RegistryError::invalid_value(self.name(), &value));
        }

        let dynamic = self.populating;
        trace!(registry = %self.name(), ?value, dynamic, "inserting value");

        let rendered = self.trace.is_some().then(|| format!("{value:?}"));
        self.target_mut().insert(value);

        if let Some(value) = rendered {
            self.emit_event(|| RegistryEvent::Insert {
                registry: self.name().to_string(),
                value,
                dynamic,
            });
        }
        Ok(())
    }

    /// Inserts values in order, stopping at the first failure.
    ///
    /// Values inserted before the failure stay in place.
    pub fn add_values<I>(
        &mut self,
        values: impl IntoIterator<Item = I>,
    ) -> Result<(), RegistryError>
    where
        I: Into<K::Value>,
    {
        for value in values {
            self.add_value(value)?;
        }
        Ok(())
    }

    /// Replaces the set that insertions currently target, then inserts `values`.
    ///
    /// Outside a population pass this replaces the manual values; during one it
    /// replaces the dynamic values. Defaults and the other set are untouched.
    pub fn set_values<I>(
        &mut self,
        values: impl IntoIterator<Item = I>,
    ) -> Result<(), RegistryError>
    where
        I: Into<K::Value>,
    {
        let removed = std::mem::take(self.target_mut());
        self.friendly_names.retain(|value, _| !removed.contains(value));
        self.add_values(values)
    }

    /// The effective set: defaults, then manual values, then dynamic values.
    ///
    /// Does not trigger population.
    pub fn values(&self) -> Vec<K::Value> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K::Value> {
        self.defaults
            .iter()
            .chain(self.manual.iter())
            .chain(self.dynamic.iter())
    }

    pub fn len(&self) -> usize {
        self.defaults.len() + self.manual.len() + self.dynamic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values that populators added during the last pass.
    pub fn dynamic_values(&self) -> Vec<K::Value> {
        self.dynamic.iter().cloned().collect()
    }

    fn target_mut(&mut self) -> &mut IndexSet<K::Value> {
        if self.populating {
            &mut self.dynamic
        } else {
            &mut self.manual
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Friendly names
    // -------------------------------------------------------------------------------------------------

    /// Inserts `value` and attaches a display name to it.
    ///
    /// A value the registry silently ignores keeps its previous name, if any.
    pub fn add_named_value(
        &mut self,
        value: impl Into<K::Value>,
        friendly_name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let value = value.into();
        let before = self.len();
        self.add_value(value.clone())?;
        if self.len() > before {
            self.friendly_names.insert(value, friendly_name.into());
        }
        Ok(())
    }

    /// Attaches a display name to a value already in the effective set.
    pub fn set_friendly_name(
        &mut self,
        value: &K::Value,
        friendly_name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if !self.contains(value) {
            return Err(RegistryError::invalid_value(self.name(), value));
        }
        self.friendly_names.insert(value.clone(), friendly_name.into());
        Ok(())
    }

    pub fn friendly_name(&self, value: &K::Value) -> Option<&str> {
        self.friendly_names.get(value).map(String::as_str)
    }

    // -------------------------------------------------------------------------------------------------
    // Population lifecycle
    // -------------------------------------------------------------------------------------------------

    /// Registers a populator. Populators run in registration order.
    ///
    /// Registering on a registry populated by a completed pass depopulates it,
    /// so the next query runs every populator again, the new one included. A
    /// registry marked populated through [`set_populated`](Self::set_populated)
    /// stays suppressed. Populators registered during a pass run in that same pass.
    pub fn register(&mut self, populator: impl Populator<K> + 'static) {
        self.register_arc(Arc::new(populator));
    }

    /// Registers a populator that is already shared, e.g. between several registries.
    pub fn register_arc(&mut self, populator: Arc<dyn Populator<K>>) {
        self.populators.push(populator);
        if self.populated && self.pass_completed {
            self.depopulate();
        }
    }

    pub fn populators(&self) -> &[Arc<dyn Populator<K>>] {
        &self.populators
    }

    /// Removes every populator. Values they already added are kept.
    pub fn clear_populators(&mut self) {
        self.populators.clear();
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn is_populating(&self) -> bool {
        self.populating
    }

    /// Overrides the populated flag.
    ///
    /// Marking the registry populated suppresses its populators; marking it
    /// unpopulated makes the next query run them again without discarding the
    /// dynamic values already present. Either way, registering a populator
    /// afterwards does not undo the override.
    pub fn set_populated(&mut self, populated: bool) {
        self.populated = populated;
        self.pass_completed = false;
    }

    /// Runs every registered populator once.
    ///
    /// No-op when already populated or when called from inside a pass.
    ///
    /// # Errors
    ///
    /// The first populator error is returned and the remaining populators are
    /// skipped. The registry stays unpopulated and leaves the pass, so a later
    /// call retries.
    pub fn populate(&mut self) -> Result<(), RegistryError> {
        if self.populated || self.populating {
            return Ok(());
        }

        debug!(registry = %self.name(), populators = self.populators.len(), "populating registry");

        let ran = {
            let mut pass = PopulationPass::begin(self);
            let mut next = 0;
            // Populators may register more populators; those run in this pass too
            while let Some(populator) = pass.populators.get(next).cloned() {
                if let Err(err) = populator.populate(&mut pass) {
                    warn!(registry = %pass.name(), error = %err, "populator failed");
                    return Err(err);
                }
                next += 1;
            }
            next
        };

        self.populated = true;
        self.pass_completed = true;
        self.emit_event(|| RegistryEvent::Populate {
            registry: self.name().to_string(),
            populators: ran,
        });
        Ok(())
    }

    /// Membership in the effective set, populating first if needed.
    pub fn has<Q>(&mut self, value: &Q) -> Result<bool, RegistryError>
    where
        Q: ?Sized + Hash + Equivalent<K::Value>,
    {
        self.populate()?;
        Ok(self.contains(value))
    }

    /// Discards dynamic values and returns to the unpopulated state.
    pub fn depopulate(&mut self) {
        let dynamic = std::mem::take(&mut self.dynamic);
        self.friendly_names.retain(|value, _| !dynamic.contains(value));
        self.populated = false;
        self.pass_completed = false;

        debug!(registry = %self.name(), discarded = dynamic.len(), "depopulated registry");
        self.emit_event(|| RegistryEvent::Depopulate {
            registry: self.name().to_string(),
        });
    }

    /// Discards manual and dynamic values and reinstates the kind's defaults.
    pub fn reset(&mut self) {
        self.discard_all();
        self.defaults = self.kind.default_values().into_iter().collect();

        debug!(registry = %self.name(), "reset registry");
        self.emit_event(|| RegistryEvent::Reset {
            registry: self.name().to_string(),
        });
    }

    /// Discards every value, defaults included. [`reset`](Self::reset) brings the defaults back.
    pub fn clear(&mut self) {
        self.discard_all();
        self.defaults.clear();

        debug!(registry = %self.name(), "cleared registry");
        self.emit_event(|| RegistryEvent::Clear {
            registry: self.name().to_string(),
        });
    }

    fn discard_all(&mut self) {
        self.manual.clear();
        self.dynamic.clear();
        self.friendly_names.clear();
        self.populated = false;
        self.pass_completed = false;
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Sets a callback invoked after every insertion, rejection and lifecycle change.
    ///
    /// The callback only sees the event; it cannot reach back into the registry.
    pub fn set_trace_callback(
        &mut self,
        callback: impl Fn(&RegistryEvent) + Send + Sync + 'static,
    ) {
        self.trace = Some(Arc::new(callback));
    }

    pub fn clear_trace_callback(&mut self) {
        self.trace = None;
    }

    fn emit_event(&self, event: impl FnOnce() -> RegistryEvent) {
        if let Some(callback) = self.trace.as_ref() {
            callback(&event());
        }
    }
}

impl<K: RegistryKind + Default> Default for ValueRegistry<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<V> ValueRegistry<AdHoc<V>>
where
    AdHoc<V>: RegistryKind<Value = V>,
{
    /// A strict, empty ad hoc set.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(AdHoc::named(name))
    }
}

impl<K: RegistryKind> fmt::Debug for ValueRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRegistry")
            .field("name", &self.name())
            .field("defaults", &self.defaults)
            .field("manual", &self.manual)
            .field("dynamic", &self.dynamic)
            .field("populators", &self.populators.len())
            .field("populated", &self.populated)
            .field("populating", &self.populating)
            .finish()
    }
}

/// Holds a registry in the populating state; leaving the scope, by error or
/// panic included, ends the pass.
struct PopulationPass<'a, K: RegistryKind> {
    registry: &'a mut ValueRegistry<K>,
}

impl<'a, K: RegistryKind> PopulationPass<'a, K> {
    fn begin(registry: &'a mut ValueRegistry<K>) -> Self {
        registry.populating = true;
        Self { registry }
    }
}

impl<K: RegistryKind> Deref for PopulationPass<'_, K> {
    type Target = ValueRegistry<K>;

    fn deref(&self) -> &Self::Target {
        self.registry
    }
}

impl<K: RegistryKind> DerefMut for PopulationPass<'_, K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.registry
    }
}

impl<K: RegistryKind> Drop for PopulationPass<'_, K> {
    fn drop(&mut self) {
        self.registry.populating = false;
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
