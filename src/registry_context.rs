//! A registry of registries: at most one instance per registry kind.
//!
//! Instances are keyed by the kind's `TypeId`, never by display name, so two
//! kinds that share a name stay separate. A [`RegistryContext`] is normally
//! owned by the application's composition root; [`RegistryContext::global`]
//! exists for code that cannot thread a context through.
//!
//! # Examples
//!
//! ```
//! use lazy_value_registry::{define_registry, lock_registry, RegistryContext};
//!
//! define_registry!(pub Biomes<String> = "biomes");
//!
//! let context = RegistryContext::new();
//! let biomes = context.get::<Biomes, _>(["plains"]).unwrap();
//! let again = context.get::<Biomes, _>(["desert"]).unwrap();
//!
//! assert!(std::sync::Arc::ptr_eq(&biomes, &again));
//! assert!(lock_registry(&biomes).has("plains").unwrap());
//! assert!(!lock_registry(&biomes).has("desert").unwrap());
//! ```

use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, LazyLock, Mutex, MutexGuard},
};

use tracing::{debug, trace};

use crate::{RegistryError, RegistryKind, ValueRegistry};

/// A registry instance shared through a context.
///
/// The mutex provides the per-instance exclusion a multi-threaded host needs:
/// hold the guard across a whole `has`/`populate` call.
pub type SharedRegistry<K> = Arc<Mutex<ValueRegistry<K>>>;

/// Process-wide context behind [`RegistryContext::global`].
static GLOBAL_CONTEXT: LazyLock<RegistryContext> = LazyLock::new(RegistryContext::new);

pub struct RegistryContext {
    storage: Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl RegistryContext {
    pub fn new() -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide context. It is never torn down.
    pub fn global() -> &'static RegistryContext {
        &GLOBAL_CONTEXT
    }

    /// Returns the instance for kind `K`, creating it on first access.
    ///
    /// `initial_values` seed the manual values of a newly created instance and
    /// are ignored once an instance exists.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidValue`] if a seed value fails validation; no
    ///   instance is recorded in that case
    /// - [`RegistryError::TypeMismatch`] if the slot for `K` holds something else
    pub fn get<K, I>(&self, initial_values: I) -> Result<SharedRegistry<K>, RegistryError>
    where
        K: RegistryKind + Default,
        I: IntoIterator,
        I::Item: Into<K::Value>,
    {
        let mut storage = self.storage.lock().unwrap_or_else(|p| p.into_inner());

        if let Some(existing) = storage.get(&TypeId::of::<K>()).cloned() {
            trace!(kind = type_name::<K>(), "reusing registry instance");
            return existing
                .downcast::<Mutex<ValueRegistry<K>>>()
                .map_err(|_| RegistryError::TypeMismatch {
                    type_name: type_name::<K>(),
                });
        }

        let registry = ValueRegistry::with_values(K::default(), initial_values)?;
        debug!(
            registry = %registry.name(),
            kind = type_name::<K>(),
            "created registry instance"
        );

        let shared = Arc::new(Mutex::new(registry));
        storage.insert(TypeId::of::<K>(), shared.clone());
        Ok(shared)
    }

    /// Returns the instance for kind `K`, creating it without seed values.
    pub fn get_default<K>(&self) -> Result<SharedRegistry<K>, RegistryError>
    where
        K: RegistryKind + Default,
    {
        self.get::<K, _>(Vec::<K::Value>::new())
    }

    /// Whether an instance for kind `K` exists.
    pub fn contains<K: RegistryKind>(&self) -> bool {
        self.storage
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .contains_key(&TypeId::of::<K>())
    }

    /// Forgets the instance for kind `K`. Handles already given out stay valid.
    pub fn remove<K: RegistryKind>(&self) -> Option<SharedRegistry<K>> {
        let removed = self
            .storage
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .remove(&TypeId::of::<K>())?;

        debug!(kind = type_name::<K>(), "removed registry instance");
        removed.downcast::<Mutex<ValueRegistry<K>>>().ok()
    }

    /// Forgets every instance.
    ///
    /// Primarily meant for tests sharing [`RegistryContext::global`].
    pub fn clear(&self) {
        self.storage
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }

    pub fn len(&self) -> usize {
        self.storage
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegistryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegistryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryContext")
            .field("registries", &self.len())
            .finish()
    }
}

/// Locks a shared registry.
///
/// A populator that panicked leaves the registry consistent (the pass is
/// released on unwind), so lock poisoning is recovered rather than reported.
pub fn lock_registry<K: RegistryKind>(
    registry: &SharedRegistry<K>,
) -> MutexGuard<'_, ValueRegistry<K>> {
    registry.lock().unwrap_or_else(|p| p.into_inner())
}

/// Returns the instance for kind `K` from the global context.
///
/// See [`RegistryContext::get`].
pub fn get<K, I>(initial_values: I) -> Result<SharedRegistry<K>, RegistryError>
where
    K: RegistryKind + Default,
    I: IntoIterator,
    I::Item: Into<K::Value>,
{
    RegistryContext::global().get::<K, I>(initial_values)
}

/// Returns the instance for kind `K` from the global context, without seed values.
pub fn get_default<K>() -> Result<SharedRegistry<K>, RegistryError>
where
    K: RegistryKind + Default,
{
    RegistryContext::global().get_default::<K>()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
