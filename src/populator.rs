//! The populator contract.
//!
//! A populator is handed the registry during a population pass and pushes
//! values through the ordinary insertion API. While the pass is running those
//! insertions land in the registry's dynamic set.

use crate::{RegistryError, RegistryKind, ValueRegistry};

/// Produces values for a registry on demand.
///
/// Errors propagate out of [`ValueRegistry::populate`] unchanged and stop the
/// pass; populators registered after the failing one do not run.
pub trait Populator<K: RegistryKind>: Send + Sync {
    fn populate(&self, registry: &mut ValueRegistry<K>) -> Result<(), RegistryError>;
}

impl<K, F> Populator<K> for F
where
    K: RegistryKind,
    F: Fn(&mut ValueRegistry<K>) -> Result<(), RegistryError> + Send + Sync,
{
    fn populate(&self, registry: &mut ValueRegistry<K>) -> Result<(), RegistryError> {
        self(registry)
    }
}
