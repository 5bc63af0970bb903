use std::sync::Arc;

/// Events emitted by a value registry during operations.
///
/// These events are passed to the tracing callback set via
/// [`ValueRegistry::set_trace_callback`](crate::ValueRegistry::set_trace_callback).
/// Values are carried in their `Debug` rendering so the event type does not
/// depend on the registry's value type.
///
/// # Examples
///
/// ```rust
/// use lazy_value_registry::RegistryEvent;
///
/// let event = RegistryEvent::Depopulate { registry: "blocks".into() };
/// assert_eq!(event.to_string(), "depopulate { registry: blocks }");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// A value was accepted.
    Insert {
        registry: String,
        value: String,
        /// Whether the value landed in the dynamic set (inserted during a population pass).
        dynamic: bool,
    },

    /// A value failed validation, whether or not the failure was silent.
    Reject { registry: String, value: String },

    /// A population pass completed.
    Populate {
        registry: String,
        /// Number of populators that ran.
        populators: usize,
    },

    /// Dynamic values were discarded.
    Depopulate { registry: String },

    /// Manual and dynamic values were discarded and defaults reinstated.
    Reset { registry: String },

    /// Every value was discarded, defaults included.
    Clear { registry: String },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Insert {
                registry,
                value,
                dynamic,
            } => write!(
                f,
                "insert {{ registry: {registry}, value: {value}, dynamic: {dynamic} }}"
            ),
            RegistryEvent::Reject { registry, value } => {
                write!(f, "reject {{ registry: {registry}, value: {value} }}")
            }
            RegistryEvent::Populate {
                registry,
                populators,
            } => write!(
                f,
                "populate {{ registry: {registry}, populators: {populators} }}"
            ),
            RegistryEvent::Depopulate { registry } => {
                write!(f, "depopulate {{ registry: {registry} }}")
            }
            RegistryEvent::Reset { registry } => write!(f, "reset {{ registry: {registry} }}"),
            RegistryEvent::Clear { registry } => write!(f, "clear {{ registry: {registry} }}"),
        }
    }
}

/// Type alias for the user-supplied tracing callback.
///
/// Registries may be shared across threads through a
/// [`RegistryContext`](crate::RegistryContext), so the callback must be thread-safe.
pub type TraceCallback = Arc<dyn Fn(&RegistryEvent) + Send + Sync + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_event_display() {
        let event = RegistryEvent::Insert {
            registry: "blocks".into(),
            value: "\"stone\"".into(),
            dynamic: true,
        };
        assert_eq!(
            event.to_string(),
            "insert { registry: blocks, value: \"stone\", dynamic: true }"
        );

        let event = RegistryEvent::Reject {
            registry: "numbers".into(),
            value: "2".into(),
        };
        assert_eq!(event.to_string(), "reject { registry: numbers, value: 2 }");

        let event = RegistryEvent::Populate {
            registry: "blocks".into(),
            populators: 3,
        };
        assert_eq!(
            event.to_string(),
            "populate { registry: blocks, populators: 3 }"
        );
    }

    #[test]
    fn test_lifecycle_event_display() {
        let name = || "items".to_string();
        assert_eq!(
            RegistryEvent::Reset { registry: name() }.to_string(),
            "reset { registry: items }"
        );
        assert_eq!(
            RegistryEvent::Clear { registry: name() }.to_string(),
            "clear { registry: items }"
        );
    }

    #[test]
    fn test_registry_event_clone() {
        let event = RegistryEvent::Depopulate {
            registry: "blocks".into(),
        };
        assert_eq!(event.clone(), event);
    }
}
