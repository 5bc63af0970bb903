#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// An insertion failed validation: the value is already present, or the
    /// registry kind does not accept it.
    #[error("invalid value {value} for registry '{registry}'")]
    InvalidValue { registry: String, value: String },

    /// A populator could not produce its values.
    #[error("populator failed for registry '{registry}': {reason}")]
    PopulatorFailed { registry: String, reason: String },

    #[error("type mismatch in registry context: {type_name}")]
    TypeMismatch { type_name: &'static str },
}

impl RegistryError {
    pub fn invalid_value(registry: impl Into<String>, value: &impl std::fmt::Debug) -> Self {
        RegistryError::InvalidValue {
            registry: registry.into(),
            value: format!("{value:?}"),
        }
    }

    pub fn populator_failed(registry: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        RegistryError::PopulatorFailed {
            registry: registry.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, RegistryError::InvalidValue { .. })
    }
}
