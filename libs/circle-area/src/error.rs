//! # Area Errors
//!
//! Error types for provider lookup and constant resolution. Computing an
//! area never fails; only the surrounding registry and model can.

use config::ConfigError;
use thiserror::Error;

/// Errors raised by the provider registry and the resolution model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    /// No provider is registered under the given name.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// A name could not be found along the lookup path of a scope.
    #[error("Unresolved constant `{name}` in scope `{scope}`")]
    UnresolvedConstant {
        /// Owner of the scope that performed the lookup.
        scope: String,
        /// The constant name that was looked up.
        name: String,
    },

    /// A qualified lookup named an owner that is not reachable.
    #[error("Unknown constant source `{owner}` for `{name}`")]
    UnknownSource {
        /// The qualifying owner name.
        owner: String,
        /// The constant name that was looked up.
        name: String,
    },

    /// Invalid configuration values.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AreaError::UnresolvedConstant {
            scope: "QualifiedInterfaceConstantArea".to_string(),
            name: "PI".to_string(),
        };
        assert!(err.to_string().contains("Unresolved constant `PI`"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: AreaError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, AreaError::Config(_)));
        assert!(err.to_string().contains("tolerance"));
    }
}
