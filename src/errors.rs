//! Shared error types for weavekit

use thiserror::Error;

/// Main error type for building and resolving insertions
#[derive(Debug, Error)]
pub enum WeaveError {
    /// Override resolution found no method with the requested name
    #[error("Class {module} doesn't contain any method named {method}")]
    TargetMethodNotFound { module: String, method: String },

    /// A required builder field was never set.
    ///
    /// Deliberately coarse: it does not say which field is missing.
    #[error("Builder was not used as intended. A field is missing.")]
    IncompleteSpecification,

    /// The module provider has no module under that name
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// A superclass chain loops back on itself
    #[error("Inheritance cycle through class {0}")]
    InheritanceCycle(String),

    /// The signature writer could not render a method
    #[error("Signature error: {0}")]
    Signature(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WeaveError {
    /// Create a method-not-found error for a module
    pub fn method_not_found(module: impl Into<String>, method: impl Into<String>) -> Self {
        Self::TargetMethodNotFound {
            module: module.into(),
            method: method.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, WeaveError>;
