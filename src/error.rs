//! Error types for statetrail operations.
//!
//! This module defines [`StateError`], the error type returned by every
//! public engine operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Programming errors (unknown properties, empty registrations) are
//!   returned to the caller, never swallowed
//! - Cipher failures keep their own variants so tampered session data can
//!   be told apart from malformed payload JSON
//! - Use `anyhow::Error` (via `StateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for statetrail operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// An operation was called with unusable arguments.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A referenced property does not exist on the component.
    #[error("Property '{property}' not found on component {component}")]
    PropertyNotFound { property: String, component: String },

    /// The component refused a value written back from history.
    #[error("Component {component} rejected value for property '{property}'")]
    PropertyRejected { property: String, component: String },

    /// A stored token could not be decrypted (invalid or tampered).
    #[error("Failed to decrypt payload: {message}")]
    Decryption { message: String },

    /// The cipher failed to produce a token.
    #[error("Failed to encrypt payload: {message}")]
    Encryption { message: String },

    /// Decrypted payload is not a valid property map.
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Cipher key material is unusable.
    #[error("Invalid cipher key: {message}")]
    InvalidKey { message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StateError {
    pub(crate) fn property_not_found(property: &str, component: &str) -> Self {
        Self::PropertyNotFound {
            property: property.to_string(),
            component: component.to_string(),
        }
    }
}

/// Result type alias for statetrail operations.
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_displays_message() {
        let err = StateError::InvalidArgument {
            message: "no properties to track".into(),
        };
        assert!(err.to_string().contains("no properties to track"));
    }

    #[test]
    fn property_not_found_displays_property_and_component() {
        let err = StateError::property_not_found("ghost", "Counter");
        let msg = err.to_string();
        assert!(msg.contains("ghost"));
        assert!(msg.contains("Counter"));
    }

    #[test]
    fn property_rejected_displays_property() {
        let err = StateError::PropertyRejected {
            property: "count".into(),
            component: "Counter".into(),
        };
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn decryption_displays_message() {
        let err = StateError::Decryption {
            message: "authentication failed".into(),
        };
        assert!(err.to_string().contains("authentication failed"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = StateError::ConfigParseError {
            path: PathBuf::from("/tracker.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tracker.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn json_error_converts_to_payload() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StateError = json_err.into();
        assert!(matches!(err, StateError::Payload(_)));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StateError = io_err.into();
        assert!(matches!(err, StateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(StateError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
