//! Error types for the Etsy API client.
//!
//! This module contains error types used for configuration and for the
//! attribute declarations made by resource types.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Attribute declarations use the same error type, so a
//! wiring mistake surfaces before any request is made.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration or resource definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Etsy API key.")]
    EmptyApiKey,

    /// Environment name is not recognized.
    #[error("Invalid environment '{name}'. Expected 'production' or 'sandbox'.")]
    InvalidEnvironment {
        /// The unrecognized environment name.
        name: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://openapi.etsy.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// An attribute was declared without a local name.
    #[error("Attribute name cannot be empty.")]
    EmptyAttributeName,

    /// An attribute was declared with an empty source field.
    #[error("Source field for attribute '{attribute}' cannot be empty.")]
    EmptySourceField {
        /// The local attribute name being declared.
        attribute: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("valid Etsy API key"));
    }

    #[test]
    fn test_invalid_environment_error_message() {
        let error = ConfigError::InvalidEnvironment {
            name: "staging".to_string(),
        };
        assert!(error.to_string().contains("staging"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_empty_source_field_names_the_attribute() {
        let error = ConfigError::EmptySourceField {
            attribute: "image_url".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Source field for attribute 'image_url' cannot be empty."
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAttributeName;
        let _: &dyn std::error::Error = &error;
    }
}
