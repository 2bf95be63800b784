//! Configuration types for the Etsy API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`EtsyConfig`]: The configuration struct holding all client settings
//! - [`EtsyConfigBuilder`]: A builder for constructing [`EtsyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`HostUrl`]: A validated API host override
//! - [`Environment`]: Production or sandbox
//!
//! # Example
//!
//! ```rust
//! use etsy_api::{EtsyConfig, ApiKey, Environment};
//!
//! let config = EtsyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .environment(Environment::Sandbox)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.environment(), Environment::Sandbox);
//! ```

mod environment;
mod newtypes;

pub use environment::Environment;
pub use newtypes::{ApiKey, HostUrl};

use crate::error::ConfigError;

/// Configuration for the Etsy API client.
///
/// `EtsyConfig` is `Clone`, `Send`, and `Sync`, so one configuration can back
/// any number of clients.
#[derive(Clone, Debug)]
pub struct EtsyConfig {
    api_key: ApiKey,
    environment: Environment,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl EtsyConfig {
    /// Creates a new builder for constructing an `EtsyConfig`.
    #[must_use]
    pub fn builder() -> EtsyConfigBuilder {
        EtsyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify EtsyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EtsyConfig>();
};

/// Builder for constructing [`EtsyConfig`] instances.
///
/// `api_key` is required.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `host`: `None` (uses `https://openapi.etsy.com`)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct EtsyConfigBuilder {
    api_key: Option<ApiKey>,
    environment: Option<Environment>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl EtsyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`EtsyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<EtsyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(EtsyConfig {
            api_key,
            environment: self.environment.unwrap_or_default(),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
