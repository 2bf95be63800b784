//! Etsy API environment definitions.
//!
//! This module provides the [`Environment`] enum, which selects between the
//! production API and the sandbox.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The Etsy API environment requests are sent to.
///
/// # Example
///
/// ```rust
/// use etsy_api::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env, Environment::Sandbox);
/// assert_eq!(env.base_path(), "/v2/sandbox");
/// assert_eq!(Environment::default().to_string(), "production");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The live API at `/v2`.
    #[default]
    Production,
    /// The sandbox API at `/v2/sandbox`.
    Sandbox,
}

impl Environment {
    /// Returns the base path that API paths are appended to.
    #[must_use]
    pub const fn base_path(&self) -> &'static str {
        match self {
            Self::Production => "/v2",
            Self::Sandbox => "/v2/sandbox",
        }
    }

    /// Returns the environment name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::InvalidEnvironment {
                name: s.to_string(),
            }),
        }
    }
}

impl Serialize for Environment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!(
            " Sandbox ".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(ConfigError::InvalidEnvironment { name }) if name == "staging"
        ));
    }

    #[test]
    fn test_environment_base_paths() {
        assert_eq!(Environment::Production.base_path(), "/v2");
        assert_eq!(Environment::Sandbox.base_path(), "/v2/sandbox");
    }

    #[test]
    fn test_environment_serde() {
        let json = serde_json::to_string(&Environment::Sandbox).unwrap();
        assert_eq!(json, r#""sandbox""#);

        let env: Environment = serde_json::from_str(r#""production""#).unwrap();
        assert_eq!(env, Environment::Production);

        assert!(serde_json::from_str::<Environment>(r#""beta""#).is_err());
    }
}
