//! Process-wide configuration read from the environment.
//!
//! `main` loads a `.env` file first, so either source works.

use std::env;

use thiserror::Error;
use uuid::Uuid;

/// Overrides the namespace v3 and v5 use when `--namespace` is absent.
pub const DEFAULT_NAMESPACE_ENV: &str = "UUIDGEN_DEFAULT_NAMESPACE";

/// Tracing filter directive for stderr logging.
pub const LOG_ENV: &str = "UUIDGEN_LOG";

/// Configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The default namespace is neither a well-known name nor a UUID.
    #[error(
        "{var}={value:?} is not a namespace: expected dns, url, oid, x500 or a UUID ({source})"
    )]
    InvalidNamespace {
        /// Variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
        /// Parser failure.
        #[source]
        source: uuid::Error,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Namespace for name-based generation when none is given on the command line.
    pub default_namespace: Uuid,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_namespace: Uuid::NAMESPACE_DNS }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable holds an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEFAULT_NAMESPACE_ENV).filter(|v| !v.trim().is_empty()) {
            config.default_namespace = parse_namespace_setting(value.trim()).map_err(|source| {
                ConfigError::InvalidNamespace { var: DEFAULT_NAMESPACE_ENV, value, source }
            })?;
        }

        Ok(config)
    }
}

fn parse_namespace_setting(value: &str) -> Result<Uuid, uuid::Error> {
    match value.to_ascii_lowercase().as_str() {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => Uuid::parse_str(value),
    }
}
