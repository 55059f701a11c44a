//! Typed error variants for the console-nav-config crate.
//!
//! Provides structured error types for config I/O and validation
//! operations. These are used internally and exposed for library
//! consumers who want to match on specific failure modes instead of
//! opaque `anyhow` strings.

use std::fmt;

/// Errors that can occur when loading or saving the navigation config.
///
/// These errors are produced by `NavConfig::load`, `NavConfig::load_from`
/// and `NavConfig::save`.
///
/// For backward compatibility with callers that use `anyhow`, the load and
/// save functions return `anyhow::Result`; `ConfigError` values are
/// automatically coerced via the `From` impl that `anyhow` provides for any
/// `std::error::Error`.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    Io(std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    Parse(serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error reading nav config: {e}"),
            ConfigError::Parse(e) => write!(f, "YAML parse error in nav config: {e}"),
            ConfigError::Validation(msg) => write!(f, "Nav config validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Parse(e)
    }
}
