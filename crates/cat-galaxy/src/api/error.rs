//! Crate-level error types.

use std::fmt;

/// Errors produced while building the galaxy from its static data or
/// from JSON overrides.
#[derive(Debug)]
pub enum GalaxyError {
    /// A body descriptor failed validation.
    InvalidBody { name: String, reason: &'static str },
    /// A configuration value is out of its valid range.
    InvalidConfig(&'static str),
    /// JSON for a config or manifest could not be parsed.
    Json {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBody { name, reason } => {
                write!(f, "invalid body {name:?}: {reason}")
            }
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::Json { what, source } => write!(f, "{what} parse error: {source}"),
        }
    }
}

impl std::error::Error for GalaxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
