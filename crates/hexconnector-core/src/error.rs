//! Error types for the adapter registry

use std::fmt;

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for the adapter registry
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No entry is registered under the requested port and member
    #[error("No member '{member}' registered on port '{port}'")]
    MemberNotFound {
        /// Port name
        port: String,
        /// Member name
        member: String,
    },

    /// The entry exists but is not a function
    #[error("Member '{member}' on port '{port}' is not callable")]
    NotCallable {
        /// Port name
        port: String,
        /// Member name
        member: String,
    },

    /// The entry exists but holds a different kind of value
    #[error("Member '{name}' is not {expected}")]
    TypeMismatch {
        /// Qualified name of the entry
        name: String,
        /// What the caller asked for
        expected: String,
    },

    /// Qualified name could not be parsed
    #[error("Invalid qualified name: {0}")]
    InvalidName(String),

    /// Module path is not known to the catalog
    #[error("Unknown adapter module '{path}'. Available modules: {available:?}")]
    ModuleNotFound {
        /// Requested module path
        path: String,
        /// Paths the catalog can resolve
        available: Vec<String>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by adapter code
    #[error("Adapter error on port '{port}': {message}")]
    Adapter {
        /// Port name
        port: String,
        /// Error message
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error produced by adapter code
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create a member not found error
    pub fn not_found(port: impl Into<String>, member: impl Into<String>) -> Self {
        Error::MemberNotFound {
            port: port.into(),
            member: member.into(),
        }
    }

    /// Create a not callable error
    pub fn not_callable(port: impl Into<String>, member: impl Into<String>) -> Self {
        Error::NotCallable {
            port: port.into(),
            member: member.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(name: impl fmt::Display, expected: impl Into<String>) -> Self {
        Error::TypeMismatch {
            name: name.to_string(),
            expected: expected.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name(msg: impl fmt::Display) -> Self {
        Error::InvalidName(msg.to_string())
    }

    /// Create a configuration error
    pub fn config(msg: impl fmt::Display) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create an adapter error
    pub fn adapter(port: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Adapter {
            port: port.into(),
            message: message.into(),
        }
    }

    /// Whether this is a lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::MemberNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = Error::not_found("storage", "save");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "No member 'save' registered on port 'storage'"
        );
    }

    #[test]
    fn test_adapter_error() {
        let err = Error::adapter("mailer", "smtp unreachable");
        assert!(matches!(err, Error::Adapter { .. }));
        assert!(err.to_string().contains("mailer"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_anyhow_is_transparent() {
        let err: Error = anyhow::anyhow!("disk full").into();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_module_not_found_lists_available() {
        let err = Error::ModuleNotFound {
            path: "storage.sql".to_string(),
            available: vec!["storage.memory".to_string()],
        };
        assert!(err.to_string().contains("storage.memory"));
    }
}
