//! Qualified names
//!
//! Entries are addressed by a single string of the form `port.member`. A bare
//! `member` belongs to the default port.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default separator between port and member
pub const DEFAULT_SEPARATOR: char = '.';

/// Default port for bare member names
pub const DEFAULT_PORT: &str = "_";

/// Rules used to split a qualified name into port and member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    /// Separator between port and member
    pub separator: char,

    /// Port used when the name has no separator
    pub default_port: String,

    /// Reject names with more than one separator or an empty part
    pub strict: bool,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            default_port: DEFAULT_PORT.to_string(),
            strict: false,
        }
    }
}

impl NameRules {
    /// Split `what` into a [`QualifiedName`]
    ///
    /// Only the first separator splits; with `strict` set, any further
    /// separator or an empty part is an error. Otherwise an empty name is the
    /// empty member of the default port.
    pub fn parse(&self, what: &str) -> Result<QualifiedName> {
        let Some((port, member)) = what.split_once(self.separator) else {
            if self.strict && what.is_empty() {
                return Err(Error::invalid_name("name is empty"));
            }
            return Ok(QualifiedName::new(self.default_port.clone(), what));
        };

        if self.strict {
            if member.contains(self.separator) {
                return Err(Error::invalid_name(format!(
                    "'{what}' contains more than one '{}'",
                    self.separator
                )));
            }
            if port.is_empty() || member.is_empty() {
                return Err(Error::invalid_name(format!(
                    "'{what}' has an empty port or member"
                )));
            }
        }

        Ok(QualifiedName::new(port, member))
    }

    /// Join a port and member the way [`NameRules::parse`] splits them
    pub fn join(&self, port: &str, member: &str) -> String {
        format!("{port}{}{member}", self.separator)
    }
}

/// Composite key of a registry entry
///
/// Displays with the default separator whatever the configured one is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Port name
    pub port: String,

    /// Member name within the port
    pub member: String,
}

impl QualifiedName {
    /// Create a new qualified name
    pub fn new(port: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            member: member.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.port, DEFAULT_SEPARATOR, self.member)
    }
}

impl From<(&str, &str)> for QualifiedName {
    fn from((port, member): (&str, &str)) -> Self {
        Self::new(port, member)
    }
}
