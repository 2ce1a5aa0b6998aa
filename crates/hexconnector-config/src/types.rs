//! Configuration types

use hexconnector_core::{NameRules, DEFAULT_MAX_ARG_LEN, DEFAULT_PORT, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConnectorConfig {
    /// Qualified name handling
    #[serde(default)]
    pub naming: NamingConfig,

    /// Call logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Qualified name handling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamingConfig {
    /// Separator between port and member
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Port used for names without a separator
    #[serde(default = "default_port")]
    pub default_port: String,

    /// Reject names with more than one separator instead of splitting on the first
    #[serde(default)]
    pub strict: bool,
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            default_port: default_port(),
            strict: false,
        }
    }
}

impl NamingConfig {
    /// Name rules used by the registry
    pub fn rules(&self) -> NameRules {
        NameRules {
            separator: self.separator,
            default_port: self.default_port.clone(),
            strict: self.strict,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_level")]
    pub level: String,

    /// Log format (json, text)
    #[serde(default)]
    pub format: LogFormat,

    /// Maximum rendered length of a string argument in call logs
    #[serde(default = "default_max_arg_len")]
    pub max_arg_len: usize,

    /// Spaces of indentation per nested call
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_max_arg_len() -> usize {
    DEFAULT_MAX_ARG_LEN
}

fn default_indent_width() -> usize {
    4
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            max_arg_len: default_max_arg_len(),
            indent_width: default_indent_width(),
        }
    }
}
