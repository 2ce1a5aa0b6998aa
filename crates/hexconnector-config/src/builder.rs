//! Configuration builder

use crate::types::{ConnectorConfig, LogFormat};
use hexconnector_core::Result;

/// Builder for constructing configuration programmatically
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: ConnectorConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator between port and member
    pub fn separator(mut self, separator: char) -> Self {
        self.config.naming.separator = separator;
        self
    }

    /// Set the port used for bare member names
    pub fn default_port(mut self, port: impl Into<String>) -> Self {
        self.config.naming.default_port = port.into();
        self
    }

    /// Reject names with more than one separator
    pub fn strict_names(mut self, strict: bool) -> Self {
        self.config.naming.strict = strict;
        self
    }

    /// Set the log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Set the log format
    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Set the maximum rendered length of string arguments
    pub fn max_arg_len(mut self, max_arg_len: usize) -> Self {
        self.config.logging.max_arg_len = max_arg_len;
        self
    }

    /// Set the indentation per nested call
    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.config.logging.indent_width = indent_width;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ConnectorConfig> {
        crate::validator::validate_config(&self.config)?;
        Ok(self.config)
    }
}
