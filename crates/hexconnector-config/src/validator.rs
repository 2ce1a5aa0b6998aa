//! Configuration validation

use crate::ConnectorConfig;
use hexconnector_core::{Error, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate configuration
pub fn validate_config(config: &ConnectorConfig) -> Result<()> {
    validate_naming(config)?;

    validate_logging(config)?;

    Ok(())
}

fn validate_naming(config: &ConnectorConfig) -> Result<()> {
    let naming = &config.naming;

    if naming.separator.is_alphanumeric()
        || naming.separator.is_whitespace()
        || naming.separator == '_'
    {
        return Err(Error::config(format!(
            "Invalid separator '{}': must be punctuation",
            naming.separator
        )));
    }

    if naming.default_port.is_empty() {
        return Err(Error::config("default_port cannot be empty"));
    }

    if naming.default_port.contains(naming.separator) {
        return Err(Error::config(format!(
            "default_port '{}' must not contain the separator '{}'",
            naming.default_port, naming.separator
        )));
    }

    Ok(())
}

fn validate_logging(config: &ConnectorConfig) -> Result<()> {
    let logging = &config.logging;

    if logging.max_arg_len == 0 {
        return Err(Error::config("max_arg_len must be > 0"));
    }

    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        return Err(Error::config(format!(
            "Invalid log level: {} (must be one of {})",
            logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if logging.indent_width > 16 {
        tracing::warn!(indent_width = logging.indent_width, "Call log indentation is very wide");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        assert!(validate_config(&ConnectorConfig::default()).is_ok());
    }

    #[test]
    fn test_alphanumeric_separator() {
        let mut config = ConnectorConfig::default();
        config.naming.separator = 'x';
        assert!(validate_config(&config).is_err());

        config.naming.separator = ' ';
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_default_port() {
        let mut config = ConnectorConfig::default();
        config.naming.default_port = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_port_with_separator() {
        let mut config = ConnectorConfig::default();
        config.naming.default_port = "a.b".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_max_arg_len() {
        let mut config = ConnectorConfig::default();
        config.logging.max_arg_len = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = ConnectorConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());

        config.logging.level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }
}
