//! Configuration loading
//!
//! Connector configuration may reference the environment with `${VAR}` or
//! `${VAR:-default}`; references are expanded before the document is parsed.

use crate::ConnectorConfig;
use hexconnector_core::{Error, Result};
use regex::{Captures, Regex};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

const ENV_REFERENCE: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}";

/// Document format of a connector configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format
    Yaml,
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Format for a file extension, if it is one of ours
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Format of the file at `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| {
                Error::config(format!(
                    "'{}' is not a .yaml, .yml, .toml or .json connector config",
                    path.display()
                ))
            })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        })
    }
}

/// Replace `${VAR}` and `${VAR:-default}` references with their values
///
/// Every unset variable without a default is reported in one error.
fn expand_env_vars(content: &str) -> Result<String> {
    let reference =
        Regex::new(ENV_REFERENCE).map_err(|e| Error::config(format!("bad env pattern: {e}")))?;

    let mut unset = Vec::new();
    let expanded = reference.replace_all(content, |caps: &Captures<'_>| {
        let var = &caps[1];
        match (env::var(var), caps.get(2)) {
            (Ok(value), _) => value,
            (Err(_), Some(default)) => default.as_str().to_string(),
            (Err(_), None) => {
                unset.push(var.to_string());
                String::new()
            }
        }
    });

    if !unset.is_empty() {
        return Err(Error::config(format!(
            "environment variables not set and without default: {}",
            unset.join(", ")
        )));
    }

    Ok(expanded.into_owned())
}

/// Parse a connector configuration document
///
/// JSON syntax errors surface as [`Error::Serialization`]; YAML and TOML
/// errors as [`Error::Config`].
pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<ConnectorConfig> {
    let content = expand_env_vars(content)?;

    let config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::config(format!("{format} connector config: {e}")))?,
        ConfigFormat::Toml => toml::from_str(&content)
            .map_err(|e| Error::config(format!("{format} connector config: {e}")))?,
        ConfigFormat::Json => serde_json::from_str(&content)?,
    };

    Ok(config)
}

/// Read and parse the connector configuration at `path`
///
/// The format comes from the file extension. Read failures surface as
/// [`Error::Io`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConnectorConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    tracing::debug!(path = %path.display(), %format, "Loading connector config");

    let content = fs::read_to_string(path)?;
    load_from_str(&content, format)
}

/// Read, parse and validate the connector configuration at `path`
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConnectorConfig> {
    let config = load_from_file(path)?;
    crate::validator::validate_config(&config)?;
    Ok(config)
}
