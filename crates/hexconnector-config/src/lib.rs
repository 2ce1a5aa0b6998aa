//! # Hexconnector Configuration
//!
//! Configuration for the adapter registry with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Environment variable expansion
//! - Validation
//! - Default values

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod builder;
pub mod loader;
pub mod types;
pub mod validator;

pub use builder::ConfigBuilder;
pub use loader::{load_config, load_from_file, load_from_str, ConfigFormat};
pub use types::{ConnectorConfig, LogFormat, LoggingConfig, NamingConfig};
pub use validator::validate_config;
