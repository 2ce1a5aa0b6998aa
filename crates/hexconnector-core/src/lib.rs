//! # Hexconnector Core
//!
//! Core types and error handling for the hexconnector adapter registry.
//!
//! This crate provides the foundational pieces shared by the registry and its
//! configuration:
//! - Error types
//! - Qualified names (`port.member` addressing)
//! - Call arguments
//! - Argument rendering for call logs

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod args;
pub mod error;
pub mod name;
pub mod render;

pub use args::Args;
pub use error::{Error, Result};
pub use name::{NameRules, QualifiedName, DEFAULT_PORT, DEFAULT_SEPARATOR};
pub use render::{render_argument, render_arguments, DEFAULT_MAX_ARG_LEN};

// Adapter values travel as JSON values
pub use serde_json::{json, Value};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::args::Args;
    pub use crate::error::{Error, Result};
    pub use crate::name::{NameRules, QualifiedName};
    pub use serde_json::{json, Value};
}
