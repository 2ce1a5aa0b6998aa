//! # Hexconnector
//!
//! Ports-and-adapters registry with support for:
//! - Adapters registered from name/member mappings, adapter modules or module paths
//! - Qualified name addressing (`port.member`, bare `member` for the default port)
//! - Lazy one-time port initialization (`init_adapter`)
//! - Explicit shutdown pass (`close_adapter`)
//! - Link-time module registration
//!
//! ## Example
//!
//! ```
//! use hexconnector::prelude::*;
//!
//! let mut connector = Connector::new();
//! connector
//!     .register_adapter(
//!         "greeting",
//!         &Module::new("greeting.english")
//!             .function("hello", |_, args| {
//!                 let who = args.get(0).and_then(Value::as_str).unwrap_or("world");
//!                 Ok(json!(format!("hello {who}")))
//!             }),
//!     )
//!     .unwrap();
//!
//! let greeting = connector
//!     .call_fn("greeting.hello", Args::new().arg("rust"))
//!     .unwrap();
//! assert_eq!(greeting, json!("hello rust"));
//!
//! connector.close_all_adapters().unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

// distributed_slice expands to link-section statics
#[allow(unsafe_code)]
pub mod catalog;
pub mod connector;
pub mod depth;
pub mod member;
pub mod module;

pub use catalog::{ModuleCatalog, ModuleEntry, ADAPTER_MODULES};
pub use connector::{Connector, CLOSE_ADAPTER, INIT_ADAPTER};
pub use member::{AdapterFn, Member};
pub use module::{public_members, AdapterModule, AdapterSource, Module};

pub use hexconnector_config as config;
pub use hexconnector_core::{json, Args, Error, QualifiedName, Result, Value};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{ModuleCatalog, ModuleEntry, ADAPTER_MODULES};
    pub use crate::connector::{Connector, CLOSE_ADAPTER, INIT_ADAPTER};
    pub use crate::member::Member;
    pub use crate::module::{AdapterModule, AdapterSource, Module};
    pub use hexconnector_config::ConnectorConfig;
    pub use hexconnector_core::prelude::*;
}
