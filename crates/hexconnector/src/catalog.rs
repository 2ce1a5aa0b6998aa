//! Module catalog
//!
//! Resolves textual module paths to adapter modules. Modules come from two
//! places:
//!
//! 1. Modules registered on the catalog at runtime with [`ModuleCatalog::register`]
//! 2. Modules submitted at link time into [`ADAPTER_MODULES`]:
//!
//! ```ignore
//! use hexconnector::{AdapterModule, Module, ModuleEntry, ADAPTER_MODULES};
//!
//! fn memory_store() -> Box<dyn AdapterModule> {
//!     Box::new(Module::new("storage.memory").value("kind", "memory"))
//! }
//!
//! #[linkme::distributed_slice(ADAPTER_MODULES)]
//! static MEMORY_STORE: ModuleEntry = ModuleEntry {
//!     path: "storage.memory",
//!     load: memory_store,
//! };
//! ```
//!
//! Runtime registrations shadow link-time entries with the same path. A
//! link-time module is loaded once and then served from the cache.

use crate::module::AdapterModule;
use hexconnector_core::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Link-time registration of an adapter module
#[derive(Debug)]
pub struct ModuleEntry {
    /// Import path of the module
    pub path: &'static str,
    /// Builds the module
    pub load: fn() -> Box<dyn AdapterModule>,
}

/// Adapter modules submitted at link time
#[linkme::distributed_slice]
pub static ADAPTER_MODULES: [ModuleEntry] = [..];

/// Resolves module paths to adapter modules
#[derive(Clone, Default)]
pub struct ModuleCatalog {
    modules: HashMap<String, Arc<dyn AdapterModule>>,
}

impl fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&String> = self.modules.keys().collect();
        paths.sort();
        f.debug_struct("ModuleCatalog")
            .field("modules", &paths)
            .finish()
    }
}

impl ModuleCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under its own path, replacing any earlier one
    pub fn register(&mut self, module: impl AdapterModule + 'static) {
        let module: Arc<dyn AdapterModule> = Arc::new(module);
        debug!(module = %module.path(), "Adapter module added to catalog");
        self.modules.insert(module.path().to_string(), module);
    }

    /// Whether `path` can be resolved
    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(path) || ADAPTER_MODULES.iter().any(|e| e.path == path)
    }

    /// Resolve `path` to a module
    pub fn resolve(&mut self, path: &str) -> Result<Arc<dyn AdapterModule>> {
        if let Some(module) = self.modules.get(path) {
            return Ok(Arc::clone(module));
        }

        let entry = ADAPTER_MODULES
            .iter()
            .find(|e| e.path == path)
            .ok_or_else(|| Error::ModuleNotFound {
                path: path.to_string(),
                available: self.available(),
            })?;

        let module: Arc<dyn AdapterModule> = Arc::from((entry.load)());
        debug!(module = %path, "Adapter module loaded");
        self.modules.insert(path.to_string(), Arc::clone(&module));

        Ok(module)
    }

    /// All resolvable paths, sorted
    pub fn available(&self) -> Vec<String> {
        self.modules
            .keys()
            .map(String::as_str)
            .chain(ADAPTER_MODULES.iter().map(|e| e.path))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
