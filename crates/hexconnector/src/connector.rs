//! The adapter registry
//!
//! A [`Connector`] maps `(port, member)` keys to [`Member`]s and hides the two
//! level namespace behind qualified names such as `storage.save`. Ports are
//! initialized lazily: the first [`Connector::call_fn`] into a port runs its
//! `init_adapter` member once, and [`Connector::close_all_adapters`] runs
//! `close_adapter` for every port that got that far.

use crate::catalog::ModuleCatalog;
use crate::depth::CallDepth;
use crate::member::{AdapterFn, Member};
use crate::module::{public_members, AdapterSource};
use hexconnector_config::{ConnectorConfig, LoggingConfig};
use hexconnector_core::{
    render_arguments, Args, Error, NameRules, QualifiedName, Result, Value,
};
use std::any::{type_name, Any};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Member run once before the first call into a port
pub const INIT_ADAPTER: &str = "init_adapter";

/// Member run for every initialized port on shutdown
pub const CLOSE_ADAPTER: &str = "close_adapter";

/// Registry of adapters bound to ports
pub struct Connector {
    entries: HashMap<QualifiedName, Member>,

    /// Registered ports in registration order, duplicates kept
    ports: Vec<String>,

    /// Initialized ports in initialization order
    initialized_ports: Vec<String>,

    /// Ports whose `init_adapter` is currently running
    initializing: HashSet<String>,

    depth: CallDepth,
    rules: NameRules,
    logging: LoggingConfig,
    catalog: ModuleCatalog,
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("entries", &self.entries.len())
            .field("ports", &self.ports)
            .field("initialized_ports", &self.initialized_ports)
            .field("call_depth", &self.depth.get())
            .field("rules", &self.rules)
            .field("catalog", &self.catalog)
            .finish()
    }
}

impl Connector {
    /// Create a connector with the default configuration
    pub fn new() -> Self {
        Self::with_config(ConnectorConfig::default())
    }

    /// Create a connector with the given configuration
    pub fn with_config(config: ConnectorConfig) -> Self {
        Self::with_catalog(config, ModuleCatalog::new())
    }

    /// Create a connector that resolves module paths through `catalog`
    pub fn with_catalog(config: ConnectorConfig, catalog: ModuleCatalog) -> Self {
        Self {
            entries: HashMap::new(),
            ports: Vec::new(),
            initialized_ports: Vec::new(),
            initializing: HashSet::new(),
            depth: CallDepth::default(),
            rules: config.naming.rules(),
            logging: config.logging,
            catalog,
        }
    }

    /// Module catalog used for path sources
    pub fn catalog_mut(&mut self) -> &mut ModuleCatalog {
        &mut self.catalog
    }

    /// Bind the members of `source` to `port`
    ///
    /// Returns the entries that were inserted. Registering a port again is not
    /// an error; members with the same name overwrite earlier ones.
    pub fn register_adapter<'a>(
        &mut self,
        port: &str,
        source: impl Into<AdapterSource<'a>>,
    ) -> Result<Vec<(QualifiedName, Member)>> {
        let members = match source.into() {
            AdapterSource::Members(members) => members,
            AdapterSource::Module(module) => public_members(module),
            AdapterSource::Path(path) => {
                let module = self.catalog.resolve(path)?;
                public_members(module.as_ref())
            }
        };

        self.ports.push(port.to_string());

        let added: Vec<(QualifiedName, Member)> = members
            .into_iter()
            .map(|(name, member)| {
                let key = QualifiedName::new(port, name);
                self.entries.insert(key.clone(), member.clone());
                (key, member)
            })
            .collect();

        info!(port = %port, members = added.len(), "Adapter registered");

        Ok(added)
    }

    /// Call the function registered as `what`
    ///
    /// The first call into a port runs its `init_adapter` member before `what`
    /// is looked up, so init may add or replace members of its own port.
    /// Errors returned by the function are passed through unchanged.
    pub fn call_fn(&mut self, what: &str, args: Args) -> Result<Value> {
        let name = self.rules.parse(what)?;
        self.call_qualified(&name, args)
    }

    fn call_qualified(&mut self, name: &QualifiedName, args: Args) -> Result<Value> {
        let depth = self.depth.get();
        debug!(
            depth,
            name = %name,
            "f_{}:{}{}({})",
            depth,
            " ".repeat(depth * self.logging.indent_width),
            self.rules.join(&name.port, &name.member),
            render_arguments(&args, self.logging.max_arg_len),
        );

        self.ensure_initialized(&name.port)?;
        let function = self.function(name)?;
        self.dispatch(function, args)
    }

    fn function(&self, name: &QualifiedName) -> Result<AdapterFn> {
        match self.entries.get(name) {
            Some(Member::Function(function)) => Ok(Arc::clone(function)),
            Some(_) => Err(Error::not_callable(&name.port, &name.member)),
            None => Err(Error::not_found(&name.port, &name.member)),
        }
    }

    fn ensure_initialized(&mut self, port: &str) -> Result<()> {
        if self.is_initialized(port) || self.initializing.contains(port) {
            return Ok(());
        }

        let init_name = QualifiedName::new(port, INIT_ADAPTER);
        if self.entries.contains_key(&init_name) {
            let init = self.function(&init_name)?;

            self.initializing.insert(port.to_string());
            let result = self.dispatch(init, Args::new());
            self.initializing.remove(port);

            if let Err(e) = result {
                error!(port = %port, error = %e, "Adapter initialization failed");
                return Err(e);
            }
        }

        self.initialized_ports.push(port.to_string());
        info!(port = %port, "Adapter initialized");

        Ok(())
    }

    fn dispatch(&mut self, function: AdapterFn, args: Args) -> Result<Value> {
        let _depth = self.depth.enter();
        function(self, args)
    }

    /// Look up the member registered as `what`
    ///
    /// Never triggers initialization.
    pub fn get_from(&self, what: &str) -> Result<&Member> {
        let name = self.rules.parse(what)?;
        self.entries
            .get(&name)
            .ok_or_else(|| Error::not_found(&name.port, &name.member))
    }

    /// Look up `what`, falling back to `default` when nothing is registered
    pub fn get_from_or(&self, what: &str, default: impl Into<Member>) -> Result<Member> {
        let name = self.rules.parse(what)?;
        Ok(self
            .entries
            .get(&name)
            .cloned()
            .unwrap_or_else(|| default.into()))
    }

    /// Look up the plain data registered as `what`
    pub fn get_value(&self, what: &str) -> Result<&Value> {
        self.get_from(what)?
            .as_value()
            .ok_or_else(|| Error::type_mismatch(what, "a value"))
    }

    /// Look up the object of type `T` registered as `what`
    pub fn get_object<T: Any + Send + Sync>(&self, what: &str) -> Result<Arc<T>> {
        self.get_from(what)?
            .downcast::<T>()
            .ok_or_else(|| Error::type_mismatch(what, type_name::<T>()))
    }

    /// Whether anything is registered as `what`
    pub fn contains(&self, what: &str) -> bool {
        self.rules
            .parse(what)
            .map(|name| self.entries.contains_key(&name))
            .unwrap_or(false)
    }

    /// Insert or overwrite the entry `what`
    ///
    /// Bypasses initialization.
    pub fn set_to(&mut self, what: &str, value: impl Into<Member>) -> Result<()> {
        let name = self.rules.parse(what)?;
        self.entries.insert(name, value.into());
        Ok(())
    }

    /// Run `close_adapter` for every initialized port
    ///
    /// Every port is attempted even if an earlier one fails; the first failure
    /// is returned. Initialized ports stay initialized, so a second pass runs
    /// every `close_adapter` again.
    pub fn close_all_adapters(&mut self) -> Result<()> {
        let ports = self.initialized_ports.clone();
        let mut first_error = None;

        for port in ports {
            let name = QualifiedName::new(port.as_str(), CLOSE_ADAPTER);
            if !self.entries.contains_key(&name) {
                continue;
            }

            match self.call_qualified(&name, Args::new()) {
                Ok(_) => info!(port = %port, "Adapter closed"),
                Err(e) if first_error.is_none() => {
                    error!(port = %port, error = %e, "Failed to close adapter");
                    first_error = Some(e);
                }
                Err(e) => warn!(port = %port, error = %e, "Failed to close adapter"),
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Registered ports in registration order
    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    /// Initialized ports in initialization order
    pub fn initialized_ports(&self) -> &[String] {
        &self.initialized_ports
    }

    /// Whether `port` has been initialized
    pub fn is_initialized(&self, port: &str) -> bool {
        self.initialized_ports.iter().any(|p| p == port)
    }

    /// Current nesting depth of dispatched calls
    pub fn call_depth(&self) -> usize {
        self.depth.get()
    }

    /// Member names registered on `port`, sorted
    pub fn members_of(&self, port: &str) -> Vec<&str> {
        let mut members: Vec<&str> = self
            .entries
            .keys()
            .filter(|key| key.port == port)
            .map(|key| key.member.as_str())
            .collect();
        members.sort_unstable();
        members
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new()
    }
}
