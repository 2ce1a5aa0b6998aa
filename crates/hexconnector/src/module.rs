//! Adapter modules
//!
//! An adapter module is an explicit, enumerable list of named members. Only
//! its public members are copied into the registry: a member is public when
//! its name does not start with an underscore and, if the module declares an
//! export list, the name appears in that list.

use crate::connector::Connector;
use crate::member::Member;
use hexconnector_core::{Args, Result, Value};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A unit of adapter code that can be bound to a port
pub trait AdapterModule: Send + Sync {
    /// Import path of the module, e.g. `storage.memory`
    fn path(&self) -> &str;

    /// Every top-level member, private ones included
    fn members(&self) -> Vec<(String, Member)>;

    /// Explicit export allow-list, if the module declares one
    fn exports(&self) -> Option<&[String]> {
        None
    }
}

/// Whether `name` is public in a module with the given export list
pub fn is_public(name: &str, exports: Option<&[String]>) -> bool {
    if name.starts_with('_') {
        return false;
    }
    exports.map_or(true, |exports| exports.iter().any(|e| e == name))
}

/// The public members of `module`
pub fn public_members(module: &dyn AdapterModule) -> Vec<(String, Member)> {
    let exports = module.exports();
    module
        .members()
        .into_iter()
        .filter(|(name, _)| is_public(name, exports))
        .collect()
}

/// Ready-made adapter module assembled from explicit members
#[derive(Clone)]
pub struct Module {
    path: String,
    members: Vec<(String, Member)>,
    exports: Option<Vec<String>>,
}

impl Module {
    /// Create an empty module
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            members: Vec::new(),
            exports: None,
        }
    }

    /// Add a member, replacing an earlier one with the same name
    pub fn member(mut self, name: impl Into<String>, member: Member) -> Self {
        let name = name.into();
        match self.members.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = member,
            None => self.members.push((name, member)),
        }
        self
    }

    /// Add a function member
    pub fn function<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Connector, Args) -> Result<Value> + Send + Sync + 'static,
    {
        self.member(name, Member::function(f))
    }

    /// Add a plain data member
    pub fn value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.member(name, Member::value(value))
    }

    /// Add an object member
    pub fn object<T: Any + Send + Sync>(self, name: impl Into<String>, object: T) -> Self {
        self.member(name, Member::object(object))
    }

    /// Declare the export allow-list
    pub fn exports<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exports = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("path", &self.path)
            .field(
                "members",
                &self.members.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("exports", &self.exports)
            .finish()
    }
}

impl AdapterModule for Module {
    fn path(&self) -> &str {
        &self.path
    }

    fn members(&self) -> Vec<(String, Member)> {
        self.members.clone()
    }

    fn exports(&self) -> Option<&[String]> {
        self.exports.as_deref()
    }
}

/// Where `register_adapter` takes its members from
pub enum AdapterSource<'a> {
    /// Name to member mapping, copied entry by entry without filtering
    Members(Vec<(String, Member)>),
    /// An adapter module, filtered to its public members
    Module(&'a dyn AdapterModule),
    /// Import path resolved through the module catalog
    Path(&'a str),
}

impl fmt::Debug for AdapterSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterSource::Members(members) => f
                .debug_tuple("Members")
                .field(&members.iter().map(|(n, _)| n).collect::<Vec<_>>())
                .finish(),
            AdapterSource::Module(module) => f.debug_tuple("Module").field(&module.path()).finish(),
            AdapterSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl<'a> From<&'a str> for AdapterSource<'a> {
    fn from(path: &'a str) -> Self {
        AdapterSource::Path(path)
    }
}

impl<'a> From<&'a Module> for AdapterSource<'a> {
    fn from(module: &'a Module) -> Self {
        AdapterSource::Module(module)
    }
}

impl<'a> From<&'a dyn AdapterModule> for AdapterSource<'a> {
    fn from(module: &'a dyn AdapterModule) -> Self {
        AdapterSource::Module(module)
    }
}

impl From<Vec<(String, Member)>> for AdapterSource<'_> {
    fn from(members: Vec<(String, Member)>) -> Self {
        AdapterSource::Members(members)
    }
}

impl From<HashMap<String, Member>> for AdapterSource<'_> {
    fn from(members: HashMap<String, Member>) -> Self {
        AdapterSource::Members(members.into_iter().collect())
    }
}

impl From<BTreeMap<String, Member>> for AdapterSource<'_> {
    fn from(members: BTreeMap<String, Member>) -> Self {
        AdapterSource::Members(members.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(members: &[(String, Member)]) -> Vec<&str> {
        members.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn test_underscore_names_are_private() {
        let module = Module::new("storage.memory")
            .value("save", 1)
            .value("_cache", 2)
            .value("__version", 3);

        assert_eq!(names(&public_members(&module)), vec!["save"]);
    }

    #[test]
    fn test_export_list_filters() {
        let module = Module::new("storage.memory")
            .value("save", 1)
            .value("load", 2)
            .value("helper", 3)
            .value("_private", 4)
            .exports(["save", "load", "_private"]);

        assert_eq!(names(&public_members(&module)), vec!["save", "load"]);
    }

    #[test]
    fn test_member_replaces_same_name() {
        let module = Module::new("m").value("x", 1).value("x", 2);
        let members = module.members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].1.as_value(), Some(&json!(2)));
    }

    #[test]
    fn test_is_public() {
        assert!(is_public("run", None));
        assert!(!is_public("_run", None));
        let exports = vec!["run".to_string()];
        assert!(is_public("run", Some(&exports)));
        assert!(!is_public("walk", Some(&exports)));
    }

    #[test]
    fn test_source_conversions() {
        let module = Module::new("m");
        assert!(matches!(AdapterSource::from(&module), AdapterSource::Module(_)));
        assert!(matches!(AdapterSource::from("a.b"), AdapterSource::Path("a.b")));
        let map: HashMap<String, Member> = HashMap::new();
        assert!(matches!(AdapterSource::from(map), AdapterSource::Members(_)));
    }
}
