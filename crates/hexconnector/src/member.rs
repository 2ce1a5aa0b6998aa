//! Registry entry values

use crate::connector::Connector;
use hexconnector_core::{Args, Result, Value};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Adapter function
///
/// Receives the connector as its first argument, followed by the call
/// arguments.
pub type AdapterFn = Arc<dyn Fn(&mut Connector, Args) -> Result<Value> + Send + Sync>;

/// A value stored under a `(port, member)` key
#[derive(Clone)]
pub enum Member {
    /// Callable adapter function
    Function(AdapterFn),
    /// Plain data
    Value(Value),
    /// Arbitrary typed object
    Object(Arc<dyn Any + Send + Sync>),
}

impl Member {
    /// Wrap a closure or function as a callable member
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&mut Connector, Args) -> Result<Value> + Send + Sync + 'static,
    {
        Member::Function(Arc::new(f))
    }

    /// Wrap plain data
    pub fn value(value: impl Into<Value>) -> Self {
        Member::Value(value.into())
    }

    /// Wrap an arbitrary object
    pub fn object<T: Any + Send + Sync>(object: T) -> Self {
        Member::Object(Arc::new(object))
    }

    /// Borrow the plain data, if this is a value member
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Member::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Get the object as `T`, if this is an object member of that type
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self {
            Member::Object(object) => Arc::clone(object).downcast::<T>().ok(),
            _ => None,
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Function(_) => f.write_str("Function(<fn>)"),
            Member::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Member::Object(_) => f.write_str("Object(<opaque>)"),
        }
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Member::Value(value)
    }
}

impl From<AdapterFn> for Member {
    fn from(function: AdapterFn) -> Self {
        Member::Function(function)
    }
}
