//! Capabilities: the values and methods a state grants to its host.

use crate::controller::StatefulError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Reserved property name for the hook run after a state's capabilities are installed.
pub const ON_ENTER_STATE: &str = "onEnterState";

/// Reserved property name for the hook run before a state's capabilities are removed.
pub const ON_EXIT_STATE: &str = "onExitState";

/// Check if a property name is reserved for a lifecycle hook.
///
/// Reserved names are never installed on a host.
pub fn is_reserved(name: &str) -> bool {
    name == ON_ENTER_STATE || name == ON_EXIT_STATE
}

/// A callable capability. Invoked with the host as receiver.
pub type Method<H> = Arc<dyn Fn(&mut H) -> Result<(), StatefulError> + Send + Sync>;

/// A single member of a capability set.
pub enum Capability<H> {
    /// Plain data, readable through `Host::get`.
    Value(Value),

    /// A function, invocable through `Host::call`.
    Method(Method<H>),
}

impl<H> Capability<H> {
    /// Wrap a closure as a method capability.
    pub fn method<F>(f: F) -> Self
    where
        F: Fn(&mut H) -> Result<(), StatefulError> + Send + Sync + 'static,
    {
        Capability::Method(Arc::new(f))
    }

    /// Get the data value, if this is a data capability.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Capability::Value(value) => Some(value),
            Capability::Method(_) => None,
        }
    }

    /// Get the method, if this is a callable capability.
    pub fn as_method(&self) -> Option<&Method<H>> {
        match self {
            Capability::Method(method) => Some(method),
            Capability::Value(_) => None,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Capability::Method(_))
    }

    /// Identity comparison: equal values, or the very same method.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Capability::Value(a), Capability::Value(b)) => a == b,
            (Capability::Method(a), Capability::Method(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<H> Clone for Capability<H> {
    fn clone(&self) -> Self {
        match self {
            Capability::Value(value) => Capability::Value(value.clone()),
            Capability::Method(method) => Capability::Method(Arc::clone(method)),
        }
    }
}

impl<H> fmt::Debug for Capability<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Capability::Method(_) => f.write_str("Method(..)"),
        }
    }
}

impl<H> From<Value> for Capability<H> {
    fn from(value: Value) -> Self {
        Capability::Value(value)
    }
}
