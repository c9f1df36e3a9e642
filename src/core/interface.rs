//! Capability sets: what a host gains while a state is active.

use super::capability::{is_reserved, Capability, Method, ON_ENTER_STATE, ON_EXIT_STATE};
use crate::controller::StatefulError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The capability set of one state.
///
/// Members are installed on the host when the state is entered and removed
/// when it is exited. The reserved members `onEnterState` and `onExitState`
/// are lifecycle hooks: they are invoked during a transition and never
/// installed.
///
/// # Example
///
/// ```rust
/// use stateful::core::Interface;
///
/// struct Lamp {
///     lit: bool,
/// }
///
/// let on: Interface<Lamp> = Interface::new()
///     .value("label", "on")
///     .method("dim", |_lamp: &mut Lamp| Ok(()))
///     .on_enter(|lamp: &mut Lamp| {
///         lamp.lit = true;
///         Ok(())
///     });
///
/// assert_eq!(on.names().count(), 3);
/// assert_eq!(on.capabilities().count(), 2);
/// ```
pub struct Interface<H> {
    members: BTreeMap<String, Capability<H>>,
}

impl<H> Interface<H> {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }

    /// Add a data property.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), Capability::Value(value.into()));
        self
    }

    /// Add a method.
    pub fn method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut H) -> Result<(), StatefulError> + Send + Sync + 'static,
    {
        self.members.insert(name.into(), Capability::method(f));
        self
    }

    /// Set the hook run after this state's capabilities are installed.
    pub fn on_enter<F>(self, f: F) -> Self
    where
        F: Fn(&mut H) -> Result<(), StatefulError> + Send + Sync + 'static,
    {
        self.method(ON_ENTER_STATE, f)
    }

    /// Set the hook run before this state's capabilities are removed.
    pub fn on_exit<F>(self, f: F) -> Self
    where
        F: Fn(&mut H) -> Result<(), StatefulError> + Send + Sync + 'static,
    {
        self.method(ON_EXIT_STATE, f)
    }

    /// Insert a member, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        capability: Capability<H>,
    ) -> Option<Capability<H>> {
        self.members.insert(name.into(), capability)
    }

    pub fn get(&self, name: &str) -> Option<&Capability<H>> {
        self.members.get(name)
    }

    /// Get a lifecycle hook. Only callable members count as hooks.
    pub fn hook(&self, name: &str) -> Option<&Method<H>> {
        self.members.get(name).and_then(Capability::as_method)
    }

    /// All member names, hooks included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Members that get installed on the host (everything except hooks).
    pub fn capabilities(&self) -> impl Iterator<Item = (&str, &Capability<H>)> {
        self.members
            .iter()
            .filter(|(name, _)| !is_reserved(name))
            .map(|(name, capability)| (name.as_str(), capability))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<H> Default for Interface<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for Interface<H> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl<H> fmt::Debug for Interface<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.members.iter()).finish()
    }
}
