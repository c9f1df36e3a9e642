//! The host's property bag.

use super::capability::{Capability, Method};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Capabilities currently installed on a host.
///
/// The controller fills and empties this bag as states are entered and
/// exited. Hosts may also keep their own entries in it; those are only
/// touched when a state's capability set uses the same name.
pub struct Properties<H> {
    entries: BTreeMap<String, Capability<H>>,
}

impl<H> Properties<H> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Capability<H>> {
        self.entries.get(name)
    }

    /// Read a data property.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.entries.get(name).and_then(Capability::as_value)
    }

    /// Get a method property.
    pub fn method(&self, name: &str) -> Option<&Method<H>> {
        self.entries.get(name).and_then(Capability::as_method)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        capability: Capability<H>,
    ) -> Option<Capability<H>> {
        self.entries.insert(name.into(), capability)
    }

    pub fn remove(&mut self, name: &str) -> Option<Capability<H>> {
        self.entries.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for Properties<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for Properties<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
