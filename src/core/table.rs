//! Interface tables: state name to capability set.

use super::interface::Interface;
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from state name to the capability set active in that state.
///
/// A table is shared read-only by every controller bound to it; controllers
/// never modify it.
///
/// # Example
///
/// ```rust
/// use stateful::core::{Interface, InterfaceTable};
///
/// struct Light;
///
/// let mut table: InterfaceTable<Light> = InterfaceTable::new();
/// table.insert("stop", Interface::new().value("color", "red"));
/// table.insert("go", Interface::new().value("color", "green"));
///
/// assert!(table.contains("stop"));
/// assert_eq!(table.state_names().collect::<Vec<_>>(), vec!["go", "stop"]);
/// ```
pub struct InterfaceTable<H> {
    states: BTreeMap<String, Interface<H>>,
}

impl<H> InterfaceTable<H> {
    pub fn new() -> Self {
        Self {
            states: BTreeMap::new(),
        }
    }

    /// Add a state, returning the capability set it replaced.
    pub fn insert(
        &mut self,
        state: impl Into<String>,
        interface: Interface<H>,
    ) -> Option<Interface<H>> {
        self.states.insert(state.into(), interface)
    }

    pub fn get(&self, state: &str) -> Option<&Interface<H>> {
        self.states.get(state)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// State names in sorted order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Interface<H>)> {
        self.states
            .iter()
            .map(|(name, interface)| (name.as_str(), interface))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<H> Default for InterfaceTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for InterfaceTable<H> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

impl<H> fmt::Debug for InterfaceTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.states.iter()).finish()
    }
}

impl<H, S: Into<String>> FromIterator<(S, Interface<H>)> for InterfaceTable<H> {
    fn from_iter<I: IntoIterator<Item = (S, Interface<H>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (state, interface) in iter {
            table.insert(state, interface);
        }
        table
    }
}
