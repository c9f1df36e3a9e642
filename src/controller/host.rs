//! The contract between a host object and its controller.

use super::error::StatefulError;
use super::stateful::Stateful;
use crate::core::{Capability, InterfaceTable, Properties};
use serde_json::Value;
use std::sync::Arc;

/// An object whose behavior depends on its current state.
///
/// A host embeds its own [`Stateful`] controller and [`Properties`] bag and
/// exposes them through the four accessors. Everything else is provided:
/// transitions, state queries, and access to the capabilities the current
/// state installed.
///
/// Methods installed by a state are not Rust methods on the host; they are
/// reached through [`Host::call`], which reports
/// [`StatefulError::NotApplicable`] when the current state does not provide
/// them.
pub trait Host: Sized {
    fn stateful(&self) -> &Stateful<Self>;

    fn stateful_mut(&mut self) -> &mut Stateful<Self>;

    fn properties(&self) -> &Properties<Self>;

    fn properties_mut(&mut self) -> &mut Properties<Self>;

    /// Default interface table for this host type.
    ///
    /// Used by [`Stateful::bind`] when no table is passed explicitly.
    fn states() -> Option<Arc<InterfaceTable<Self>>> {
        None
    }

    /// Switch to a new state. See [`Stateful::transition`].
    fn transition(&mut self, state: &str) -> Result<(), StatefulError> {
        Stateful::transition(self, state)
    }

    /// Check if the current state is `state`.
    fn is(&self, state: &str) -> bool {
        self.stateful().is(state)
    }

    fn current_state(&self) -> Option<&str> {
        self.stateful().current()
    }

    /// Invoke an installed method with this host as receiver.
    fn call(&mut self, name: &str) -> Result<(), StatefulError> {
        let method = match self.properties().get(name) {
            Some(Capability::Method(method)) => Arc::clone(method),
            Some(Capability::Value(_)) => {
                return Err(StatefulError::NotCallable(name.to_string()));
            }
            None => {
                return Err(StatefulError::NotApplicable {
                    property: name.to_string(),
                    state: self.current_state().unwrap_or_default().to_string(),
                });
            }
        };
        method(self)
    }

    /// Read an installed data property.
    fn get(&self, name: &str) -> Option<&Value> {
        self.properties().value(name)
    }

    /// Check if a property of any kind is installed.
    fn responds_to(&self, name: &str) -> bool {
        self.properties().contains(name)
    }
}
