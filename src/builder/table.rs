//! Builder for constructing interface tables.

use crate::builder::error::BuildError;
use crate::core::{Capability, Interface, InterfaceTable, ON_ENTER_STATE, ON_EXIT_STATE};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Builder for interface tables with a fluent API.
///
/// Unlike filling an [`InterfaceTable`] directly, `build` validates the
/// result: state names are non-empty and unique, and lifecycle hook names
/// hold methods.
pub struct TableBuilder<H> {
    states: Vec<(String, Interface<H>)>,
}

impl<H> TableBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Add a state with its capability set.
    pub fn state(mut self, name: impl Into<String>, interface: Interface<H>) -> Self {
        self.states.push((name.into(), interface));
        self
    }

    /// Extend a state's capability set, adding the state if it is missing.
    pub fn amend<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(Interface<H>) -> Interface<H>,
    {
        let name = name.into();
        match self.states.iter_mut().find(|(state, _)| *state == name) {
            Some((_, interface)) => {
                let current = std::mem::take(interface);
                *interface = f(current);
            }
            None => self.states.push((name, f(Interface::new()))),
        }
        self
    }

    /// Start from data-only states described as JSON.
    ///
    /// The document maps state names to objects; every member of those
    /// objects becomes a data property. Methods and hooks are added
    /// afterwards with [`TableBuilder::amend`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateful::builder::TableBuilder;
    ///
    /// struct Light;
    ///
    /// let table = TableBuilder::<Light>::from_json(
    ///     r#"{ "stop": { "color": "red" }, "go": { "color": "green" } }"#,
    /// )?
    /// .amend("go", |go| go.method("honk", |_: &mut Light| Ok(())))
    /// .build()?;
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.get("go").unwrap().len(), 2);
    /// # Ok::<(), stateful::builder::BuildError>(())
    /// ```
    pub fn from_json(document: &str) -> Result<Self, BuildError> {
        let value: Value = serde_json::from_str(document)
            .map_err(|e| BuildError::InvalidDocument(e.to_string()))?;
        Self::from_value(value)
    }

    /// Start from data-only states described as a JSON value.
    pub fn from_value(value: Value) -> Result<Self, BuildError> {
        let Value::Object(states) = value else {
            return Err(BuildError::InvalidDocument(
                "expected an object of states".to_string(),
            ));
        };

        let mut builder = Self::new();
        for (state, members) in states {
            let Value::Object(members) = members else {
                return Err(BuildError::InvalidDocument(format!(
                    "state '{}' must be an object of properties",
                    state
                )));
            };

            let mut interface = Interface::new();
            for (name, value) in members {
                interface.insert(name, Capability::Value(value));
            }
            builder = builder.state(state, interface);
        }
        Ok(builder)
    }

    /// Build the table.
    /// Returns an error if the states fail validation.
    pub fn build(self) -> Result<InterfaceTable<H>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut seen = HashSet::new();
        let mut table = InterfaceTable::new();
        for (name, interface) in self.states {
            if name.is_empty() {
                return Err(BuildError::EmptyStateName);
            }
            if !seen.insert(name.clone()) {
                return Err(BuildError::DuplicateState(name));
            }
            for hook in [ON_ENTER_STATE, ON_EXIT_STATE] {
                if matches!(interface.get(hook), Some(c) if !c.is_method()) {
                    return Err(BuildError::ReservedValue {
                        state: name,
                        property: hook.to_string(),
                    });
                }
            }
            table.insert(name, interface);
        }

        debug!(states = table.len(), "built interface table");
        Ok(table)
    }
}

impl<H> Default for TableBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Light {
        on: bool,
    }

    #[test]
    fn builder_requires_states() {
        let result = TableBuilder::<Light>::new().build();
        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_rejects_empty_state_name() {
        let result = TableBuilder::<Light>::new().state("", Interface::new()).build();
        assert!(matches!(result, Err(BuildError::EmptyStateName)));
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = TableBuilder::<Light>::new()
            .state("stop", Interface::new())
            .state("stop", Interface::new().value("color", "red"))
            .build();

        assert!(matches!(result, Err(BuildError::DuplicateState(name)) if name == "stop"));
    }

    #[test]
    fn builder_rejects_data_in_hook_slot() {
        let result = TableBuilder::<Light>::new()
            .state("stop", Interface::new().value("onEnterState", true))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::ReservedValue { ref state, ref property })
                if state == "stop" && property == "onEnterState"
        ));
    }

    #[test]
    fn amend_extends_existing_state() {
        let table = TableBuilder::new()
            .state("go", Interface::new().value("color", "green"))
            .amend("go", |go| {
                go.on_enter(|light: &mut Light| {
                    light.on = true;
                    Ok(())
                })
            })
            .build()
            .unwrap();

        let go = table.get("go").unwrap();
        assert_eq!(go.len(), 2);

        let mut light = Light { on: false };
        let hook = go.hook(ON_ENTER_STATE).unwrap();
        hook(&mut light).unwrap();
        assert!(light.on);
    }

    #[test]
    fn amend_adds_missing_state() {
        let table = TableBuilder::<Light>::new()
            .amend("caution", |c| c.value("color", "yellow"))
            .build()
            .unwrap();

        assert!(table.contains("caution"));
    }

    #[test]
    fn from_value_loads_data_properties() {
        let table = TableBuilder::<Light>::from_value(json!({
            "stop": { "color": "red", "seconds": 30 },
            "go": { "color": "green" }
        }))
        .unwrap()
        .build()
        .unwrap();

        let stop = table.get("stop").unwrap();
        assert_eq!(stop.get("seconds").unwrap().as_value(), Some(&json!(30)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        assert!(matches!(
            TableBuilder::<Light>::from_json("{ not json"),
            Err(BuildError::InvalidDocument(_))
        ));
        assert!(matches!(
            TableBuilder::<Light>::from_json("[1, 2]"),
            Err(BuildError::InvalidDocument(_))
        ));
        assert!(matches!(
            TableBuilder::<Light>::from_json(r#"{ "stop": "red" }"#),
            Err(BuildError::InvalidDocument(_))
        ));
    }
}
