//! Stateful: state-dependent behavior for host objects
//!
//! A host object embeds a [`Stateful`] controller. Each named state has a
//! capability set (an [`Interface`]) of data properties and methods. On every
//! transition the controller removes the outgoing state's capabilities from
//! the host, installs the incoming state's, runs the `onExitState` /
//! `onEnterState` hooks, and reports each step to an optional observer.
//!
//! # Core Concepts
//!
//! - **Host**: any type implementing [`Host`], carrying its controller and
//!   its [`Properties`] bag
//! - **Interface table**: state name to capability set, shared via `Arc`
//! - **Events**: `state:exit`, `state:exited`, `state:enter`,
//!   `state:entered`, `state:change`
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use stateful::{Host, Interface, InterfaceTable, Properties, StateEvent, Stateful};
//!
//! struct Light {
//!     stateful: Stateful<Light>,
//!     properties: Properties<Light>,
//! }
//!
//! impl Host for Light {
//!     fn stateful(&self) -> &Stateful<Self> { &self.stateful }
//!     fn stateful_mut(&mut self) -> &mut Stateful<Self> { &mut self.stateful }
//!     fn properties(&self) -> &Properties<Self> { &self.properties }
//!     fn properties_mut(&mut self) -> &mut Properties<Self> { &mut self.properties }
//! }
//!
//! let table: InterfaceTable<Light> = [
//!     ("stop", Interface::new().value("color", "red")),
//!     ("go", Interface::new().value("color", "green")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut light = Light { stateful: Stateful::default(), properties: Properties::new() };
//! Stateful::bind(&mut light, Some("stop"), Some(Arc::new(table))).unwrap();
//!
//! let events = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&events);
//! light.stateful_mut().set_observer(move |event: &StateEvent| {
//!     sink.lock().unwrap().push(event.name());
//! });
//!
//! light.transition("go").unwrap();
//! assert_eq!(light.get("color").unwrap(), "green");
//! assert_eq!(
//!     *events.lock().unwrap(),
//!     vec!["state:exit", "state:exited", "state:enter", "state:entered", "state:change"]
//! );
//! ```

pub mod builder;
pub mod controller;
pub mod core;

// Re-export commonly used types
pub use crate::controller::{Host, StateObserver, Stateful, StatefulError, DEFAULT_STATE};
pub use crate::core::{Capability, Interface, InterfaceTable, Properties, StateEvent};
