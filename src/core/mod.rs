//! Core data types for state-dependent host behavior.
//!
//! This module contains the plain data the controller works with:
//! - Capabilities (data values and methods) and the reserved hook names
//! - Capability sets (`Interface`) and the tables mapping states to them
//! - The host's property bag
//! - Lifecycle events
//!
//! Nothing in here performs a transition; that lives in `controller`.

mod capability;
mod event;
mod interface;
mod properties;
mod table;

pub use capability::{is_reserved, Capability, Method, ON_ENTER_STATE, ON_EXIT_STATE};
pub use event::StateEvent;
pub use interface::Interface;
pub use properties::Properties;
pub use table::InterfaceTable;
