//! The state controller and its host contract.
//!
//! A [`Stateful`] controller is embedded in a [`Host`]. On every transition
//! it removes the outgoing state's capabilities from the host's property
//! bag, installs the incoming state's, runs the lifecycle hooks, and reports
//! each step to an optional [`StateObserver`].
//!
//! # Transition order
//!
//! 1. `state:exit(old)`, `onExitState`, remove old capabilities, `state:exited(old)`
//! 2. `state:enter(new)`, install new capabilities, `onEnterState`, update
//!    current, `state:entered(new)`
//! 3. `state:change`

mod error;
mod host;
mod observer;
mod stateful;

pub use error::StatefulError;
pub use host::Host;
pub use observer::StateObserver;
pub use stateful::{Stateful, DEFAULT_STATE};
