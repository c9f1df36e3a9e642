//! The state controller.

use super::error::StatefulError;
use super::host::Host;
use super::observer::StateObserver;
use crate::core::{InterfaceTable, StateEvent, ON_ENTER_STATE, ON_EXIT_STATE};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// State entered by [`Stateful::bind`] when no initial state is given.
pub const DEFAULT_STATE: &str = "default";

/// Controller that installs and revokes a host's capabilities per state.
///
/// The controller lives inside its host. It starts unbound
/// ([`Stateful::default`]) and is bound once, during the host's own
/// construction, with [`Stateful::bind`], which immediately enters the
/// initial state.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use stateful::{Host, Interface, InterfaceTable, Properties, Stateful};
///
/// struct Door {
///     stateful: Stateful<Door>,
///     properties: Properties<Door>,
/// }
///
/// impl Host for Door {
///     fn stateful(&self) -> &Stateful<Self> { &self.stateful }
///     fn stateful_mut(&mut self) -> &mut Stateful<Self> { &mut self.stateful }
///     fn properties(&self) -> &Properties<Self> { &self.properties }
///     fn properties_mut(&mut self) -> &mut Properties<Self> { &mut self.properties }
/// }
///
/// let mut table = InterfaceTable::new();
/// table.insert(
///     "closed",
///     Interface::new().method("open", |door: &mut Door| door.transition("open")),
/// );
/// table.insert(
///     "open",
///     Interface::new().method("close", |door: &mut Door| door.transition("closed")),
/// );
///
/// let mut door = Door { stateful: Stateful::default(), properties: Properties::new() };
/// Stateful::bind(&mut door, Some("closed"), Some(Arc::new(table)))?;
/// assert!(door.is("closed"));
///
/// door.call("open")?;
/// assert!(door.is("open"));
/// assert!(!door.responds_to("open"));
/// assert!(door.responds_to("close"));
/// # Ok::<(), stateful::StatefulError>(())
/// ```
pub struct Stateful<H> {
    current: Option<String>,
    interfaces: Option<Arc<InterfaceTable<H>>>,
    observer: Option<Box<dyn StateObserver>>,
}

impl<H> Stateful<H> {
    /// Create an unbound controller that reports events to `observer`.
    ///
    /// Installing the observer before binding lets it see the initial
    /// transition.
    pub fn with_observer<O>(observer: O) -> Self
    where
        O: StateObserver + 'static,
    {
        Self {
            current: None,
            interfaces: None,
            observer: Some(Box::new(observer)),
        }
    }

    /// Name of the current state. `None` until the first transition succeeds.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Check if the current state is `state` (pure).
    pub fn is(&self, state: &str) -> bool {
        self.current.as_deref() == Some(state)
    }

    /// The bound interface table, if any.
    pub fn interfaces(&self) -> Option<&InterfaceTable<H>> {
        self.interfaces.as_deref()
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: StateObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    fn emit(&mut self, event: StateEvent) {
        if let Some(observer) = self.observer.as_mut() {
            trace!(event = %event, "emitting state event");
            observer.notify(&event);
        }
    }
}

impl<H: Host> Stateful<H> {
    /// Bind the host's controller to an interface table and enter the
    /// initial state.
    ///
    /// `initial` defaults to [`DEFAULT_STATE`]; `interfaces` defaults to
    /// [`Host::states`]. When neither yields a table, the initial transition
    /// fails with [`StatefulError::InvalidState`]. An observer already set on
    /// the host's controller is kept. Rebinding does not exit the previous
    /// state.
    pub fn bind(
        host: &mut H,
        initial: Option<&str>,
        interfaces: Option<Arc<InterfaceTable<H>>>,
    ) -> Result<(), StatefulError> {
        let interfaces = interfaces.or_else(H::states);
        if interfaces.is_none() {
            debug!("binding without an interface table");
        }

        let controller = host.stateful_mut();
        controller.current = None;
        controller.interfaces = interfaces;

        Self::transition(host, initial.unwrap_or(DEFAULT_STATE))
    }

    /// Switch the host to a new state.
    ///
    /// Exits the current state (if any), enters `state`, then emits
    /// `state:change`. Exit always completes before entry is attempted: when
    /// `state` is unknown, the old state's capabilities are already gone,
    /// `current` still names the old state, and
    /// [`StatefulError::InvalidState`] is returned.
    ///
    /// An error returned by a hook aborts the transition at that point.
    /// Hooks may start a nested transition; it runs to completion before
    /// this one continues.
    pub fn transition(host: &mut H, state: &str) -> Result<(), StatefulError> {
        let interfaces = host.stateful().interfaces.clone();
        let previous = host.stateful().current.clone();
        debug!(
            from = previous.as_deref().unwrap_or("<none>"),
            to = state,
            "state transition"
        );

        if let Some(previous) = previous.as_deref() {
            Self::exit_state(host, interfaces.as_deref(), previous)?;
        }
        Self::enter_state(host, interfaces.as_deref(), state)?;

        host.stateful_mut().emit(StateEvent::Change);
        Ok(())
    }

    fn exit_state(
        host: &mut H,
        interfaces: Option<&InterfaceTable<H>>,
        state: &str,
    ) -> Result<(), StatefulError> {
        let Some(api) = interfaces.and_then(|table| table.get(state)) else {
            debug!(state, "current state has no interface, skipping exit");
            return Ok(());
        };

        host.stateful_mut().emit(StateEvent::Exit(state.to_string()));

        if let Some(hook) = api.hook(ON_EXIT_STATE) {
            hook(host)?;
        }

        let properties = host.properties_mut();
        for name in api.names() {
            if properties.remove(name).is_some() {
                trace!(state, property = name, "removed capability");
            }
        }

        host.stateful_mut().emit(StateEvent::Exited(state.to_string()));
        Ok(())
    }

    fn enter_state(
        host: &mut H,
        interfaces: Option<&InterfaceTable<H>>,
        state: &str,
    ) -> Result<(), StatefulError> {
        let Some(api) = interfaces.and_then(|table| table.get(state)) else {
            warn!(state, "transition to unknown state");
            return Err(StatefulError::InvalidState(state.to_string()));
        };

        host.stateful_mut().emit(StateEvent::Enter(state.to_string()));

        let properties = host.properties_mut();
        for (name, capability) in api.capabilities() {
            trace!(state, property = name, "installed capability");
            properties.insert(name, capability.clone());
        }

        if let Some(hook) = api.hook(ON_ENTER_STATE) {
            hook(host)?;
        }

        let controller = host.stateful_mut();
        controller.current = Some(state.to_string());
        controller.emit(StateEvent::Entered(state.to_string()));
        Ok(())
    }
}

impl<H> Default for Stateful<H> {
    fn default() -> Self {
        Self {
            current: None,
            interfaces: None,
            observer: None,
        }
    }
}

impl<H> fmt::Debug for Stateful<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stateful")
            .field("current", &self.current)
            .field("interfaces", &self.interfaces)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Interface, Properties};
    use serde_json::json;
    use std::sync::Mutex;

    struct Probe {
        stateful: Stateful<Probe>,
        properties: Properties<Probe>,
        log: Vec<String>,
    }

    impl Host for Probe {
        fn stateful(&self) -> &Stateful<Self> {
            &self.stateful
        }

        fn stateful_mut(&mut self) -> &mut Stateful<Self> {
            &mut self.stateful
        }

        fn properties(&self) -> &Properties<Self> {
            &self.properties
        }

        fn properties_mut(&mut self) -> &mut Properties<Self> {
            &mut self.properties
        }
    }

    impl Probe {
        fn unbound() -> Self {
            Self {
                stateful: Stateful::default(),
                properties: Properties::new(),
                log: Vec::new(),
            }
        }
    }

    fn table() -> Arc<InterfaceTable<Probe>> {
        let mut table = InterfaceTable::new();
        table.insert("default", Interface::new().value("mode", "idle"));
        table.insert(
            "busy",
            Interface::new()
                .value("mode", "busy")
                .value("load", 3)
                .on_enter(|p: &mut Probe| {
                    let installed = p.responds_to("load");
                    let current = p.current_state().unwrap_or_default().to_string();
                    p.log.push(format!("enter installed={} current={}", installed, current));
                    Ok(())
                })
                .on_exit(|p: &mut Probe| {
                    let installed = p.responds_to("load");
                    p.log.push(format!("exit installed={}", installed));
                    Ok(())
                }),
        );
        Arc::new(table)
    }

    #[test]
    fn bind_enters_default_state() {
        let mut probe = Probe::unbound();
        Stateful::bind(&mut probe, None, Some(table())).unwrap();

        assert!(probe.is(DEFAULT_STATE));
        assert_eq!(probe.get("mode"), Some(&json!("idle")));
    }

    #[test]
    fn bind_without_table_fails_on_initial_transition() {
        let mut probe = Probe::unbound();
        let result = Stateful::bind(&mut probe, Some("busy"), None);

        assert_eq!(result, Err(StatefulError::InvalidState("busy".into())));
        assert_eq!(probe.current_state(), None);
    }

    #[test]
    fn is_is_false_before_binding() {
        let probe = Probe::unbound();
        assert!(!probe.is(DEFAULT_STATE));
        assert!(probe.stateful().interfaces().is_none());
    }

    #[test]
    fn hooks_run_between_install_and_current_update() {
        let mut probe = Probe::unbound();
        Stateful::bind(&mut probe, None, Some(table())).unwrap();

        probe.transition("busy").unwrap();
        probe.transition("default").unwrap();

        assert_eq!(
            probe.log,
            vec![
                "enter installed=true current=default".to_string(),
                "exit installed=true".to_string(),
            ]
        );
        assert!(!probe.responds_to("load"));
    }

    #[test]
    fn shared_property_takes_new_value() {
        let mut probe = Probe::unbound();
        Stateful::bind(&mut probe, None, Some(table())).unwrap();

        probe.transition("busy").unwrap();
        assert_eq!(probe.get("mode"), Some(&json!("busy")));

        probe.transition("default").unwrap();
        assert_eq!(probe.get("mode"), Some(&json!("idle")));
    }

    #[test]
    fn invalid_state_strips_old_capabilities_and_keeps_current() {
        let mut probe = Probe::unbound();
        Stateful::bind(&mut probe, Some("busy"), Some(table())).unwrap();

        let result = probe.transition("sleeping");

        assert_eq!(result, Err(StatefulError::InvalidState("sleeping".into())));
        assert!(probe.is("busy"));
        assert!(probe.properties().is_empty());
    }

    #[test]
    fn exit_of_unknown_current_state_is_skipped() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut probe = Probe::unbound();
        probe.stateful.set_observer(move |event: &StateEvent| {
            sink.lock().unwrap().push(event.clone());
        });
        Stateful::bind(&mut probe, None, Some(table())).unwrap();
        probe.stateful.current = Some("ghost".into());
        events.lock().unwrap().clear();

        probe.transition("busy").unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                StateEvent::Enter("busy".into()),
                StateEvent::Entered("busy".into()),
                StateEvent::Change,
            ]
        );
        assert_eq!(probe.get("mode"), Some(&json!("busy")));
    }

    #[test]
    fn hook_error_aborts_transition() {
        let mut table = InterfaceTable::new();
        table.insert("a", Interface::new().value("x", 1));
        table.insert(
            "b",
            Interface::new()
                .value("y", 2)
                .on_enter(|_: &mut Probe| Err(StatefulError::Callback("refused".into()))),
        );

        let mut probe = Probe::unbound();
        Stateful::bind(&mut probe, Some("a"), Some(Arc::new(table))).unwrap();

        let result = probe.transition("b");

        assert_eq!(result, Err(StatefulError::Callback("refused".into())));
        assert!(probe.is("a"));
        assert!(probe.responds_to("y"));
        assert!(!probe.responds_to("x"));
    }

    #[test]
    fn observer_survives_bind_and_can_be_cleared() {
        let count = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&count);
        let mut probe = Probe {
            stateful: Stateful::with_observer(move |_: &StateEvent| {
                *counter.lock().unwrap() += 1;
            }),
            properties: Properties::new(),
            log: Vec::new(),
        };

        Stateful::bind(&mut probe, None, Some(table())).unwrap();
        assert_eq!(*count.lock().unwrap(), 3);

        probe.stateful.clear_observer();
        assert!(!probe.stateful.has_observer());
        probe.transition("busy").unwrap();
        assert_eq!(*count.lock().unwrap(), 3);
    }
}
