//! Lifecycle notifications emitted around each transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lifecycle event.
///
/// A transition from `A` to `B` emits, in order: `Exit(A)`, `Exited(A)`,
/// `Enter(B)`, `Entered(B)`, `Change`. The very first transition has no
/// exit phase.
///
/// Serializes as `{"event": "state:exit", "state": "stop"}`; `Change`
/// carries no state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "state")]
pub enum StateEvent {
    /// The current state is about to be exited
    #[serde(rename = "state:exit")]
    Exit(String),

    /// The current state's capabilities have been removed
    #[serde(rename = "state:exited")]
    Exited(String),

    /// A state is about to be entered
    #[serde(rename = "state:enter")]
    Enter(String),

    /// A state's capabilities are installed and it is now current
    #[serde(rename = "state:entered")]
    Entered(String),

    /// A transition finished
    #[serde(rename = "state:change")]
    Change,
}

impl StateEvent {
    /// The event's wire name, e.g. `state:exit`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exit(_) => "state:exit",
            Self::Exited(_) => "state:exited",
            Self::Enter(_) => "state:enter",
            Self::Entered(_) => "state:entered",
            Self::Change => "state:change",
        }
    }

    /// The state the event refers to. `None` for `Change`.
    pub fn state(&self) -> Option<&str> {
        match self {
            Self::Exit(state) | Self::Exited(state) | Self::Enter(state) | Self::Entered(state) => {
                Some(state.as_str())
            }
            Self::Change => None,
        }
    }
}

impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state() {
            Some(state) => write!(f, "{}({})", self.name(), state),
            None => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_match_wire_format() {
        assert_eq!(StateEvent::Exit("a".into()).name(), "state:exit");
        assert_eq!(StateEvent::Exited("a".into()).name(), "state:exited");
        assert_eq!(StateEvent::Enter("a".into()).name(), "state:enter");
        assert_eq!(StateEvent::Entered("a".into()).name(), "state:entered");
        assert_eq!(StateEvent::Change.name(), "state:change");
    }

    #[test]
    fn change_has_no_state() {
        assert_eq!(StateEvent::Change.state(), None);
        assert_eq!(StateEvent::Entered("go".into()).state(), Some("go"));
    }

    #[test]
    fn display_includes_state() {
        assert_eq!(StateEvent::Exit("stop".into()).to_string(), "state:exit(stop)");
        assert_eq!(StateEvent::Change.to_string(), "state:change");
    }

    #[test]
    fn serializes_with_wire_name() {
        let value = serde_json::to_value(StateEvent::Enter("go".into())).unwrap();
        assert_eq!(value, json!({"event": "state:enter", "state": "go"}));

        let value = serde_json::to_value(StateEvent::Change).unwrap();
        assert_eq!(value, json!({"event": "state:change"}));
    }

    #[test]
    fn deserializes_from_wire_name() {
        let event: StateEvent =
            serde_json::from_value(json!({"event": "state:exited", "state": "stop"})).unwrap();
        assert_eq!(event, StateEvent::Exited("stop".into()));
    }
}
