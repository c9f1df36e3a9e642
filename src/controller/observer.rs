//! Observers receive lifecycle events from a controller.

use crate::core::StateEvent;

/// Receiver of lifecycle events.
///
/// Notification is synchronous and fire-and-forget. Events are not queued;
/// a controller without an observer simply emits nothing.
///
/// Any `FnMut(&StateEvent) + Send` closure is an observer.
pub trait StateObserver: Send {
    fn notify(&mut self, event: &StateEvent);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateEvent) + Send,
{
    fn notify(&mut self, event: &StateEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &StateEvent| seen.push(event.name());
            observer.notify(&StateEvent::Enter("stop".into()));
            observer.notify(&StateEvent::Change);
        }
        assert_eq!(seen, vec!["state:enter", "state:change"]);
    }
}
