use parking_lot::Mutex;
use std::sync::Arc;
use tessera_core::event::{EventBus, SubscriptionId};

/// Collects clones of every event it is subscribed to.
///
/// Clones of a recorder share the same log.
#[derive(Debug)]
pub struct Recorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone + 'static> Recorder<E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe to `bus`, returning the subscription for later removal.
    pub fn attach(&self, bus: &mut EventBus<E>) -> SubscriptionId {
        bus.subscribe(self.sink())
    }

    /// A handler that appends to this recorder's log.
    pub fn sink(&self) -> impl FnMut(&E) + 'static {
        let events = Arc::clone(&self.events);
        move |event: &E| events.lock().push(event.clone())
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events.
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<E: Clone + 'static> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Recorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_empties_log() {
        let recorder = Recorder::<&'static str>::new();
        let mut bus = EventBus::new();
        recorder.attach(&mut bus);

        bus.publish(&"a");
        bus.publish(&"b");
        assert_eq!(recorder.take(), vec!["a", "b"]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_clones_share_log() {
        let recorder = Recorder::<u8>::new();
        let other = recorder.clone();
        let mut bus = EventBus::new();
        other.attach(&mut bus);

        bus.publish(&1);
        assert_eq!(recorder.len(), 1);
    }
}
