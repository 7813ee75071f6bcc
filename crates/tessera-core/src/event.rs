//! Engine event bus.
//!
//! A single-threaded observer bus: subscribers register a handler and are
//! called, in subscription order, for every published event.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tessera_core::event::EventBus;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut bus = EventBus::<u32>::new();
//! let counter = seen.clone();
//! bus.subscribe(move |value| counter.set(counter.get() + *value));
//!
//! bus.publish(&3);
//! bus.publish(&4);
//! assert_eq!(seen.get(), 7);
//! ```

use std::fmt;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

type Handler<E> = Box<dyn FnMut(&E)>;

pub struct EventBus<E> {
    subscribers: Vec<(SubscriptionId, Handler<E>)>,
    next_id: u64,
    published: usize,
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
            published: 0,
        }
    }

    /// Register a handler. Handlers are called in subscription order.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, event: &E) {
        self.published += 1;
        for (_, handler) in &mut self.subscribers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Total number of events published over the bus lifetime.
    pub fn published_count(&self) -> usize {
        self.published
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("published", &self.published)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::<&'static str>::new();

        let first = log.clone();
        bus.subscribe(move |e| first.borrow_mut().push(format!("a:{e}")));
        let second = log.clone();
        bus.subscribe(move |e| second.borrow_mut().push(format!("b:{e}")));

        bus.publish(&"x");
        assert_eq!(*log.borrow(), vec!["a:x", "b:x"]);
        assert_eq!(bus.published_count(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let hits = Rc::new(RefCell::new(0));
        let mut bus = EventBus::<()>::new();
        let counter = hits.clone();
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);

        bus.publish(&());
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(&());

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
