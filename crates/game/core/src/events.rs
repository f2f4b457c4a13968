//! Synchronous observer signals.
//!
//! A [`Signal`] is the explicit form of an engine event delegate: components
//! expose one per notification, observers register closures, and `emit`
//! delivers to every live handler on the calling thread in subscription
//! order. There is no queueing — by the time `emit` returns, every observer
//! has run. Dropping the owning component drops all handlers, so observers
//! can never dangle past the publisher.

use core::fmt;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Single-threaded publish/subscribe channel with synchronous delivery.
pub struct Signal<E> {
    next_id: u64,
    handlers: Vec<(u64, Box<dyn FnMut(&E)>)>,
}

impl<E> Signal<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    /// Registers a handler; it will be invoked on every subsequent `emit`
    /// until unsubscribed or the signal is dropped.
    pub fn subscribe(&mut self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        Subscription(id)
    }

    /// Removes a previously registered handler. Returns false if the
    /// subscription was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(id, _)| *id != subscription.0);
        self.handlers.len() != before
    }

    /// Delivers `event` to every handler, in subscription order.
    pub fn emit(&mut self, event: &E) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
