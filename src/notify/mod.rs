//! Display publication for external observers.
//!
//! Publication is explicit and framework-free: observers register callbacks
//! on a [`DisplayHub`] and receive the display string after every processed
//! press. A UI toolkit's own reactive property can wrap a subscription.

/// A registered display observer.
pub type DisplayListener = Box<dyn Fn(&str) + Send + Sync>;

/// Fan-out point for display updates.
///
/// Subscribers are invoked synchronously, in registration order, after each
/// press has been fully processed, so an observer never sees a partial
/// update.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use tally::notify::DisplayHub;
///
/// let mut hub = DisplayHub::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// hub.subscribe(move |display| sink.lock().unwrap().push(display.to_string()));
///
/// hub.publish("42");
/// assert_eq!(seen.lock().unwrap().as_slice(), ["42"]);
/// ```
#[derive(Default)]
pub struct DisplayHub {
    listeners: Vec<DisplayListener>,
}

impl DisplayHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a display listener.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Publish a display value to every subscriber.
    pub fn publish(&self, display: &str) {
        for listener in &self.listeners {
            listener(display);
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for DisplayHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayHub")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn publish_with_no_subscribers_is_a_no_op() {
        let hub = DisplayHub::new();
        hub.publish("0");
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn every_subscriber_sees_every_publication() {
        let mut hub = DisplayHub::new();
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&first);
        hub.subscribe(move |d| sink.lock().unwrap().push(d.to_string()));
        let sink = Arc::clone(&second);
        hub.subscribe(move |d| sink.lock().unwrap().push(d.to_string()));

        hub.publish("7");
        hub.publish("10");

        assert_eq!(first.lock().unwrap().as_slice(), ["7", "10"]);
        assert_eq!(second.lock().unwrap().as_slice(), ["7", "10"]);
    }

    #[test]
    fn subscribers_are_invoked_in_registration_order() {
        let mut hub = DisplayHub::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&order);
        hub.subscribe(move |_| sink.lock().unwrap().push("first"));
        let sink = Arc::clone(&order);
        hub.subscribe(move |_| sink.lock().unwrap().push("second"));

        hub.publish("0");
        assert_eq!(order.lock().unwrap().as_slice(), ["first", "second"]);
    }
}
