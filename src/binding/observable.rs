//! Observable property container.

use std::fmt;

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A property container that notifies subscribers when its value changes.
///
/// `set` compares the new value against the current one and only notifies
/// when they differ, so a subscriber fires exactly once per actual change.
pub struct Observable<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T: PartialEq> Observable<T> {
    /// Create an observable holding `value`, with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value, notifying subscribers when it changed.
    ///
    /// Returns `true` when the value differed and subscribers were notified.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for subscriber in &self.subscribers {
            subscriber(&self.value);
        }
        true
    }

    /// Register a callback invoked with the new value after each change.
    pub fn subscribe(&mut self, subscriber: impl Fn(&T) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
