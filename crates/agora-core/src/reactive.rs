//! Poll-based reactive primitive for view-state observation
//!
//! [`Dynamic<T>`] wraps a value and hands out versioned subscriptions.
//! Frontends poll their [`Subscription`] on their own cadence instead of
//! receiving pushes, which keeps this module free of any async runtime:
//! only std primitives (`RwLock`, `AtomicU64`) are used.

// RwLock poisoning only happens after a panic and is unrecoverable here,
// so expect() is the appropriate handling.
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

struct Shared<T> {
    value: RwLock<T>,
    /// Incremented on every `set`/`update` so subscribers can detect change.
    version: AtomicU64,
}

/// A shared observable value
///
/// Cloning a `Dynamic` clones the handle, not the value; all clones see the
/// same state. Reads clone the inner value, so view-state types should stay
/// cheap to clone.
#[derive(Clone)]
pub struct Dynamic<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Clone + Send + Sync + 'static> Dynamic<T> {
    /// Create a new observable with the given initial value.
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(value),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.shared
            .value
            .read()
            .expect("Dynamic lock poisoned")
            .clone()
    }

    /// Replace the value and bump the version.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.shared.value.write().expect("Dynamic lock poisoned");
            *guard = value;
        }
        self.shared.version.fetch_add(1, Ordering::Release);
    }

    /// Mutate the value in place and bump the version.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut guard = self.shared.value.write().expect("Dynamic lock poisoned");
            f(&mut guard);
        }
        self.shared.version.fetch_add(1, Ordering::Release);
    }

    /// Current version; incremented on every mutation.
    pub fn version(&self) -> u64 {
        self.shared.version.load(Ordering::Acquire)
    }

    /// Subscribe to future changes.
    ///
    /// The subscription starts caught-up: it only reports values written
    /// after this call.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            shared: self.shared.clone(),
            seen: self.shared.version.load(Ordering::Acquire),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for Dynamic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A polling subscription to a [`Dynamic`]
pub struct Subscription<T> {
    shared: Arc<Shared<T>>,
    seen: u64,
}

impl<T: Clone + Send + Sync + 'static> Subscription<T> {
    /// Return the current value if it changed since the last poll.
    pub fn poll(&mut self) -> Option<T> {
        let current = self.shared.version.load(Ordering::Acquire);
        if current == self.seen {
            return None;
        }
        self.seen = current;
        Some(
            self.shared
                .value
                .read()
                .expect("Dynamic lock poisoned")
                .clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_sees_only_new_values() {
        let d = Dynamic::new(0);
        let mut sub = d.subscribe();
        assert_eq!(sub.poll(), None);

        d.set(7);
        assert_eq!(sub.poll(), Some(7));
        assert_eq!(sub.poll(), None);
    }

    #[test]
    fn update_mutates_in_place() {
        let d = Dynamic::new(vec![1, 2]);
        d.update(|v| v.push(3));
        assert_eq!(d.get(), vec![1, 2, 3]);
        assert_eq!(d.version(), 1);
    }

    #[test]
    fn intermediate_writes_coalesce() {
        let d = Dynamic::new(0);
        let mut sub = d.subscribe();
        d.set(1);
        d.set(2);
        // A slow poller sees only the latest value.
        assert_eq!(sub.poll(), Some(2));
        assert_eq!(sub.poll(), None);
    }

    #[test]
    fn clones_share_state() {
        let a = Dynamic::new(String::new());
        let b = a.clone();
        a.set("hello".to_string());
        assert_eq!(b.get(), "hello");
    }
}
