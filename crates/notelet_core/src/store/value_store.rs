//! Reactive single-value store.
//!
//! # Responsibility
//! - Hold exactly one value of a fixed type and hand out read-only views.
//! - Replace the value atomically and notify observers synchronously.
//! - Track observers in an explicit subscription-id keyed map.
//!
//! # Invariants
//! - Observers are notified in registration order.
//! - The value is fully replaced before the first observer runs.
//! - Subscription ids are never reused within one store.
//!
//! # See also
//! - docs/architecture/state-layer.md

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Handle for one registered observer.
///
/// Ids are issued from a per-store monotonic counter, so the ordered observer
/// map doubles as the registration-order notification schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// Reactive container for one value of type `T`.
///
/// All access goes through one `&mut` owner, which keeps the store inside the
/// single-threaded cooperative model: notification is synchronous, and a
/// re-entrant `set`/`update` from inside an observer cannot be expressed.
/// Sharing a store across threads requires an external synchronization layer.
pub struct ValueStore<T> {
    value: T,
    observers: BTreeMap<SubscriptionId, Observer<T>>,
    next_subscription: u64,
}

impl<T> ValueStore<T> {
    /// Creates a store holding `initial` with no observers.
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            observers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Returns a read-only view of the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the current value and notifies every observer with the new
    /// value, in registration order.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify_all();
    }

    /// Derives the next value from a read-only view of the current one, then
    /// behaves like [`ValueStore::set`].
    ///
    /// `next` must not touch container state; it only maps the current value
    /// to its replacement.
    pub fn update(&mut self, next: impl FnOnce(&T) -> T) {
        let value = next(&self.value);
        self.set(value);
    }

    /// Registers `observer` and invokes it immediately with the current
    /// value.
    ///
    /// Returns the id to pass to [`ValueStore::unsubscribe`] once the caller
    /// loses interest.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        observer(&self.value);
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Removes the observer registered under `id`.
    ///
    /// Returns `true` when an observer was removed. Unknown or already
    /// removed ids are a no-op returning `false`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Returns the number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_all(&mut self) {
        let Self {
            value, observers, ..
        } = self;
        let value: &T = value;
        for observer in observers.values_mut() {
            observer(value);
        }
    }
}

impl<T: Default> Default for ValueStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug> Debug for ValueStore<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueStore")
            .field("value", &self.value)
            .field("observer_count", &self.observers.len())
            .finish()
    }
}
