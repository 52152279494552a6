//! Claim-once memoization cells.
//!
//! This module provides the synchronization behind memoized function values
//! and [`Lazy`](crate::control::Lazy):
//!
//! - [`MemoSlot`]: a single cell computed at most once per successful fill
//! - [`MemoCache`]: a map from argument tuples to [`MemoSlot`]s
//!
//! # Exactly-once filling
//!
//! A slot moves through three states:
//!
//! ```text
//! Vacant --claim--> Computing(owner) --publish--> Ready(value)
//!    ^                     |
//!    +------ release ------+   (initializer panicked or returned Err)
//! ```
//!
//! The first caller to find a slot `Vacant` claims it and runs the
//! initializer with no lock held. Every other caller blocks on a condition
//! variable until the owner publishes or releases the slot, then returns the
//! published value (or claims the slot itself after a release). Failures are
//! never cached.
//!
//! A [`MemoCache`] holds its map lock only while looking up or inserting the
//! slot for a key, so computations for distinct keys run in parallel.
//!
//! # Re-entry
//!
//! An initializer that calls back into the slot it is filling, on the same
//! thread, would wait for itself forever. This is detected and reported with
//! a panic instead.
//!
//! # Examples
//!
//! ```rust
//! use funcore::function::MemoCache;
//!
//! let cache: MemoCache<(i32, i32), i32> = MemoCache::new();
//! assert_eq!(cache.get_or_init((1, 2), || 3), 3);
//! // The initializer is not called again for the same key.
//! assert_eq!(cache.get_or_init((1, 2), || unreachable!()), 3);
//! ```

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Condvar, Mutex};

/// Hasher used by [`MemoCache`] unless another one is supplied.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`, with the
/// `ahash` feature `ahash::RandomState`, and otherwise the standard library's
/// `RandomState`.
#[cfg(feature = "fxhash")]
pub type MemoHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`MemoCache`] unless another one is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type MemoHasher = ahash::RandomState;

/// Hasher used by [`MemoCache`] unless another one is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type MemoHasher = std::collections::hash_map::RandomState;

/// Read-only view of a memoization store.
///
/// Function values keep their store behind this trait so they can report
/// cache occupancy without knowing its key and value types.
pub trait MemoStore: Send + Sync {
    /// Returns the number of filled entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entry has been filled yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

enum SlotState<V> {
    Vacant,
    Computing(ThreadId),
    Ready(V),
}

/// A cell that is filled at most once by a successful initializer.
///
/// # Examples
///
/// ```rust
/// use funcore::function::MemoSlot;
///
/// let slot = MemoSlot::new();
/// assert!(!slot.is_filled());
/// assert_eq!(slot.get_or_init(|| 42), 42);
/// assert!(slot.is_filled());
/// assert_eq!(slot.peek(), Some(42));
/// ```
pub struct MemoSlot<V> {
    state: Mutex<SlotState<V>>,
    published: Condvar,
}

impl<V> MemoSlot<V> {
    /// Creates an empty slot.
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SlotState::Vacant),
            published: Condvar::new(),
        }
    }

    /// Creates a slot that already holds `value`.
    #[inline]
    pub fn filled(value: V) -> Self {
        Self {
            state: Mutex::new(SlotState::Ready(value)),
            published: Condvar::new(),
        }
    }

    /// Returns `true` once a value has been published.
    #[inline]
    pub fn is_filled(&self) -> bool {
        matches!(&*self.state.lock(), SlotState::Ready(_))
    }

    fn release(&self) {
        *self.state.lock() = SlotState::Vacant;
        self.published.notify_all();
        tracing::trace!("memo slot released after failed initialization");
    }

    fn publish(&self, value: V) {
        *self.state.lock() = SlotState::Ready(value);
        self.published.notify_all();
        tracing::trace!("memo slot filled");
    }
}

impl<V: Clone> MemoSlot<V> {
    /// Returns a clone of the value if one has been published.
    ///
    /// Never runs an initializer and never waits for one.
    #[inline]
    pub fn peek(&self) -> Option<V> {
        match &*self.state.lock() {
            SlotState::Ready(value) => Some(value.clone()),
            SlotState::Vacant | SlotState::Computing(_) => None,
        }
    }

    /// Returns the published value, running `initializer` first if the slot
    /// is vacant.
    ///
    /// # Panics
    ///
    /// Propagates a panic from `initializer` (the slot is left vacant), and
    /// panics if `initializer` re-enters this slot on the same thread.
    pub fn get_or_init<F>(&self, initializer: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_init(|| Ok::<V, Infallible>(initializer())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns the published value, running `initializer` first if the slot
    /// is vacant. Only `Ok` results are published.
    ///
    /// # Errors
    ///
    /// Returns the initializer's error. The slot is left vacant, so the next
    /// caller runs its own initializer.
    ///
    /// # Panics
    ///
    /// Propagates a panic from `initializer` (the slot is left vacant), and
    /// panics if `initializer` re-enters this slot on the same thread.
    pub fn get_or_try_init<E, F>(&self, initializer: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let current = thread::current().id();
        let mut state = self.state.lock();

        loop {
            let owner = match &*state {
                SlotState::Ready(value) => return Ok(value.clone()),
                SlotState::Computing(owner) => *owner,
                SlotState::Vacant => break,
            };
            assert!(
                owner != current,
                "memoized computation re-entered itself on the same thread"
            );
            self.published.wait(&mut state);
        }

        *state = SlotState::Computing(current);
        drop(state);
        tracing::trace!("memo slot claimed");

        let claim = Claim { slot: self };
        let value = initializer()?;
        claim.complete(value.clone());
        Ok(value)
    }
}

impl<V> Default for MemoSlot<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Send> MemoStore for MemoSlot<V> {
    fn len(&self) -> usize {
        usize::from(self.is_filled())
    }
}

impl<V: fmt::Debug> fmt::Debug for MemoSlot<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.lock() {
            SlotState::Ready(value) => formatter.debug_tuple("MemoSlot").field(value).finish(),
            SlotState::Computing(_) => formatter.write_str("MemoSlot(<computing>)"),
            SlotState::Vacant => formatter.write_str("MemoSlot(<vacant>)"),
        }
    }
}

/// Ownership of a `Computing` slot.
///
/// Dropping an incomplete claim (initializer error or unwind) releases the
/// slot and wakes the waiters.
struct Claim<'a, V> {
    slot: &'a MemoSlot<V>,
}

impl<V> Claim<'_, V> {
    fn complete(self, value: V) {
        self.slot.publish(value);
        std::mem::forget(self);
    }
}

impl<V> Drop for Claim<'_, V> {
    fn drop(&mut self) {
        self.slot.release();
    }
}

/// A memoization table keyed by argument tuples.
///
/// Entries are never evicted; the table grows with the number of distinct
/// keys seen.
///
/// # Type Parameters
///
/// * `K` - The key type (the argument tuple of a memoized function)
/// * `V` - The cached result type
/// * `S` - The hasher builder (defaults to [`MemoHasher`])
pub struct MemoCache<K, V, S = MemoHasher> {
    slots: Mutex<HashMap<K, Arc<MemoSlot<V>>, S>>,
}

impl<K, V> MemoCache<K, V, MemoHasher> {
    /// Creates an empty cache using [`MemoHasher`].
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(MemoHasher::default())
    }
}

impl<K, V, S> MemoCache<K, V, S> {
    /// Creates an empty cache using `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            slots: Mutex::new(HashMap::with_hasher(hasher)),
        }
    }

    /// Creates an empty cache with room for `capacity` keys, using `hasher`.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: Mutex::new(HashMap::with_capacity_and_hasher(capacity, hasher)),
        }
    }

    /// Returns the number of filled entries.
    pub fn filled(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.is_filled())
            .count()
    }
}

impl<K, V, S> MemoCache<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn slot(&self, key: K) -> Arc<MemoSlot<V>> {
        let mut slots = self.slots.lock();
        Arc::clone(slots.entry(key).or_default())
    }

    /// Returns the cached value for `key`, if it has been computed.
    pub fn peek(&self, key: &K) -> Option<V> {
        let slot = self.slots.lock().get(key).map(Arc::clone);
        slot.and_then(|slot| slot.peek())
    }

    /// Returns the cached value for `key`, running `initializer` if no value
    /// has been computed yet.
    ///
    /// Concurrent callers with the same key wait for a single initializer.
    ///
    /// # Panics
    ///
    /// Propagates a panic from `initializer`, leaving the key uncached.
    pub fn get_or_init<F>(&self, key: K, initializer: F) -> V
    where
        F: FnOnce() -> V,
    {
        self.slot(key).get_or_init(initializer)
    }

    /// Like [`get_or_init`](Self::get_or_init), caching only `Ok` results.
    ///
    /// # Errors
    ///
    /// Returns the initializer's error; the key stays uncached.
    pub fn get_or_try_init<E, F>(&self, key: K, initializer: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.slot(key).get_or_try_init(initializer)
    }
}

impl<K, V> Default for MemoCache<K, V, MemoHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Send, V: Send, S: Send> MemoStore for MemoCache<K, V, S> {
    fn len(&self) -> usize {
        self.filled()
    }
}

impl<K, V, S> fmt::Debug for MemoCache<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("filled", &self.filled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn slot_runs_initializer_once() {
        let calls = AtomicUsize::new(0);
        let slot = MemoSlot::new();

        for _ in 0..3 {
            let value = slot.get_or_init(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                7
            });
            assert_eq!(value, 7);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn slot_does_not_cache_errors() {
        let slot: MemoSlot<i32> = MemoSlot::new();

        let failed: Result<i32, &str> = slot.get_or_try_init(|| Err("boom"));
        assert_eq!(failed, Err("boom"));
        assert!(!slot.is_filled());

        let recovered: Result<i32, &str> = slot.get_or_try_init(|| Ok(5));
        assert_eq!(recovered, Ok(5));
        assert!(slot.is_filled());
    }

    #[rstest]
    fn slot_is_vacant_after_panic() {
        let slot: MemoSlot<i32> = MemoSlot::new();

        let result = catch_unwind(AssertUnwindSafe(|| slot.get_or_init(|| panic!("boom"))));
        assert!(result.is_err());
        assert!(!slot.is_filled());
        assert_eq!(slot.get_or_init(|| 9), 9);
    }

    #[rstest]
    fn slot_reentry_panics() {
        let slot: MemoSlot<i32> = MemoSlot::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            slot.get_or_init(|| slot.get_or_init(|| 1) + 1)
        }));
        assert!(result.is_err());
        assert!(!slot.is_filled());
    }

    #[rstest]
    fn filled_slot_reports_value() {
        let slot = MemoSlot::filled("ready");
        assert_eq!(slot.peek(), Some("ready"));
        assert_eq!(MemoStore::len(&slot), 1);
        assert_eq!(format!("{slot:?}"), "MemoSlot(\"ready\")");
    }

    #[rstest]
    fn cache_keys_are_independent() {
        let cache: MemoCache<(i32,), i32> = MemoCache::new();

        assert_eq!(cache.get_or_init((1,), || 10), 10);
        assert_eq!(cache.get_or_init((2,), || 20), 20);
        assert_eq!(cache.get_or_init((1,), || 99), 10);
        assert_eq!(cache.filled(), 2);
        assert_eq!(cache.peek(&(2,)), Some(20));
        assert_eq!(cache.peek(&(3,)), None);
    }

    #[rstest]
    fn cache_failed_key_is_not_counted() {
        let cache: MemoCache<&str, i32> = MemoCache::new();

        let failed: Result<i32, ()> = cache.get_or_try_init("key", || Err(()));
        assert!(failed.is_err());
        assert_eq!(cache.filled(), 0);
        assert!(MemoStore::is_empty(&cache));
    }

    #[rstest]
    fn cache_with_custom_hasher() {
        let cache: MemoCache<u8, u8, std::collections::hash_map::RandomState> =
            MemoCache::with_capacity_and_hasher(4, std::collections::hash_map::RandomState::new());
        assert_eq!(cache.get_or_init(1, || 2), 2);
        assert_eq!(cache.filled(), 1);
    }
}
