//! Lazy evaluation with memoization.
//!
//! This module provides [`Lazy<T>`], a value computed on first access and
//! cached afterwards. It is a memoized [`Function0`], so the exactly-once
//! guarantee of [`MemoSlot`] carries over: a supplier runs once even when
//! several threads force the value at the same time.
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Lazy;
//!
//! let lazy = Lazy::of(|| 6 * 7);
//! assert!(!lazy.is_evaluated());
//!
//! assert_eq!(lazy.get(), 42);
//! assert!(lazy.is_evaluated());
//!
//! // No recomputation: the cached value is returned.
//! assert_eq!(lazy.get(), 42);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::function::{Function0, MemoSlot};

/// A lazily evaluated, thread-safe value.
///
/// `get` returns a clone of the cached value; wrap large or identity-bearing
/// payloads in an [`Arc`] to share a single instance.
///
/// Cloning a `Lazy` shares its cache: forcing one clone forces them all.
///
/// A supplier that panics leaves the value unevaluated; the next `get` runs
/// the supplier again.
///
/// # Examples
///
/// ```rust
/// use funcore::control::Lazy;
/// use std::sync::Arc;
///
/// let shared = Lazy::of(|| Arc::new(vec![1, 2, 3]));
/// let first = shared.get();
/// let second = shared.get();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub struct Lazy<T> {
    supplier: Function0<T>,
    slot: Arc<MemoSlot<T>>,
}

impl<T: Clone + Send + 'static> Lazy<T> {
    /// Creates a lazy value. `supplier` is not called until [`get`](Self::get).
    pub fn of<F>(supplier: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::from_function(&Function0::of(supplier))
    }

    /// Creates a lazy value backed by `function`.
    pub fn from_function(function: &Function0<T>) -> Self {
        let source = function.clone();
        let (supplier, slot) = Function0::of(move || {
            tracing::debug!("evaluating lazy value");
            source.apply()
        })
        .memoized_in_slot();

        Self { supplier, slot }
    }

    /// Returns the value, evaluating the supplier on the first call.
    ///
    /// # Panics
    ///
    /// Propagates a panic from the supplier, and panics if the supplier
    /// forces this same value.
    #[inline]
    pub fn get(&self) -> T {
        self.supplier.apply()
    }

    /// Returns the value if it has already been evaluated, without evaluating it.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        self.slot.peek()
    }

    /// Returns `true` once a value has been cached.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.slot.is_filled()
    }

    /// Returns a lazy value applying `function` to this one's value.
    ///
    /// Neither value is evaluated until the result is forced.
    pub fn map<U, F>(&self, function: F) -> Lazy<U>
    where
        U: Clone + Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let source = self.clone();
        Lazy::of(move || function(source.get()))
    }

    /// Returns a lazy value that forces the lazy value `function` produces.
    pub fn flat_map<U, F>(&self, function: F) -> Lazy<U>
    where
        U: Clone + Send + 'static,
        F: Fn(T) -> Lazy<U> + Send + Sync + 'static,
    {
        let source = self.clone();
        Lazy::of(move || function(source.get()).get())
    }

    /// Returns a lazy pair of both values.
    pub fn zip<U>(&self, other: &Lazy<U>) -> Lazy<(T, U)>
    where
        U: Clone + Send + 'static,
    {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Returns a lazy value combining both values with `function`.
    pub fn zip_with<U, V, F>(&self, other: &Lazy<U>, function: F) -> Lazy<V>
    where
        U: Clone + Send + 'static,
        V: Clone + Send + 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Lazy::of(move || function(left.get(), right.get()))
    }

    /// Returns the memoized supplier behind this value.
    pub fn into_function(self) -> Function0<T> {
        self.supplier
    }

    /// Creates an already evaluated lazy value.
    pub fn value(value: T) -> Self {
        let slot = Arc::new(MemoSlot::filled(value));
        let filled = Arc::clone(&slot);
        let supplier = Function0::of(move || filled.get_or_init(unreachable_supplier)).memoized();

        Self { supplier, slot }
    }
}

fn unreachable_supplier<T>() -> T {
    unreachable!("supplier of an already evaluated lazy value")
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Self {
            supplier: self.supplier.clone(),
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: Default + Clone + Send + 'static> Default for Lazy<T> {
    fn default() -> Self {
        Self::of(T::default)
    }
}

impl<T: Clone + Send + 'static> From<Function0<T>> for Lazy<T> {
    fn from(function: Function0<T>) -> Self {
        Self::from_function(&function)
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.peek() {
            Some(value) => formatter.debug_tuple("Lazy").field(&value).finish(),
            None => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
        }
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.peek() {
            Some(value) => fmt::Display::fmt(&value, formatter),
            None => formatter.write_str("<uninit>"),
        }
    }
}

static_assertions::assert_impl_all!(Lazy<String>: Send, Sync, Clone);
