#![cfg(all(feature = "control", feature = "function"))]
//! Property-based tests for `Lazy<T>` laws.
//!
//! This module verifies that `Lazy` satisfies:
//!
//! - **Idempotence**: get() returns the same value every time
//! - **Laziness**: computation is deferred until get()
//! - **Memoization**: computation runs at most once
//! - **Functor Laws**: identity and composition
//! - **Monad Laws**: left identity, right identity, associativity

use funcore::control::Lazy;
use proptest::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Idempotence Law
// =============================================================================

proptest! {
    /// Idempotence: calling get() multiple times returns the same value
    #[test]
    fn prop_lazy_idempotence(value in any::<i32>()) {
        let lazy = Lazy::of(move || value);

        let first = lazy.get();
        let second = lazy.get();
        let third = lazy.get();

        prop_assert_eq!(first, second);
        prop_assert_eq!(second, third);
    }
}

proptest! {
    /// Idempotence for string values
    #[test]
    fn prop_lazy_idempotence_string(value in any::<String>()) {
        let lazy = Lazy::of(move || value.clone());

        let first = lazy.get();
        let second = lazy.get();

        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Memoization Law
// =============================================================================

proptest! {
    /// Memoization: the supplier is called at most once
    #[test]
    fn prop_lazy_memoization(value in any::<i32>(), forces in 1_usize..10) {
        let call_count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&call_count);
        let lazy = Lazy::of(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        // Before get, count is 0
        prop_assert_eq!(call_count.load(Ordering::SeqCst), 0);
        prop_assert!(!lazy.is_evaluated());

        for _ in 0..forces {
            prop_assert_eq!(lazy.get(), value);
        }
        prop_assert_eq!(call_count.load(Ordering::SeqCst), 1);
        prop_assert!(lazy.is_evaluated());
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: lazy.map(|x| x) == lazy
    #[test]
    fn prop_lazy_functor_identity(value in any::<i32>()) {
        let lazy = Lazy::of(move || value);
        let mapped = lazy.map(|x| x);

        prop_assert_eq!(lazy.get(), mapped.get());
    }
}

proptest! {
    /// Functor Composition Law: lazy.map(f).map(g) == lazy.map(|x| g(f(x)))
    #[test]
    fn prop_lazy_functor_composition(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let lazy = Lazy::of(move || value);

        let left = lazy.map(function1).map(function2);
        let right = lazy.map(move |x| function2(function1(x)));

        prop_assert_eq!(left.get(), right.get());
    }
}

proptest! {
    /// Functor composition with type changes
    #[test]
    fn prop_lazy_functor_composition_type_change(value in any::<i32>()) {
        let function1 = |n: i32| n.to_string();
        let function2 = |s: String| s.len();

        let lazy = Lazy::of(move || value);

        let left = lazy.map(function1).map(function2);
        let right = lazy.map(move |x| function2(function1(x)));

        prop_assert_eq!(left.get(), right.get());
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Monad Left Identity: Lazy::value(a).flat_map(f) == f(a)
    #[test]
    fn prop_lazy_monad_left_identity(value in any::<i32>()) {
        let function = |x: i32| Lazy::of(move || x.wrapping_mul(2));

        let left = Lazy::value(value).flat_map(function);
        let right = function(value);

        prop_assert_eq!(left.get(), right.get());
    }
}

proptest! {
    /// Monad Right Identity: lazy.flat_map(Lazy::value) == lazy
    #[test]
    fn prop_lazy_monad_right_identity(value in any::<i32>()) {
        let lazy = Lazy::of(move || value);
        let bound = lazy.flat_map(Lazy::value);

        prop_assert_eq!(bound.get(), lazy.get());
    }
}

proptest! {
    /// Monad Associativity
    #[test]
    fn prop_lazy_monad_associativity(value in any::<i32>()) {
        let function1 = |x: i32| Lazy::of(move || x.wrapping_add(3));
        let function2 = |x: i32| Lazy::of(move || x.wrapping_mul(5));

        let lazy = Lazy::of(move || value);
        let left = lazy.flat_map(function1).flat_map(function2);
        let right = lazy.flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left.get(), right.get());
    }
}
