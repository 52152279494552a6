//! First-class function values.
//!
//! This module provides thread-safe, cheaply clonable wrappers around
//! callables of a fixed arity, from [`Function0`] (a supplier) to
//! [`Function6`]:
//!
//! - **Application**: `apply`, `apply_tuple`, `tupled`
//! - **Composition**: `and_then`, [`Function1::compose`]
//! - **Currying**: [`Curry`], turning `FunctionN` into nested [`Function1`]s
//! - **Partial application**: `partial1` .. `partialN`, binding a prefix of
//!   the arguments
//! - **Memoization**: `memoized` / `try_memoized`, backed by [`MemoCache`] and
//!   [`MemoSlot`]
//! - **Lifting**: `lift`, `lift_matching`, `lift_unwind`, turning partial
//!   callables into total ones returning [`Maybe`](crate::control::Maybe)
//!
//! # Examples
//!
//! ```rust
//! use funcore::function::{Function1, Function2, Function5};
//!
//! let sum = Function2::of(|a: i32, b: i32| a + b);
//! assert_eq!(sum.apply(1, 2), 3);
//! assert_eq!(sum.curried().apply(2).apply(4), 6);
//!
//! let plus_one = Function1::of(|x: i32| x + 1);
//! let times_two = Function1::of(|x: i32| x * 2);
//! assert_eq!(plus_one.and_then(times_two).apply(2), 6);
//!
//! let sum5 = Function5::of(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
//! assert_eq!(sum5.partial3(2, 3, 1).apply(4, 3), 13);
//! ```
//!
//! # Memoization
//!
//! ```rust
//! use funcore::function::Function1;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let slow_square = Function1::of(move |x: u64| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     x * x
//! })
//! .memoized();
//!
//! assert_eq!(slow_square.apply(12), 144);
//! assert_eq!(slow_square.apply(12), 144);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

mod curry;
mod lift;
mod macros;
mod memo;
mod traits;
mod values;

pub use curry::Curry;
pub use memo::{MemoCache, MemoHasher, MemoSlot, MemoStore};
pub use traits::{FunctionValue, invoke_all};
pub use values::{Function0, Function1, Function2, Function3, Function4, Function5, Function6};
