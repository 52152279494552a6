//! # funcore
//!
//! A small functional core for Rust: first-class function values, a
//! null-safe optional container and lazily evaluated values.
//!
//! ## Overview
//!
//! - **Function Values**: `Function0` .. `Function6` with composition,
//!   currying, partial application, memoization and lifting
//! - **Optional Container**: `Maybe`, presence or absence of a value
//! - **Lazy Values**: `Lazy`, evaluated at most once, safe to share between threads
//! - **Type Classes**: Functor, Applicative, Monad over an emulated
//!   higher-kinded type
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, plus `Lazy` when `function` is enabled
//! - `function`: Function values and memoization primitives
//! - `serde`: Serialization of `Maybe`
//! - `fxhash` / `ahash`: Faster hashers for memoization caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcore::prelude::*;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, &'static str> {
//!     if b == 0 { Err("division by zero") } else { Ok(a / b) }
//! }
//!
//! let safe_divide = Function2::lift(divide);
//! assert_eq!(safe_divide.apply(4, 2), Maybe::Present(2));
//! assert_eq!(safe_divide.apply(1, 0), Maybe::Absent);
//!
//! let sum = Function2::of(|a: i32, b: i32| a + b);
//! assert_eq!(sum.curried().apply(2).apply(4), 6);
//!
//! let lazy = Lazy::of(move || sum.apply(20, 22));
//! assert_eq!(lazy.get(), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funcore::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "function")]
pub mod function;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
