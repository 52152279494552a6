//! Control structures for functional programming.
//!
//! This module provides:
//!
//! - [`Maybe`]: presence or absence of a value, with monadic combinators
//! - [`Lazy`]: lazy evaluation with thread-safe memoization (requires the
//!   `function` feature)
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use funcore::control::Maybe;
//!
//! let greeting = Maybe::some("foo").map(|value| value.to_uppercase());
//! assert_eq!(greeting.get().map(String::as_str), Ok("FOO"));
//!
//! let nothing: Maybe<i32> = Maybe::of(None);
//! assert!(nothing.is_empty());
//! ```
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! # #[cfg(feature = "function")]
//! # {
//! use funcore::control::Lazy;
//!
//! let lazy = Lazy::of(|| 2 + 2);
//! assert!(!lazy.is_evaluated());
//! assert_eq!(lazy.get(), 4);
//! assert!(lazy.is_evaluated());
//! # }
//! ```

#[cfg(feature = "function")]
mod lazy;
mod maybe;

#[cfg(feature = "function")]
pub use lazy::Lazy;
pub use maybe::{AccessError, Maybe};
