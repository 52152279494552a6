//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) through which the
//! containers of this crate expose their structure generically:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior through [`TypeConstructor`], allowing traits like Functor and
//! Monad to be written once for both `Option` and
//! [`Maybe`](crate::control::Maybe).
//!
//! # Examples
//!
//! ```rust
//! use funcore::typeclass::{Applicative, Functor, Monad};
//!
//! let value: Option<i32> = <Option<()>>::pure(20);
//! let doubled = value.fmap(|n| n * 2);
//! let checked = doubled.flat_map(|n| if n > 0 { Some(n + 2) } else { None });
//! assert_eq!(checked, Some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
