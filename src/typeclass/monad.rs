//! Monad type class - sequencing computations with dependency.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` lets the value produced by one step decide the next step,
/// and is also the place where a step may turn a present value into an
/// absent one.
///
/// # Examples
///
/// ```rust
/// use funcore::typeclass::Monad;
///
/// let parsed = Some("42").flat_map(|s| s.parse::<i32>().ok());
/// assert_eq!(parsed, Some(42));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a monadic value, then flattens.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the value of the first.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        // Delegate to Option's built-in and_then
        Self::and_then(self, function)
    }
}
