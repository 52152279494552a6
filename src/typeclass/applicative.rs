//! Applicative type class - lifting values and combining containers.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(a).map2(fb, |_, b| b) == fb
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```

use super::functor::Functor;

/// A type class for functors that can lift plain values and combine
/// independent computations.
///
/// # Examples
///
/// ```rust
/// use funcore::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let sum = Some(1).map2(Some(2), |x, y| x + y);
/// assert_eq!(sum, Some(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values with a binary function.
    ///
    /// The result is present only if both inputs are present.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two applicatives.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}
