//! Functor type class - mapping over container values.
//!
//! A `Functor` lets a function transform the contents of a container
//! without changing its shape: an absent value stays absent, a present value
//! stays present.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcore::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can be mapped over.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference to the value inside the functor.
    ///
    /// The original functor is left untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::typeclass::Functor;
    ///
    /// // `Option` has an inherent `replace`, so call the trait method explicitly.
    /// assert_eq!(Functor::replace(Some(1), "done"), Some("done"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
