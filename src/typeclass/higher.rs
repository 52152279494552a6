//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` as a type constructor directly.
//! [`TypeConstructor`] recovers that ability with a GAT: a type names the
//! value it is currently applied to (`Inner`) and how to re-apply the same
//! constructor to another type (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use funcore::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = reset(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[rstest]
    fn option_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Option<String> = transform(Some(42));
        assert_eq!(result, None);
    }
}
