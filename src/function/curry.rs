//! Currying of function values.
//!
//! Currying turns a function of N arguments into a chain of N unary
//! functions. The result types nest: a `Function3<A, B, C, R>` curries into
//! `Function1<A, Function1<B, Function1<C, R>>>`.
//!
//! Each step is a [`partial1`](super::Function2::partial1) of the previous
//! one, so the arguments collected so far are captured by value and cloned
//! into the next step. Intermediate functions can be reused freely.
//!
//! # Examples
//!
//! ```rust
//! use funcore::function::{Curry, Function3};
//!
//! let sum = Function3::of(|a: i32, b: i32, c: i32| a + b + c);
//! let curried = sum.curried();
//!
//! let add_one = curried.apply(1);
//! assert_eq!(add_one.apply(2).apply(3), 6);
//! assert_eq!(add_one.apply(10).apply(20), 31);
//! ```

use super::values::{Function0, Function1, Function2, Function3, Function4, Function5, Function6};

/// Conversion of a function value into its curried form.
pub trait Curry {
    /// The chain of unary functions produced by currying.
    type Curried;

    /// Returns the curried form of this function.
    ///
    /// Applying the chain to every argument gives the same result as applying
    /// the original function to all of them at once.
    fn curried(&self) -> Self::Curried;
}

impl<R: 'static> Curry for Function0<R> {
    type Curried = Self;

    fn curried(&self) -> Self::Curried {
        self.clone()
    }
}

impl<T1: 'static, R: 'static> Curry for Function1<T1, R> {
    type Curried = Self;

    fn curried(&self) -> Self::Curried {
        self.clone()
    }
}

macro_rules! impl_curry {
    ($name:ident <$head:ident, $($tail:ident),+> => $rest:ident) => {
        impl<$head, $($tail,)+ R> Curry for $name<$head, $($tail,)+ R>
        where
            $head: Clone + Send + Sync + 'static,
            $($tail: 'static,)+
            R: 'static,
            $rest<$($tail,)+ R>: Curry,
            <$rest<$($tail,)+ R> as Curry>::Curried: 'static,
        {
            type Curried = Function1<$head, <$rest<$($tail,)+ R> as Curry>::Curried>;

            fn curried(&self) -> Self::Curried {
                let function = self.clone();
                Function1::of(move |head: $head| Curry::curried(&function.partial1(head)))
            }
        }
    };
}

impl_curry!(Function2<T1, T2> => Function1);
impl_curry!(Function3<T1, T2, T3> => Function2);
impl_curry!(Function4<T1, T2, T3, T4> => Function3);
impl_curry!(Function5<T1, T2, T3, T4, T5> => Function4);
impl_curry!(Function6<T1, T2, T3, T4, T5, T6> => Function5);
