//! Lifting partial callables into total function values.
//!
//! A partial callable fails for some of its inputs. Lifting wraps exactly one
//! call of it in a boundary that turns a designated failure into
//! [`Maybe::Absent`] and a success into [`Maybe::Present`]. Failures that
//! are not designated keep propagating.
//!
//! Three boundaries are available on every `FunctionN`:
//!
//! | Constructor | Callable returns | Designated failure | Result type |
//! |---|---|---|---|
//! | `lift` | `Result<R, E>` | every `Err` | `Maybe<R>` |
//! | `lift_matching` | `Result<R, E>` | `Err(e)` where `designated(&e)` | `Result<Maybe<R>, E>` |
//! | `lift_unwind::<P, _>` | `R` | a panic with a `P` payload | `Maybe<R>` |
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::Maybe;
//! use funcore::function::Function2;
//!
//! fn divide(a: i32, b: i32) -> Result<i32, &'static str> {
//!     if b == 0 { Err("division by zero") } else { Ok(a / b) }
//! }
//!
//! let safe_divide = Function2::lift(divide);
//! assert_eq!(safe_divide.apply(4, 2), Maybe::Present(2));
//! assert_eq!(safe_divide.apply(1, 0), Maybe::Absent);
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::values::{Function0, Function1, Function2, Function3, Function4, Function5, Function6};
use crate::control::Maybe;

macro_rules! impl_lift {
    ($name:ident, ($($argument:ident : $ty:ident),*)) => {
        impl<$($ty: 'static,)* R: 'static> $name<$($ty,)* Maybe<R>> {
            /// Lifts a callable returning `Result`; every `Err` becomes `Absent`.
            pub fn lift<E, F>(function: F) -> Self
            where
                F: Fn($($ty),*) -> Result<R, E> + Send + Sync + 'static,
            {
                Self::of(move |$($argument: $ty),*| match function($($argument),*) {
                    Ok(value) => Maybe::Present(value),
                    Err(_) => {
                        tracing::trace!(function = stringify!($name), "lifted failure to Absent");
                        Maybe::Absent
                    }
                })
            }

            /// Lifts a callable that signals failure by panicking with a `P` payload
            /// (for example via [`std::panic::panic_any`]).
            ///
            /// Such a panic is caught and becomes `Absent`; a panic with any other
            /// payload resumes unwinding. The panic hook still runs for the
            /// caught panic.
            pub fn lift_unwind<P, F>(function: F) -> Self
            where
                P: Any,
                F: Fn($($ty),*) -> R + Send + Sync + 'static,
            {
                Self::of(move |$($argument: $ty),*| {
                    match panic::catch_unwind(AssertUnwindSafe(|| function($($argument),*))) {
                        Ok(value) => Maybe::Present(value),
                        Err(payload) if payload.is::<P>() => {
                            tracing::trace!(function = stringify!($name), "lifted panic to Absent");
                            Maybe::Absent
                        }
                        Err(payload) => panic::resume_unwind(payload),
                    }
                })
            }
        }

        impl<$($ty: 'static,)* R: 'static, E: 'static> $name<$($ty,)* Result<Maybe<R>, E>> {
            /// Lifts a callable returning `Result`, converting only the errors
            /// `designated` accepts into `Ok(Absent)`. Other errors are returned
            /// unchanged.
            pub fn lift_matching<F, P>(function: F, designated: P) -> Self
            where
                F: Fn($($ty),*) -> Result<R, E> + Send + Sync + 'static,
                P: Fn(&E) -> bool + Send + Sync + 'static,
            {
                Self::of(move |$($argument: $ty),*| match function($($argument),*) {
                    Ok(value) => Ok(Maybe::Present(value)),
                    Err(error) if designated(&error) => {
                        tracing::trace!(function = stringify!($name), "lifted designated failure to Absent");
                        Ok(Maybe::Absent)
                    }
                    Err(error) => Err(error),
                })
            }
        }

        impl<$($ty: 'static,)* R: 'static, E: 'static> $name<$($ty,)* Result<R, E>> {
            /// Returns the lifted form of this function: every `Err` becomes `Absent`.
            pub fn lifted(&self) -> $name<$($ty,)* Maybe<R>> {
                let function = self.clone();
                $name::of(move |$($argument: $ty),*| Maybe::of(function.apply($($argument),*).ok()))
            }
        }
    };
}

impl_lift!(Function0, ());
impl_lift!(Function1, (arg1: T1));
impl_lift!(Function2, (arg1: T1, arg2: T2));
impl_lift!(Function3, (arg1: T1, arg2: T2, arg3: T3));
impl_lift!(Function4, (arg1: T1, arg2: T2, arg3: T3, arg4: T4));
impl_lift!(Function5, (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5));
impl_lift!(Function6, (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5, arg6: T6));

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Rejection {
        Negative,
        Overflow,
    }

    fn checked_sum(a: i32, b: i32) -> Result<i32, Rejection> {
        if a < 0 || b < 0 {
            return Err(Rejection::Negative);
        }
        a.checked_add(b).ok_or(Rejection::Overflow)
    }

    #[rstest]
    #[case(1, 2, Maybe::Present(3))]
    #[case(-1, 2, Maybe::Absent)]
    #[case(i32::MAX, 1, Maybe::Absent)]
    fn lift_turns_errors_into_absent(#[case] a: i32, #[case] b: i32, #[case] expected: Maybe<i32>) {
        assert_eq!(Function2::lift(checked_sum).apply(a, b), expected);
    }

    #[rstest]
    fn lift_matching_only_converts_designated_errors() {
        let sum = Function2::lift_matching(checked_sum, |error| *error == Rejection::Negative);

        assert_eq!(sum.apply(1, 2), Ok(Maybe::Present(3)));
        assert_eq!(sum.apply(-1, 2), Ok(Maybe::Absent));
        assert_eq!(sum.apply(i32::MAX, 1), Err(Rejection::Overflow));
    }

    #[rstest]
    fn lifted_method_matches_lift() {
        let sum = Function2::of(checked_sum);
        assert_eq!(sum.lifted().apply(-5, 5), Maybe::Absent);
        assert_eq!(sum.lifted().apply(5, 5), Maybe::Present(10));
    }

    #[rstest]
    fn lift_unwind_catches_designated_payload() {
        struct InvalidInput;

        let positive = Function1::lift_unwind::<InvalidInput, _>(|x: i32| {
            if x <= 0 {
                panic::panic_any(InvalidInput);
            }
            x
        });

        assert_eq!(positive.apply(3), Maybe::Present(3));
        assert_eq!(positive.apply(0), Maybe::Absent);
    }

    #[rstest]
    fn lift_unwind_resumes_other_panics() {
        struct InvalidInput;

        let failing = Function0::lift_unwind::<InvalidInput, _>(|| -> i32 { panic!("unrelated") });
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| failing.apply()));
        assert!(outcome.is_err());
    }
}
