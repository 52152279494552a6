//! Unit tests for currying of function values.
//!
//! Tests for converting multi-argument function values to chains of unary
//! function values.

#![cfg(feature = "function")]

// =============================================================================
// Function2 (2-argument functions)
// =============================================================================

mod binary_tests {
    use funcore::function::{Curry, Function1, Function2};

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    #[test]
    fn test_curried_basic() {
        let curried_add = Function2::of(add).curried();
        assert_eq!(curried_add.apply(5).apply(3), 8);
    }

    #[test]
    fn test_curried_partial_application() {
        let curried_add = Function2::of(add).curried();
        let add_five = curried_add.apply(5);

        assert_eq!(add_five.apply(3), 8);
        assert_eq!(add_five.apply(10), 15);
        assert_eq!(add_five.apply(-5), 0);
    }

    #[test]
    fn test_curried_with_floats() {
        let curried_divide = Function2::of(divide).curried();
        let divide_ten_by = curried_divide.apply(10.0);

        assert!((divide_ten_by.apply(2.0) - 5.0).abs() < f64::EPSILON);
        assert!((divide_ten_by.apply(5.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_curried_through_trait() {
        fn curry_it<F: Curry>(function: &F) -> F::Curried {
            function.curried()
        }

        let curried: Function1<i32, Function1<i32, i32>> = curry_it(&Function2::of(add));
        assert_eq!(curried.apply(1).apply(1), 2);
    }
}

// =============================================================================
// Function3 (3-argument functions)
// =============================================================================

mod ternary_tests {
    use funcore::function::Function3;

    fn join(first: String, second: String, third: String) -> String {
        format!("{first}{second}{third}")
    }

    #[test]
    fn test_curried_sum() {
        let sum = Function3::of(|a: i32, b: i32, c: i32| a + b + c);
        let add2 = sum.curried().apply(2);

        assert_eq!(add2.apply(4).apply(3), 9);
    }

    #[test]
    fn test_curried_with_owned_strings() {
        let curried = Function3::of(join).curried();
        let prefixed = curried.apply("<".to_string());

        assert_eq!(prefixed.apply("a".to_string()).apply(">".to_string()), "<a>");
        assert_eq!(prefixed.apply("b".to_string()).apply("]".to_string()), "<b]");
    }
}

// =============================================================================
// Function4 .. Function6
// =============================================================================

mod higher_arity_tests {
    use funcore::function::{Function4, Function5, Function6};

    #[test]
    fn test_curried_four() {
        let polynomial = Function4::of(|a: i64, b: i64, c: i64, x: i64| a * x * x + b * x + c);
        let curried = polynomial.curried();

        assert_eq!(curried.apply(1).apply(2).apply(3).apply(2), polynomial.apply(1, 2, 3, 2));
    }

    #[test]
    fn test_curried_five() {
        let sum = Function5::of(|a: u8, b: u8, c: u8, d: u8, e: u8| a + b + c + d + e);
        assert_eq!(sum.curried().apply(1).apply(2).apply(3).apply(4).apply(5), 15);
    }

    #[test]
    fn test_curried_six() {
        let sum = Function6::of(|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| a + b + c + d + e + f);
        let curried = sum.curried();
        let first_three = curried.apply(1).apply(2).apply(3);

        assert_eq!(first_three.apply(4).apply(5).apply(6), 21);
        assert_eq!(first_three.apply(0).apply(0).apply(0), 6);
    }
}
