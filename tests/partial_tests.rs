//! Unit tests for partial application of function values.
//!
//! `partialK` binds the first K arguments and returns a function value of the
//! remaining ones.

#![cfg(feature = "function")]

// =============================================================================
// 2-argument function tests
// =============================================================================

mod two_argument_functions {
    use funcore::function::Function2;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_partial_first_argument_fixed() {
        let add_five = Function2::of(add).partial1(5);
        assert_eq!(add_five.apply(3), 8);
        assert_eq!(add_five.apply(10), 15);
        assert_eq!(add_five.apply(-5), 0);
    }

    #[test]
    fn test_partial_second_argument_via_reversed() {
        let minus_three = Function2::of(subtract).reversed().partial1(3);
        assert_eq!(minus_three.apply(10), 7);
    }

    #[test]
    fn test_partial_all_arguments() {
        let thunk = Function2::of(subtract).partial2(10, 4);
        assert_eq!(thunk.arity(), 0);
        assert_eq!(thunk.apply(), 6);
    }
}

// =============================================================================
// Every prefix length up to arity 6
// =============================================================================

mod every_prefix {
    use funcore::function::Function6;
    use rstest::rstest;

    fn weighted(a: i64, b: i64, c: i64, d: i64, e: i64, f: i64) -> i64 {
        a + 2 * b + 3 * c + 4 * d + 5 * e + 6 * f
    }

    #[rstest]
    #[case([1, 2, 3, 4, 5, 6])]
    #[case([0, 0, 0, 0, 0, 0])]
    #[case([-7, 3, 9, -1, 2, 8])]
    fn test_partial_matches_full_application(#[case] args: [i64; 6]) {
        let function = Function6::of(weighted);
        let [a, b, c, d, e, f] = args;
        let expected = function.apply(a, b, c, d, e, f);

        assert_eq!(function.partial1(a).apply(b, c, d, e, f), expected);
        assert_eq!(function.partial2(a, b).apply(c, d, e, f), expected);
        assert_eq!(function.partial3(a, b, c).apply(d, e, f), expected);
        assert_eq!(function.partial4(a, b, c, d).apply(e, f), expected);
        assert_eq!(function.partial5(a, b, c, d, e).apply(f), expected);
        assert_eq!(function.partial6(a, b, c, d, e, f).apply(), expected);
    }

    #[rstest]
    fn test_partial_arities() {
        let function = Function6::of(weighted);
        assert_eq!(function.partial1(0).arity(), 5);
        assert_eq!(function.partial4(0, 0, 0, 0).arity(), 2);
        assert_eq!(function.partial6(0, 0, 0, 0, 0, 0).arity(), 0);
    }
}

// =============================================================================
// Captured values
// =============================================================================

mod captured_values {
    use funcore::function::{Function1, Function3};
    use std::sync::Arc;

    #[test]
    fn test_partial_clones_bound_value_per_call() {
        let consume = Function3::of(|mut items: Vec<i32>, extra: i32, more: i32| {
            items.push(extra);
            items.push(more);
            items
        });
        let prefilled = consume.partial1(vec![0]);

        assert_eq!(prefilled.apply(1, 2), vec![0, 1, 2]);
        assert_eq!(prefilled.apply(3, 4), vec![0, 3, 4]);
    }

    #[test]
    fn test_partial_can_bind_shared_handles() {
        let shared = Arc::new(String::from("shared"));
        let length = Function1::of(|text: Arc<String>| text.len()).partial1(Arc::clone(&shared));

        assert_eq!(length.apply(), 6);
        assert_eq!(Arc::strong_count(&shared), 2);
    }

    #[test]
    fn test_partial_is_send_across_threads() {
        let scale = Function3::of(|factor: i32, a: i32, b: i32| factor * (a + b)).partial1(10);
        let handle = std::thread::spawn(move || scale.apply(1, 2));

        assert_eq!(handle.join().unwrap(), 30);
    }
}
