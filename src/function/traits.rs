//! The arity-independent view of function values.

/// Operations shared by every `FunctionN`.
///
/// Lets generic code accept a function value of any arity, passing the
/// arguments as one tuple.
///
/// # Examples
///
/// ```rust
/// use funcore::function::{Function0, Function2, FunctionValue};
///
/// fn run<F: FunctionValue>(function: &F, arguments: F::Arguments) -> F::Output {
///     function.invoke(arguments)
/// }
///
/// assert_eq!(run(&Function2::of(|a: i32, b: i32| a * b), (6, 7)), 42);
/// assert_eq!(run(&Function0::constant("hi"), ()), "hi");
/// ```
pub trait FunctionValue: Clone + Send + Sync {
    /// The argument tuple (`()` for arity 0, `(A,)` for arity 1, ...).
    type Arguments;

    /// The result type.
    type Output;

    /// Number of arguments.
    const ARITY: usize;

    /// Applies the function to a tuple of arguments.
    fn invoke(&self, arguments: Self::Arguments) -> Self::Output;

    /// Returns `true` if results are cached.
    fn is_memoized(&self) -> bool;
}

/// Applies `function` to each argument tuple in order, collecting the results.
pub fn invoke_all<F, I>(function: &F, arguments: I) -> Vec<F::Output>
where
    F: FunctionValue,
    I: IntoIterator<Item = F::Arguments>,
{
    arguments
        .into_iter()
        .map(|arguments| function.invoke(arguments))
        .collect()
}
