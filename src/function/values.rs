//! Function values of arity 0 through 6.
//!
//! Every `FunctionN` wraps a thread-safe callable behind an [`Arc`], so
//! cloning is cheap and clones share the callable (and, once memoized, the
//! cache). The arity is part of the type: applying a `Function2` to three
//! arguments does not compile.

use std::sync::Arc;

use super::macros::{define_function, impl_memoized, impl_partial};
use super::memo::{MemoSlot, MemoStore};

define_function! {
    /// A deferred computation taking no arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::function::Function0;
    ///
    /// let answer = Function0::constant(42);
    /// assert_eq!(answer.apply(), 42);
    /// ```
    Function0, 0, ()
}

define_function! {
    /// A function value of one argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::function::Function1;
    ///
    /// let plus_one = Function1::of(|x: i32| x + 1);
    /// let times_two = Function1::of(|x: i32| x * 2);
    ///
    /// assert_eq!(plus_one.and_then(times_two.clone()).apply(2), 6);
    /// assert_eq!(plus_one.compose(times_two).apply(2), 5);
    /// ```
    Function1, 1, (arg1: T1)
}

define_function! {
    /// A function value of two arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::function::Function2;
    ///
    /// let sum = Function2::of(|a: i32, b: i32| a + b);
    /// let add_two = sum.partial1(2);
    ///
    /// assert_eq!(add_two.apply(3), 5);
    /// assert_eq!(sum.curried().apply(2).apply(4), 6);
    /// ```
    Function2, 2, (arg1: T1, arg2: T2)
}

define_function! {
    /// A function value of three arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::function::Function3;
    ///
    /// let volume = Function3::of(|a: u32, b: u32, c: u32| a * b * c);
    /// assert_eq!(volume.curried().apply(2).apply(3).apply(4), 24);
    /// ```
    Function3, 3, (arg1: T1, arg2: T2, arg3: T3)
}

define_function! {
    /// A function value of four arguments.
    Function4, 4, (arg1: T1, arg2: T2, arg3: T3, arg4: T4)
}

define_function! {
    /// A function value of five arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcore::function::Function5;
    ///
    /// let sum = Function5::of(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
    /// assert_eq!(sum.partial3(2, 3, 1).apply(4, 3), 13);
    /// ```
    Function5, 5, (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5)
}

define_function! {
    /// A function value of six arguments.
    Function6, 6, (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5, arg6: T6)
}

impl_memoized!(Function1, (arg1: T1));
impl_memoized!(Function2, (arg1: T1, arg2: T2));
impl_memoized!(Function3, (arg1: T1, arg2: T2, arg3: T3));
impl_memoized!(Function4, (arg1: T1, arg2: T2, arg3: T3, arg4: T4));
impl_memoized!(Function5, (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5));
impl_memoized!(Function6, (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5, arg6: T6));

impl_partial!(Function1<T1>, 1 (arg1: T1) -> Function0 ());

impl_partial!(Function2<T1, T2>, 1 (arg1: T1) -> Function1 (arg2: T2));
impl_partial!(Function2<T1, T2>, 2 (arg1: T1, arg2: T2) -> Function0 ());

impl_partial!(Function3<T1, T2, T3>, 1 (arg1: T1) -> Function2 (arg2: T2, arg3: T3));
impl_partial!(Function3<T1, T2, T3>, 2 (arg1: T1, arg2: T2) -> Function1 (arg3: T3));
impl_partial!(Function3<T1, T2, T3>, 3 (arg1: T1, arg2: T2, arg3: T3) -> Function0 ());

impl_partial!(Function4<T1, T2, T3, T4>, 1 (arg1: T1) -> Function3 (arg2: T2, arg3: T3, arg4: T4));
impl_partial!(Function4<T1, T2, T3, T4>, 2 (arg1: T1, arg2: T2) -> Function2 (arg3: T3, arg4: T4));
impl_partial!(Function4<T1, T2, T3, T4>, 3 (arg1: T1, arg2: T2, arg3: T3) -> Function1 (arg4: T4));
impl_partial!(Function4<T1, T2, T3, T4>, 4 (arg1: T1, arg2: T2, arg3: T3, arg4: T4) -> Function0 ());

impl_partial!(Function5<T1, T2, T3, T4, T5>, 1 (arg1: T1) -> Function4 (arg2: T2, arg3: T3, arg4: T4, arg5: T5));
impl_partial!(Function5<T1, T2, T3, T4, T5>, 2 (arg1: T1, arg2: T2) -> Function3 (arg3: T3, arg4: T4, arg5: T5));
impl_partial!(Function5<T1, T2, T3, T4, T5>, 3 (arg1: T1, arg2: T2, arg3: T3) -> Function2 (arg4: T4, arg5: T5));
impl_partial!(Function5<T1, T2, T3, T4, T5>, 4 (arg1: T1, arg2: T2, arg3: T3, arg4: T4) -> Function1 (arg5: T5));
impl_partial!(Function5<T1, T2, T3, T4, T5>, 5 (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5) -> Function0 ());

impl_partial!(Function6<T1, T2, T3, T4, T5, T6>, 1 (arg1: T1) -> Function5 (arg2: T2, arg3: T3, arg4: T4, arg5: T5, arg6: T6));
impl_partial!(Function6<T1, T2, T3, T4, T5, T6>, 2 (arg1: T1, arg2: T2) -> Function4 (arg3: T3, arg4: T4, arg5: T5, arg6: T6));
impl_partial!(Function6<T1, T2, T3, T4, T5, T6>, 3 (arg1: T1, arg2: T2, arg3: T3) -> Function3 (arg4: T4, arg5: T5, arg6: T6));
impl_partial!(Function6<T1, T2, T3, T4, T5, T6>, 4 (arg1: T1, arg2: T2, arg3: T3, arg4: T4) -> Function2 (arg5: T5, arg6: T6));
impl_partial!(Function6<T1, T2, T3, T4, T5, T6>, 5 (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5) -> Function1 (arg6: T6));
impl_partial!(Function6<T1, T2, T3, T4, T5, T6>, 6 (arg1: T1, arg2: T2, arg3: T3, arg4: T4, arg5: T5, arg6: T6) -> Function0 ());

// =============================================================================
// Function0
// =============================================================================

impl<R: Clone + Send + Sync + 'static> Function0<R> {
    /// Returns a supplier that always yields a clone of `value`.
    pub fn constant(value: R) -> Self {
        Self::of(move || value.clone())
    }
}

impl<R: Clone + Send + 'static> Function0<R> {
    /// Returns a supplier whose callable runs at most once.
    ///
    /// Every later call (from any clone, on any thread) returns the first
    /// result. A call that panics caches nothing.
    pub fn memoized(&self) -> Self {
        if self.is_memoized() {
            return self.clone();
        }
        self.memoized_in_slot().0
    }

    /// Memoizes into a fresh slot and hands the slot back so the caller can
    /// observe it without forcing.
    pub(crate) fn memoized_in_slot(&self) -> (Self, Arc<MemoSlot<R>>) {
        tracing::trace!(function = "Function0", "memoizing function value");

        let source = self.clone();
        let slot = Arc::new(MemoSlot::new());
        let store: Arc<dyn MemoStore> = slot.clone();
        let filling = Arc::clone(&slot);

        let memoized = Self {
            function: Arc::new(move || filling.get_or_init(|| source.apply())),
            memo: Some(store),
        };
        (memoized, slot)
    }
}

impl<T: Clone + Send + 'static, E: 'static> Function0<Result<T, E>> {
    /// Returns a supplier that caches its first `Ok` result.
    ///
    /// An `Err` leaves the supplier unevaluated.
    pub fn try_memoized(&self) -> Self {
        if self.is_memoized() {
            return self.clone();
        }
        tracing::trace!(function = "Function0", "memoizing fallible function value");

        let source = self.clone();
        let slot: Arc<MemoSlot<T>> = Arc::new(MemoSlot::new());
        let store: Arc<dyn MemoStore> = slot.clone();

        Self {
            function: Arc::new(move || slot.get_or_try_init(|| source.apply())),
            memo: Some(store),
        }
    }
}

// =============================================================================
// Function1
// =============================================================================

impl<T1: 'static> Function1<T1, T1> {
    /// Returns the function that returns its argument unchanged.
    pub fn identity() -> Self {
        Self::of(|value| value)
    }
}

impl<T1: 'static, R: 'static> Function1<T1, R> {
    /// Returns a function that runs `before` first and feeds its result into
    /// this function.
    ///
    /// `f.compose(g).apply(x) == f.apply(g.apply(x))`
    pub fn compose<Z: 'static>(&self, before: Function1<Z, T1>) -> Function1<Z, R> {
        before.and_then(self.clone())
    }
}

// =============================================================================
// Function2
// =============================================================================

impl<T1: 'static, T2: 'static, R: 'static> Function2<T1, T2, R> {
    /// Returns a function taking the two arguments in reverse order.
    pub fn reversed(&self) -> Function2<T2, T1, R> {
        let function = Arc::clone(&self.function);
        Function2::of(move |arg2: T2, arg1: T1| function(arg1, arg2))
    }
}

static_assertions::assert_impl_all!(Function0<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function2<String, i32, Vec<u8>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function6<u8, u8, u8, u8, u8, u8, u8>: Send, Sync, Clone);
// The callable is shared, never its arguments, so non-Send argument types are fine.
static_assertions::assert_impl_all!(Function1<std::rc::Rc<i32>, i32>: Send, Sync);
