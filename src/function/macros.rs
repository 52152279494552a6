//! Generators for the arity-specific function value types.
//!
//! Each `FunctionN` shares the same shape (an `Arc`'d callable plus an
//! optional memo store), so the type, its core combinators and the
//! [`FunctionValue`](super::FunctionValue) instance are generated here once
//! and instantiated per arity in `values.rs`. Methods whose signatures change
//! with the arity in ways `macro_rules!` cannot derive (partial application,
//! currying) get their own generators.

/// Defines `FunctionN` with its constructor, application, composition and
/// introspection methods.
macro_rules! define_function {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal, ($($argument:ident : $ty:ident),*)
    ) => {
        $(#[$meta])*
        pub struct $name<$($ty,)* R> {
            function: ::std::sync::Arc<dyn Fn($($ty),*) -> R + Send + Sync>,
            memo: Option<::std::sync::Arc<dyn $crate::function::MemoStore>>,
        }

        impl<$($ty: 'static,)* R: 'static> $name<$($ty,)* R> {
            /// Wraps a callable. Nothing is evaluated until the value is applied.
            #[inline]
            pub fn of<Callable>(function: Callable) -> Self
            where
                Callable: Fn($($ty),*) -> R + Send + Sync + 'static,
            {
                Self {
                    function: ::std::sync::Arc::new(function),
                    memo: None,
                }
            }

            /// Invokes the wrapped callable.
            ///
            /// A panic raised by the callable propagates unchanged.
            #[inline]
            pub fn apply(&self, $($argument: $ty),*) -> R {
                (self.function)($($argument),*)
            }

            /// Invokes the wrapped callable with its arguments packed in a tuple.
            #[inline]
            pub fn apply_tuple(&self, ($($argument,)*): ($($ty,)*)) -> R {
                (self.function)($($argument),*)
            }

            /// Returns the number of arguments this function takes.
            #[inline]
            pub const fn arity(&self) -> usize {
                $arity
            }

            /// Returns `true` if results are cached by argument tuple.
            #[inline]
            pub fn is_memoized(&self) -> bool {
                self.memo.is_some()
            }

            /// Returns the number of cached results (always 0 when not memoized).
            #[inline]
            pub fn cached_results(&self) -> usize {
                self.memo.as_ref().map_or(0, |memo| memo.len())
            }

            /// Returns a function that feeds this function's result into `after`.
            ///
            /// `f.and_then(g).apply(..) == g.apply(f.apply(..))`
            pub fn and_then<V: 'static>(
                &self,
                after: $crate::function::Function1<R, V>,
            ) -> $name<$($ty,)* V> {
                let function = ::std::sync::Arc::clone(&self.function);
                $name::of(move |$($argument: $ty),*| after.apply(function($($argument),*)))
            }

            /// Returns a unary function taking all arguments as one tuple.
            pub fn tupled(&self) -> $crate::function::Function1<($($ty,)*), R> {
                let function = ::std::sync::Arc::clone(&self.function);
                $crate::function::Function1::of(move |($($argument,)*): ($($ty,)*)| {
                    function($($argument),*)
                })
            }

            /// Returns the curried form of this function.
            ///
            /// See [`Curry`]($crate::function::Curry).
            #[inline]
            pub fn curried(&self) -> <Self as $crate::function::Curry>::Curried
            where
                Self: $crate::function::Curry,
            {
                $crate::function::Curry::curried(self)
            }
        }

        impl<$($ty,)* R> Clone for $name<$($ty,)* R> {
            fn clone(&self) -> Self {
                Self {
                    function: ::std::sync::Arc::clone(&self.function),
                    memo: self.memo.clone(),
                }
            }
        }

        impl<$($ty,)* R> ::std::fmt::Debug for $name<$($ty,)* R> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("arity", &$arity)
                    .field("memoized", &self.memo.is_some())
                    .finish_non_exhaustive()
            }
        }

        impl<$($ty: 'static,)* R: 'static> $crate::function::FunctionValue for $name<$($ty,)* R> {
            type Arguments = ($($ty,)*);
            type Output = R;

            const ARITY: usize = $arity;

            #[inline]
            fn invoke(&self, arguments: Self::Arguments) -> R {
                self.apply_tuple(arguments)
            }

            #[inline]
            fn is_memoized(&self) -> bool {
                self.memo.is_some()
            }
        }
    };
}

/// Adds `memoized` and `try_memoized` to `FunctionN` for N >= 1.
///
/// The cache key is the full argument tuple.
macro_rules! impl_memoized {
    ($name:ident, ($($argument:ident : $ty:ident),+)) => {
        impl<$($ty,)+ R> $name<$($ty,)+ R>
        where
            $($ty: Clone + Eq + ::std::hash::Hash + Send + 'static,)+
            R: Clone + Send + 'static,
        {
            /// Returns a function that caches its results by argument tuple.
            ///
            /// For equal arguments the wrapped callable runs at most once, also
            /// when several threads make the first call at the same time.
            /// A call that panics caches nothing. Memoizing an already memoized
            /// function returns it unchanged.
            pub fn memoized(&self) -> Self {
                if self.memo.is_some() {
                    return self.clone();
                }
                ::tracing::trace!(function = stringify!($name), "memoizing function value");

                let function = ::std::sync::Arc::clone(&self.function);
                let cache: ::std::sync::Arc<$crate::function::MemoCache<($($ty,)+), R>> =
                    ::std::sync::Arc::new($crate::function::MemoCache::new());
                let store: ::std::sync::Arc<dyn $crate::function::MemoStore> = cache.clone();

                Self {
                    function: ::std::sync::Arc::new(move |$($argument: $ty),+| {
                        cache.get_or_init(($($argument.clone(),)+), || function($($argument),+))
                    }),
                    memo: Some(store),
                }
            }
        }

        impl<$($ty,)+ T, E> $name<$($ty,)+ Result<T, E>>
        where
            $($ty: Clone + Eq + ::std::hash::Hash + Send + 'static,)+
            T: Clone + Send + 'static,
            E: 'static,
        {
            /// Returns a function that caches only its `Ok` results.
            ///
            /// An `Err` is returned to the caller and leaves the arguments
            /// uncached, so the next call with them runs the callable again.
            pub fn try_memoized(&self) -> Self {
                if self.memo.is_some() {
                    return self.clone();
                }
                ::tracing::trace!(function = stringify!($name), "memoizing fallible function value");

                let function = ::std::sync::Arc::clone(&self.function);
                let cache: ::std::sync::Arc<$crate::function::MemoCache<($($ty,)+), T>> =
                    ::std::sync::Arc::new($crate::function::MemoCache::new());
                let store: ::std::sync::Arc<dyn $crate::function::MemoStore> = cache.clone();

                Self {
                    function: ::std::sync::Arc::new(move |$($argument: $ty),+| {
                        cache.get_or_try_init(($($argument.clone(),)+), || function($($argument),+))
                    }),
                    memo: Some(store),
                }
            }
        }
    };
}

/// Adds `partialK`, which binds the first K arguments of `FunctionN`.
///
/// The bound values are cloned into every call of the resulting function.
macro_rules! impl_partial {
    (
        $name:ident <$($ty:ident),+>,
        $count:literal ($($bound:ident : $bound_ty:ident),+)
            -> $target:ident ($($rest:ident : $rest_ty:ident),*)
    ) => {
        ::paste::paste! {
            impl<$($ty: 'static,)+ R: 'static> $name<$($ty,)+ R>
            where
                $($bound_ty: Clone + Send + Sync,)+
            {
                /// Binds a prefix of the arguments, returning a function value of
                /// the remaining ones.
                pub fn [<partial $count>](
                    &self,
                    $($bound: $bound_ty),+
                ) -> $crate::function::$target<$($rest_ty,)* R> {
                    let function = ::std::sync::Arc::clone(&self.function);
                    $crate::function::$target::of(move |$($rest: $rest_ty),*| {
                        function($($bound.clone(),)+ $($rest),*)
                    })
                }
            }
        }
    };
}

pub(crate) use define_function;
pub(crate) use impl_memoized;
pub(crate) use impl_partial;
