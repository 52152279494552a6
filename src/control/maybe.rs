//! An optional value with monadic composition.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. It differs from
//! `std::option::Option` in one deliberate way: [`Maybe::map`] never looks at
//! the value its function returns. If a mapping step produces "nothing"
//! (`None`), the result is `Present(None)`, a present container holding a
//! null payload. That payload is only detected by the next operation that
//! dereferences it ([`Maybe::try_map`], [`Maybe::try_get`]), which fails with
//! [`AccessError::NullPayload`]. The way to fold a null payload back into
//! absence is [`Maybe::flat_map`] together with [`Maybe::of`], or the
//! shorthand [`Maybe::normalize`].
//!
//! # Examples
//!
//! ```rust
//! use funcore::control::{AccessError, Maybe};
//!
//! let maybe_foo = Maybe::of(Some("foo".to_string()));
//! assert_eq!(maybe_foo.get(), Ok(&"foo".to_string()));
//!
//! // Mapping to "nothing" keeps the container present ...
//! let null_payload = maybe_foo.map(|_| None::<String>);
//! assert!(null_payload.is_defined());
//!
//! // ... and the next dereference fails fast.
//! let chained = null_payload.clone().try_map(|s| s.to_uppercase() + "bar");
//! assert_eq!(chained, Err(AccessError::NullPayload));
//!
//! // flat_map + of normalizes it into absence instead.
//! let normalized = null_payload.flat_map(|s| Maybe::of(s).map(|t| t.to_uppercase() + "bar"));
//! assert!(normalized.is_empty());
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// Error returned when a `Maybe` is dereferenced without a usable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AccessError {
    /// The container is `Absent`.
    #[error("no value present")]
    Empty,
    /// The container is present, but its payload is a null (`None`) produced
    /// by an earlier `map`.
    #[error("null payload dereferenced")]
    NullPayload,
}

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use funcore::control::Maybe;
///
/// let present = Maybe::some(21).map(|n| n * 2);
/// assert_eq!(present, Maybe::Present(42));
///
/// let absent: Maybe<i32> = Maybe::of(None);
/// assert!(absent.map(|n| n * 2).is_empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Maybe<T> {
    /// Creates a `Maybe` from a nullable input.
    ///
    /// This is the only constructor that turns "nothing" into `Absent`.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Creates a present `Maybe`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Creates a present `Maybe` from `supplier` when `condition` holds.
    ///
    /// `supplier` is not called otherwise.
    ///
    /// ```rust
    /// use funcore::control::Maybe;
    ///
    /// assert_eq!(Maybe::when(true, || 1), Maybe::Present(1));
    /// assert_eq!(Maybe::when(false, || 1), Maybe::Absent);
    /// ```
    #[inline]
    pub fn when<F>(condition: bool, supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if condition {
            Self::Present(supplier())
        } else {
            Self::Absent
        }
    }

    /// Returns `true` if the value is absent.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Empty`] if the value is absent.
    #[inline]
    pub const fn get(&self) -> Result<&T, AccessError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AccessError::Empty),
        }
    }

    /// Consumes the `Maybe` and returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Empty`] if the value is absent.
    #[inline]
    pub fn into_value(self) -> Result<T, AccessError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(AccessError::Empty),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `supplier`.
    #[inline]
    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative,
        }
    }

    /// Returns `self` if present, otherwise the `Maybe` produced by `supplier`.
    #[inline]
    pub fn or_else_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => supplier(),
        }
    }

    /// Transforms the contained value.
    ///
    /// `function` is not called when the value is absent. Its result is
    /// wrapped as-is: mapping to `None` yields `Present(None)`, not `Absent`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Transforms the contained value into another `Maybe`.
    ///
    /// The result of `function` is returned directly, so a step that
    /// reports absence produces `Absent`.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Calls `action` with the contained value, if any, and returns `self`.
    #[inline]
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            action(value);
        }
        self
    }

    /// Folds the `Maybe` into a single value.
    #[inline]
    pub fn fold<U, N, P>(self, if_absent: N, if_present: P) -> U
    where
        N: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => if_present(value),
            Self::Absent => if_absent(),
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present((left, right)),
            _ => Maybe::Absent,
        }
    }

    /// Converts `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns an iterator over the contained value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        Option::from(self.as_ref()).into_iter()
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: PartialEq> Maybe<T> {
    /// Returns `true` if a value is present and equal to `candidate`.
    #[inline]
    pub fn contains(&self, candidate: &T) -> bool {
        matches!(self, Self::Present(value) if value == candidate)
    }
}

// =============================================================================
// Null payload handling
// =============================================================================

impl<T> Maybe<Option<T>> {
    /// Dereferences the payload and maps it.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NullPayload`] if the container is present but
    /// holds `None`. An absent container maps to `Ok(Absent)`.
    #[inline]
    pub fn try_map<U, F>(self, function: F) -> Result<Maybe<U>, AccessError>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(Some(value)) => Ok(Maybe::Present(function(value))),
            Self::Present(None) => Err(AccessError::NullPayload),
            Self::Absent => Ok(Maybe::Absent),
        }
    }

    /// Dereferences the payload.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Empty`] if absent and
    /// [`AccessError::NullPayload`] if the payload is `None`.
    #[inline]
    pub fn try_get(self) -> Result<T, AccessError> {
        match self {
            Self::Present(Some(value)) => Ok(value),
            Self::Present(None) => Err(AccessError::NullPayload),
            Self::Absent => Err(AccessError::Empty),
        }
    }

    /// Folds a null payload into `Absent`.
    ///
    /// Equivalent to `self.flat_map(Maybe::of)`.
    #[inline]
    pub fn normalize(self) -> Maybe<T> {
        self.flat_map(Maybe::of)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }
}
