//! Maybe type - an optional value as a closed sum type.
//!
//! This module provides the `Maybe<A>` type, a closed two-variant
//! container that is either `Just(value)` or `Nothing`. Unlike a nullable
//! reference, the container itself is a first-class value: the type
//! distinguishes "an optional containing nothing" from "no value at all",
//! and extraction always goes through total case analysis.
//!
//! `Maybe` encodes *absence*, not *failure*: `Nothing` carries no
//! diagnostic payload. Callers that need a reason for the missing value
//! should use [`Either`](crate::control::Either) instead.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let present = Maybe::just(21);
//! let doubled = present.fmap(|n| n * 2);
//! assert_eq!(doubled, Maybe::just(42));
//!
//! // Absence short-circuits the whole chain
//! let absent: Maybe<i32> = Maybe::nothing();
//! let result = absent.flat_map(|n| Maybe::just(n * 2));
//! assert_eq!(result, Maybe::nothing());
//!
//! // Extraction is total case analysis
//! let description = Maybe::just(5).match_with(
//!     || "empty".to_string(),
//!     |n| format!("got {n}"),
//! );
//! assert_eq!(description, "got 5");
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Traversable, TypeConstructor,
};

/// An optional value: either `Just(value)` or `Nothing`.
///
/// `Maybe<A>` is a closed sum type with exactly two variants; there is no
/// third state. Separately constructed `Nothing` values are structurally
/// equal. All operations either consume or borrow the container and
/// return a fresh one; nothing is ever mutated in place.
///
/// # Type Parameters
///
/// * `A` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Maybe;
///
/// let present = Maybe::just(42);
/// assert!(present.is_just());
///
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert!(absent.is_nothing());
/// assert_eq!(absent, Maybe::nothing());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// The absent variant; carries no payload.
    Nothing,
    /// The present variant; carries exactly one value.
    Just(A),
}

impl<A> Maybe<A> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a value in the present variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let present = Maybe::just(42);
    /// assert_eq!(present, Maybe::Just(42));
    /// ```
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns the absent value.
    ///
    /// Every call allocates nothing; `Nothing` values are compared
    /// structurally, so all of them are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent, Maybe::Nothing);
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert!(Maybe::just(42).is_just());
    /// assert!(!Maybe::<i32>::nothing().is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::nothing().is_nothing());
    /// assert!(!Maybe::just(42).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// This is total case analysis: both branches must be supplied, there
    /// is no default. It is the primary way to get information out of the
    /// container.
    ///
    /// # Arguments
    ///
    /// * `on_nothing` - Handler invoked when the value is absent
    /// * `on_just` - Handler invoked with the contained value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let result = Maybe::just(5).match_with(|| 0, |n| n * 2);
    /// assert_eq!(result, 10);
    ///
    /// let result = Maybe::<i32>::nothing().match_with(|| 0, |n| n * 2);
    /// assert_eq!(result, 0);
    /// ```
    #[inline]
    pub fn match_with<K, N, J>(self, on_nothing: N, on_just: J) -> K
    where
        N: FnOnce() -> K,
        J: FnOnce(A) -> K,
    {
        match self {
            Self::Nothing => on_nothing(),
            Self::Just(value) => on_just(value),
        }
    }

    // =========================================================================
    // Borrowing Adapter
    // =========================================================================

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let text = Maybe::just(String::from("hello"));
    /// let length = text.as_ref().match_with(|| 0, |s| s.len());
    /// assert_eq!(length, 5);
    /// // text is still available here
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(value),
        }
    }

    // =========================================================================
    // Monoid Folding
    // =========================================================================

    /// Folds into a monoid whose identity element is supplied explicitly.
    ///
    /// Returns `identity` when absent; returns `function(value)` when
    /// present (the mapped value stands alone, it is not combined with the
    /// identity). Use this when the monoid instance is chosen at runtime;
    /// when the instance is statically known,
    /// [`Foldable::fold_map`](crate::typeclass::Foldable::fold_map)
    /// obtains the identity from the type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    /// use kleisli::typeclass::Sum;
    ///
    /// let present = Maybe::just(5);
    /// assert_eq!(present.fold_map_id(Sum::new(0), Sum::new), Sum::new(5));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.fold_map_id(Sum::new(0), Sum::new), Sum::new(0));
    /// ```
    #[inline]
    pub fn fold_map_id<M, F>(self, identity: M, function: F) -> M
    where
        M: Monoid,
        F: FnOnce(A) -> M,
    {
        match self {
            Self::Nothing => identity,
            Self::Just(value) => function(value),
        }
    }
}

// =============================================================================
// Flatten
// =============================================================================

impl<A> Maybe<Maybe<A>> {
    /// Collapses one level of nesting.
    ///
    /// `Nothing` and `Just(Nothing)` both flatten to `Nothing`;
    /// `Just(Just(value))` flattens to `Just(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(Maybe::just(42)).flatten(), Maybe::just(42));
    /// assert_eq!(Maybe::just(Maybe::<i32>::nothing()).flatten(), Maybe::nothing());
    /// assert_eq!(Maybe::<Maybe<i32>>::nothing().flatten(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        self.match_with(Maybe::nothing, |inner| inner)
    }
}

// =============================================================================
// N-ary Lifting
//
// A fixed-arity family: the function is applied only when every argument
// is present. Fixed arities keep argument counts checked at compile time.
// =============================================================================

impl<R> Maybe<R> {
    /// Applies a unary function if the argument is present.
    ///
    /// Equivalent to `first.fmap(function)`, provided for symmetry with
    /// the higher arities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::lift(|a: i32| a + 1, Maybe::just(1)), Maybe::just(2));
    /// assert_eq!(Maybe::lift(|a: i32| a + 1, Maybe::nothing()), Maybe::nothing());
    /// ```
    #[inline]
    pub fn lift<T1, F>(function: F, first: Maybe<T1>) -> Self
    where
        F: FnOnce(T1) -> R,
    {
        match first {
            Maybe::Just(a) => Self::Just(function(a)),
            Maybe::Nothing => Self::Nothing,
        }
    }

    /// Applies a binary function if both arguments are present.
    ///
    /// Absence of either argument yields `Nothing`; the function is not
    /// invoked in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let sum = Maybe::lift2(|a: i32, b: i32| a + b, Maybe::just(2), Maybe::just(3));
    /// assert_eq!(sum, Maybe::just(5));
    ///
    /// let sum = Maybe::lift2(|a: i32, b: i32| a + b, Maybe::nothing(), Maybe::just(3));
    /// assert_eq!(sum, Maybe::nothing());
    /// ```
    #[inline]
    pub fn lift2<T1, T2, F>(function: F, first: Maybe<T1>, second: Maybe<T2>) -> Self
    where
        F: FnOnce(T1, T2) -> R,
    {
        match (first, second) {
            (Maybe::Just(a), Maybe::Just(b)) => Self::Just(function(a, b)),
            _ => Self::Nothing,
        }
    }

    /// Applies a ternary function if all three arguments are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let sum = Maybe::lift3(
    ///     |a: i32, b: i32, c: i32| a + b + c,
    ///     Maybe::just(1),
    ///     Maybe::just(2),
    ///     Maybe::just(3),
    /// );
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    #[inline]
    pub fn lift3<T1, T2, T3, F>(
        function: F,
        first: Maybe<T1>,
        second: Maybe<T2>,
        third: Maybe<T3>,
    ) -> Self
    where
        F: FnOnce(T1, T2, T3) -> R,
    {
        match (first, second, third) {
            (Maybe::Just(a), Maybe::Just(b), Maybe::Just(c)) => Self::Just(function(a, b, c)),
            _ => Self::Nothing,
        }
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
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(function(value)),
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(function(value)),
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(b)) => Maybe::Just(function(b)),
            _ => Maybe::Nothing,
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
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => function(value),
        }
    }
}

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Nothing => init,
            Self::Just(value) => function(init, value),
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Nothing => init,
            Self::Just(value) => function(value, init),
        }
    }
}

impl<A> Traversable for Maybe<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Maybe<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Self::Nothing => Some(Maybe::Nothing),
            Self::Just(value) => function(value).map(Maybe::Just),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Maybe<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Self::Nothing => Ok(Maybe::Nothing),
            Self::Just(value) => function(value).map(Maybe::Just),
        }
    }
}

// =============================================================================
// Debug and Default Implementations
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => formatter.write_str("Nothing"),
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
        }
    }
}

impl<A> Default for Maybe<A> {
    /// The absent value.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Conversions to/from Option
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(v)` becomes `Just(v)`, and `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::just(42));
    /// ```
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Just(v)` becomes `Some(v)`, and `Nothing` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let option: Option<i32> = Maybe::just(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}
