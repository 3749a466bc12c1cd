//! Traversable type class - mapping with effects and collecting results.
//!
//! This module provides the `Traversable` trait, which represents types that can
//! have an effectful function applied to each element while collecting the results
//! inside the effect.
//!
//! A `Traversable` is a combination of `Functor` and `Foldable` with the additional
//! ability to "turn the structure inside out" with respect to effects.
//!
//! # Motivation
//!
//! Consider a `Maybe<String>` where you want to parse the contained string as an
//! integer. The parsing function returns `Option<i32>` (or `Result<i32, E>`).
//! You want:
//! - If the container is absent: the effect's successful wrapping of absence
//! - If the parse succeeds: the effect wrapping `Maybe::just(parsed)`
//! - If the parse fails: the effect's failure
//!
//! This is exactly what `traverse` does.
//!
//! # Limitations in Rust
//!
//! Rust lacks Higher-Kinded Types (HKT), which would allow us to define a single
//! generic `traverse` method for any `Applicative`. Instead, we provide specialized
//! methods for the most common effect types:
//!
//! - `traverse_option`: For functions returning `Option<B>`
//! - `traverse_result`: For functions returning `Result<B, E>`
//!
//! The deferred-effect traversal (`Maybe<A>` with a `Task`-returning function)
//! lives with the effect container itself; see `Maybe::traverse_task`.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Traversable;
//! use kleisli::control::Maybe;
//!
//! // Parse the contained string
//! let present = Maybe::just("42");
//! let parsed: Option<Maybe<i32>> = present.traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(Maybe::just(42)));
//!
//! // Absence is lifted into the effect, not treated as failure
//! let absent: Maybe<&str> = Maybe::nothing();
//! let parsed: Option<Maybe<i32>> = absent.traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(Maybe::nothing()));
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures that can be traversed with effects.
///
/// `Traversable` combines the capabilities of `Functor` and `Foldable` with
/// the ability to sequence effects. It allows you to apply an effectful
/// function to each element and collect all the effects together.
///
/// # Type Class Laws
///
/// Implementations should satisfy these laws (expressed informally since we
/// cannot directly express them without HKT):
///
/// ## Identity
///
/// Traversing with the identity effect is the same as mapping:
/// ```text
/// traverse(Identity) == fmap(Identity)  // conceptually
/// ```
///
/// ## Naturality
///
/// The result of traversing is preserved by natural transformations:
/// ```text
/// transform(traverse(f)) == traverse(transform . f)
/// ```
///
/// # Provided Methods
///
/// In addition to the required `traverse_option` and `traverse_result` methods,
/// this trait provides:
///
/// - `sequence_option`: Turn `F<Option<A>>` into `Option<F<A>>`
/// - `sequence_result`: Turn `F<Result<A, E>>` into `Result<F<A>, E>`
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Traversable;
/// use kleisli::control::Maybe;
///
/// fn validate_positive(number: i32) -> Result<i32, &'static str> {
///     if number > 0 { Ok(number) } else { Err("must be positive") }
/// }
///
/// assert_eq!(
///     Maybe::just(3).traverse_result(validate_positive),
///     Ok(Maybe::just(3))
/// );
/// assert_eq!(
///     Maybe::just(-3).traverse_result(validate_positive),
///     Err("must be positive")
/// );
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies a function returning `Option` to each element and collects the results.
    ///
    /// If all function applications return `Some`, the result is `Some` containing
    /// the collected values. If any application returns `None`, the entire result
    /// is `None`. An empty structure lifts unchanged into `Some` without the
    /// function ever being invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms each element to an `Option<B>`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Traversable;
    /// use kleisli::control::Maybe;
    ///
    /// let result: Option<Maybe<i32>> = Maybe::just("42").traverse_option(|s| s.parse().ok());
    /// assert_eq!(result, Some(Maybe::just(42)));
    ///
    /// let result: Option<Maybe<i32>> = Maybe::just("oops").traverse_option(|s| s.parse().ok());
    /// assert_eq!(result, None);
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a function returning `Result` to each element and collects the results.
    ///
    /// If all function applications return `Ok`, the result is `Ok` containing
    /// the collected values. If any application returns `Err`, the entire result
    /// is that `Err`. An empty structure lifts unchanged into `Ok` without the
    /// function ever being invoked.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms each element to a `Result<B, E>`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Traversable;
    /// use kleisli::control::Maybe;
    ///
    /// fn parse(s: &str) -> Result<i32, &'static str> {
    ///     s.parse().map_err(|_| "parse error")
    /// }
    ///
    /// let result: Result<Maybe<i32>, _> = Maybe::just("42").traverse_result(parse);
    /// assert_eq!(result, Ok(Maybe::just(42)));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of `Option`s inside out.
    ///
    /// Converts `Self<Option<A>>` to `Option<Self<A>>`.
    ///
    /// This is equivalent to `traverse_option(|x| x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Traversable;
    /// use kleisli::control::Maybe;
    ///
    /// let value: Maybe<Option<i32>> = Maybe::just(Some(1));
    /// assert_eq!(value.sequence_option(), Some(Maybe::just(1)));
    ///
    /// let value: Maybe<Option<i32>> = Maybe::just(None);
    /// assert_eq!(value.sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out.
    ///
    /// Converts `Self<Result<A, E>>` to `Result<Self<A>, E>`.
    ///
    /// This is equivalent to `traverse_result(|x| x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Traversable;
    /// use kleisli::control::Maybe;
    ///
    /// let value: Maybe<Result<i32, &str>> = Maybe::just(Ok(1));
    /// assert_eq!(value.sequence_result(), Ok(Maybe::just(1)));
    ///
    /// let value: Maybe<Result<i32, &str>> = Maybe::just(Err("bad"));
    /// assert_eq!(value.sequence_result(), Err("bad"));
    /// ```
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse_int(string: &str) -> Option<i32> {
        string.parse().ok()
    }

    fn parse_int_result(string: &str) -> Result<i32, &'static str> {
        string.parse().map_err(|_| "parse error")
    }

    #[rstest]
    fn identity_traverse_option_success() {
        let result = Identity::new("42").traverse_option(parse_int);
        assert_eq!(result, Some(Identity::new(42)));
    }

    #[rstest]
    fn identity_traverse_option_failure() {
        let result = Identity::new("not a number").traverse_option(parse_int);
        assert_eq!(result, None);
    }

    #[rstest]
    fn identity_traverse_result_success() {
        let result = Identity::new("42").traverse_result(parse_int_result);
        assert_eq!(result, Ok(Identity::new(42)));
    }

    #[rstest]
    fn identity_traverse_result_failure() {
        let result = Identity::new("not a number").traverse_result(parse_int_result);
        assert_eq!(result, Err("parse error"));
    }
}
