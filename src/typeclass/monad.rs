//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! A `Monad` is one of the most powerful abstractions in functional programming,
//! often described as a "programmable semicolon" because it controls how
//! computations are sequenced.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//! use kleisli::control::Maybe;
//!
//! // Using flat_map to chain Maybe computations
//! let x = Maybe::just(5);
//! let y = x.flat_map(|n| if n > 0 { Maybe::just(n * 2) } else { Maybe::nothing() });
//! assert_eq!(y, Maybe::just(10));
//!
//! // Chain of computations with potential absence
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     match s.parse::<i32>() {
//!         Ok(n) if n > 0 => Maybe::just(n),
//!         _ => Maybe::nothing(),
//!     }
//! }
//!
//! let result = Maybe::just("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::just(n * 2));
//! assert_eq!(result, Maybe::just(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
/// This enables powerful control flow patterns within the monad context.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Monad;
/// use kleisli::control::Maybe;
///
/// let x = Maybe::just(5);
/// let y = x.flat_map(|n| Maybe::just(n * 2));
/// assert_eq!(y, Maybe::just(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class. It takes a
    /// function that returns a new monad and "flattens" the nested result.
    ///
    /// In Haskell, this is `>>=` (bind). In Rust's standard library, this is
    /// similar to `and_then` on `Option` and `Result`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    /// use kleisli::control::Maybe;
    ///
    /// let x = Maybe::just(5);
    /// let y = x.flat_map(|n| Maybe::just(n * 2));
    /// assert_eq!(y, Maybe::just(10));
    ///
    /// let z = Maybe::just(5);
    /// let w = z.flat_map(|n| if n > 10 { Maybe::just(n) } else { Maybe::nothing() });
    /// assert_eq!(w, Maybe::nothing());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// This method is provided for familiarity with Rust's `Option::and_then`
    /// and `Result::and_then` methods.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    /// use kleisli::control::Maybe;
    ///
    /// let x = Maybe::just(5);
    /// let y = x.and_then(|n| Maybe::just(n * 2));
    /// assert_eq!(y, Maybe::just(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// This evaluates `self`, ignores its value, and returns `next`.
    /// In Haskell, this is the `>>` operator.
    ///
    /// Note: If `self` represents absence or failure, that propagates
    /// and `next` is not returned.
    ///
    /// # Arguments
    ///
    /// * `next` - The monad to return after evaluating `self`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    /// use kleisli::control::Maybe;
    ///
    /// let x = Maybe::just(5);
    /// let y = x.then(Maybe::just("hello"));
    /// assert_eq!(y, Maybe::just("hello"));
    ///
    /// let z: Maybe<i32> = Maybe::nothing();
    /// let w = z.then(Maybe::just("hello"));
    /// assert_eq!(w, Maybe::nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_flat_map_transforms() {
        let wrapped = Identity::new(5);
        let result = wrapped.flat_map(|n| Identity::new(n * 2));
        assert_eq!(result, Identity::new(10));
    }

    #[rstest]
    fn identity_and_then_alias() {
        let wrapped = Identity::new(5);
        let flat_map_result = Identity::new(5).flat_map(|n| Identity::new(n * 2));
        let and_then_result = wrapped.and_then(|n| Identity::new(n * 2));
        assert_eq!(flat_map_result, and_then_result);
    }

    #[rstest]
    fn identity_then_replaces() {
        let first = Identity::new(5);
        let second = Identity::new("hello");
        let result = first.then(second);
        assert_eq!(result, Identity::new("hello"));
    }

    #[rstest]
    fn identity_flatten_nested() {
        // Identity uses flat_map with the identity function for flatten
        let nested = Identity::new(Identity::new(42));
        let flat: Identity<i32> = nested.flat_map(|inner| inner);
        assert_eq!(flat, Identity::new(42));
    }

    // =========================================================================
    // Monad Law Tests
    // =========================================================================

    // Left Identity Law: pure(a).flat_map(f) == f(a)

    #[rstest]
    fn identity_left_identity_law() {
        let value = 5;
        let function = |n: i32| Identity::new(n * 2);

        let left: Identity<i32> = <Identity<()>>::pure(value).flat_map(function);
        let right: Identity<i32> = function(value);

        assert_eq!(left, right);
        assert_eq!(left, Identity::new(10));
    }

    // Right Identity Law: m.flat_map(pure) == m

    #[rstest]
    fn identity_right_identity_law() {
        let monad = Identity::new(42);
        let result = monad.flat_map(|x| <Identity<()>>::pure(x));
        assert_eq!(result, monad);
    }

    // Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))

    #[rstest]
    fn identity_associativity_law() {
        let monad = Identity::new(5);
        let function1 = |n: i32| Identity::new(n + 1);
        let function2 = |n: i32| Identity::new(n * 2);

        let left = monad.flat_map(function1).flat_map(function2);
        let right = monad.flat_map(|x| function1(x).flat_map(function2));

        assert_eq!(left, right);
        assert_eq!(left, Identity::new(12)); // (5 + 1) * 2 = 12
    }
}
