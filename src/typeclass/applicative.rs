//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Create tuples of applicative values (`product`)
//!
//! `Applicative` is more powerful than `Functor` because it allows combining
//! multiple independent computations within the same context.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Applying the identity function wrapped in `pure` should return the original value:
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! Applying a pure function to a pure value equals pure of the function applied to the value:
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! The order of application can be swapped with appropriate wrapping:
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! Function composition inside contexts works correctly:
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Applicative;
//! use kleisli::control::Maybe;
//!
//! // Lifting a pure value into the Maybe context
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::just(42));
//!
//! // Combining two Maybe values
//! let a = Maybe::just(1);
//! let b = Maybe::just(2);
//! let c = a.map2(b, |x, y| x + y);
//! assert_eq!(c, Maybe::just(3));
//!
//! // Creating a tuple of values
//! let x = Maybe::just(1);
//! let y = Maybe::just("hello");
//! assert_eq!(x.product(y), Maybe::just((1, "hello")));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with the ability to:
///
/// - Lift any value into the context using `pure`
/// - Combine multiple values in the context using `map2`
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// ```text
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
///
/// ## Composition Law
///
/// ```text
/// pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
/// ```
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Applicative;
/// use kleisli::control::Maybe;
///
/// // Pure lifts a value into the context
/// let x: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(x, Maybe::just(42));
///
/// // map2 combines two values
/// let a = Maybe::just(3);
/// let b = Maybe::just(4);
/// let sum = a.map2(b, |x, y| x + y);
/// assert_eq!(sum, Maybe::just(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// This is the fundamental operation that allows creating an applicative
    /// value from any regular value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift into the context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::just(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// This is the primary way to combine multiple independent computations
    /// within an applicative context. If either computation fails (in the
    /// sense appropriate to the specific applicative), the result fails.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let a = Maybe::just(1);
    /// let b = Maybe::just(2);
    /// let sum = a.map2(b, |x, y| x + y);
    /// assert_eq!(sum, Maybe::just(3));
    ///
    /// let a = Maybe::just(1);
    /// let b: Maybe<i32> = Maybe::nothing();
    /// let sum = a.map2(b, |x, y| x + y);
    /// assert_eq!(sum, Maybe::nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// This is a convenience method built on top of `map2`.
    ///
    /// # Arguments
    ///
    /// * `second` - The second applicative value
    /// * `third` - The third applicative value
    /// * `function` - A function that takes all three inner values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let a = Maybe::just(1);
    /// let b = Maybe::just(2);
    /// let c = Maybe::just(3);
    /// let sum = a.map3(b, c, |x, y, z| x + y + z);
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. It applies
    /// the contained function to the value in `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - An applicative containing the value to apply the function to
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// let value = Maybe::just(5);
    /// let result = function.apply(value);
    /// assert_eq!(result, Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let a = Maybe::just(1);
    /// let b = Maybe::just("hello");
    /// assert_eq!(a.product(b), Maybe::just((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// Both applicatives are evaluated, but only the left value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let a = Maybe::just(1);
    /// let b = Maybe::just(2);
    /// assert_eq!(a.product_left(b), Maybe::just(1));
    ///
    /// let a = Maybe::just(1);
    /// let b: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(a.product_left(b), Maybe::nothing());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// Both applicatives are evaluated, but only the right value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::control::Maybe;
    ///
    /// let a = Maybe::just(1);
    /// let b = Maybe::just(2);
    /// assert_eq!(a.product_right(b), Maybe::just(2));
    ///
    /// let a: Maybe<i32> = Maybe::nothing();
    /// let b = Maybe::just(2);
    /// assert_eq!(a.product_right(b), Maybe::nothing());
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        function: F,
    ) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_pure_wraps_value() {
        let wrapped: Identity<i32> = <Identity<()>>::pure(42);
        assert_eq!(wrapped, Identity::new(42));
    }

    #[rstest]
    fn identity_map2_combines_values() {
        let result = Identity::new(1).map2(Identity::new(2), |a, b| a + b);
        assert_eq!(result, Identity::new(3));
    }

    #[rstest]
    fn identity_map3_combines_values() {
        let result = Identity::new(1).map3(Identity::new(2), Identity::new(3), |a, b, c| a + b + c);
        assert_eq!(result, Identity::new(6));
    }

    #[rstest]
    fn identity_apply_applies_function() {
        let function: Identity<fn(i32) -> i32> = Identity::new(|x| x + 1);
        let result = function.apply(Identity::new(5));
        assert_eq!(result, Identity::new(6));
    }

    #[rstest]
    fn identity_product_pairs_values() {
        let result = Identity::new(1).product(Identity::new("hello"));
        assert_eq!(result, Identity::new((1, "hello")));
    }

    #[rstest]
    fn identity_product_left_and_right() {
        assert_eq!(
            Identity::new(1).product_left(Identity::new(2)),
            Identity::new(1)
        );
        assert_eq!(
            Identity::new(1).product_right(Identity::new(2)),
            Identity::new(2)
        );
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    /// Homomorphism: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn identity_homomorphism_law() {
        let function = |x: i32| x * 2;

        let left: Identity<i32> =
            <Identity<()>>::pure(function).apply(<Identity<()>>::pure(21));
        let right: Identity<i32> = <Identity<()>>::pure(function(21));

        assert_eq!(left, right);
        assert_eq!(left, Identity::new(42));
    }

    /// Identity: pure(|x| x).apply(v) == v
    #[rstest]
    fn identity_applicative_identity_law() {
        let value = Identity::new(42);
        let identity_function: Identity<fn(i32) -> i32> = <Identity<()>>::pure(|x| x);
        assert_eq!(identity_function.apply(value), value);
    }
}
