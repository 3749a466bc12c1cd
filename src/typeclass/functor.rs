//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value(s) while preserving the structure.
//!
//! A `Functor` is one of the fundamental abstractions in functional programming,
//! allowing you to transform the contents of a container without changing its shape.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Functor;
//! use kleisli::control::Maybe;
//!
//! // Maybe as a Functor
//! let present: Maybe<i32> = Maybe::just(5);
//! let transformed: Maybe<String> = present.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! // Nothing is preserved
//! let absent: Maybe<i32> = Maybe::nothing();
//! let transformed: Maybe<String> = absent.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value(s) inside
/// a container while preserving the container's structure.
///
/// # Laws
///
/// ## Identity Law
///
/// Mapping the identity function returns an equivalent functor:
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// Mapping composed functions is equivalent to mapping them in sequence:
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Functor;
/// use kleisli::control::Maybe;
///
/// let x: Maybe<i32> = Maybe::just(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::just("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// This is the primary operation of the Functor type class. It takes a
    /// function that transforms the inner type and returns a new functor
    /// with the transformed value(s).
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    /// use kleisli::control::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::just(5);
    /// let y: Maybe<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// This method is useful when you want to transform the functor's contents
    /// without consuming it, or when the inner type does not implement `Clone`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes a reference to the inner value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    /// use kleisli::control::Maybe;
    ///
    /// let x: Maybe<String> = Maybe::just("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::just(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to place inside the functor
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    /// use kleisli::control::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::just(5);
    /// assert_eq!(x.replace("replaced"), Maybe::just("replaced"));
    ///
    /// let y: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(y.replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// This is useful when you only care about the structure/effect of
    /// the functor and not the value it contains.
    ///
    /// This is equivalent to `replace(())` or `fmap(|_| ())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Functor;
    /// use kleisli::control::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::just(5);
    /// assert_eq!(x.void(), Maybe::just(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
