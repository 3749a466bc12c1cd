//! Identity wrapper type - the identity functor.
//!
//! This module provides the `Identity` type, which is the simplest possible
//! wrapper around a value. It serves as:
//!
//! - A simple model for testing type class laws
//! - A way to express "no additional effect" when an applicative context
//!   is required but no effect is wanted

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// `Identity` is the simplest possible type constructor. It wraps a single
/// value and provides no additional functionality. This makes it useful as:
///
/// - A testing model for type class laws (since it's the simplest implementation)
/// - A way to represent "pure" computation where an effect type is expected
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    #[inline]
    fn from(value: A) -> Self {
        Self(value)
    }
}
