//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents types that can
//! have their elements reduced (folded) into a single value.
//!
//! A `Foldable` provides a way to traverse a data structure and accumulate
//! results from all elements into a summary value.
//!
//! # Laws
//!
//! While `Foldable` does not have formal laws as strict as other type classes,
//! implementations should satisfy these properties:
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative operations, `fold_left` and `fold_right` should produce the same result:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Foldable;
//! use kleisli::control::Maybe;
//!
//! // Folding a present value
//! let present = Maybe::just(10);
//! let result = present.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 15);
//!
//! // Folding an absent value returns the initial accumulator
//! let absent: Maybe<i32> = Maybe::nothing();
//! let result = absent.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// `Foldable` provides a unified interface for traversing data structures
/// and accumulating their elements into a single result.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold; the combining function receives
///   the accumulator first (`f(accumulator, element)`)
/// - `fold_right`: Right-associative fold; the combining function receives
///   the element first (`f(element, accumulator)`)
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`: Check if the structure has no elements
/// - `length`: Count the number of elements
/// - `to_list`: Convert to a `Vec`
/// - `find`: Find the first element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Foldable, Sum};
/// use kleisli::control::Maybe;
///
/// let present = Maybe::just(5);
///
/// let sum = present.fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 5);
///
/// let as_monoid: Sum<i32> = Maybe::just(5).fold_map(Sum);
/// assert_eq!(as_monoid, Sum::new(5));
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method: the combining
    /// function receives the accumulator first, then the element.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes the accumulator and an element,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// let value = Maybe::just(3);
    /// let sum = value.fold_left(10, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 13);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// The combining function receives the element first, then the
    /// accumulator. For a single-element container the result is
    /// `function(element, init)`.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes an element and the accumulator,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// let value = Maybe::just("head");
    /// let result = value.fold_right(String::from("!"), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "head!");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// This is a powerful abstraction that allows expressing many common
    /// operations in terms of `Monoid` combination. An empty structure
    /// yields the monoid's identity element.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that maps each element to a `Monoid` value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::{Foldable, Sum};
    /// use kleisli::control::Maybe;
    ///
    /// let present = Maybe::just(4);
    /// let sum: Sum<i32> = present.fold_map(Sum);
    /// assert_eq!(sum, Sum::new(4));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// let sum: Sum<i32> = absent.fold_map(Sum);
    /// assert_eq!(sum, Sum::new(0));
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// assert!(!Maybe::just(5).is_empty());
    /// assert!(Maybe::<i32>::nothing().is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).length(), 1);
    /// assert_eq!(Maybe::<i32>::nothing().length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// The order of elements is determined by the fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(42).to_list(), vec![42]);
    /// assert_eq!(Maybe::<i32>::nothing().to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// Returns `Some(element)` if found, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).find(|element| *element > 3), Some(4));
    /// assert_eq!(Maybe::just(2).find(|element| *element > 3), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            if found.is_some() {
                found
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks whether any element satisfies a predicate.
    ///
    /// Returns `false` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// assert!(Maybe::just(4).exists(|element| *element > 3));
    /// assert!(!Maybe::<i32>::nothing().exists(|element| *element > 3));
    /// ```
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Checks whether all elements satisfy a predicate.
    ///
    /// Returns `true` for an empty structure (vacuous truth).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::control::Maybe;
    ///
    /// assert!(Maybe::just(4).for_all(|element| *element > 3));
    /// assert!(Maybe::<i32>::nothing().for_all(|element| *element > 3));
    /// ```
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(true, |holds, element| holds && predicate(&element))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_fold_left_applies_accumulator_first() {
        let result = Identity::new(3).fold_left(10, |accumulator, element| accumulator - element);
        assert_eq!(result, 7); // 10 - 3
    }

    #[rstest]
    fn identity_fold_right_applies_element_first() {
        let result = Identity::new(10).fold_right(3, |element, accumulator| element - accumulator);
        assert_eq!(result, 7); // 10 - 3
    }

    #[rstest]
    fn identity_fold_map_wraps_value() {
        use crate::typeclass::Sum;
        let result: Sum<i32> = Identity::new(5).fold_map(Sum);
        assert_eq!(result, Sum::new(5));
    }

    #[rstest]
    fn identity_is_never_empty() {
        assert!(!Identity::new(5).is_empty());
        assert_eq!(Identity::new(5).length(), 1);
    }

    #[rstest]
    fn identity_to_list_is_singleton() {
        assert_eq!(Identity::new(5).to_list(), vec![5]);
    }

    #[rstest]
    fn identity_find_exists_for_all() {
        assert_eq!(Identity::new(5).find(|element| *element > 3), Some(5));
        assert!(Identity::new(5).exists(|element| *element > 3));
        assert!(!Identity::new(2).for_all(|element| *element > 3));
    }
}
