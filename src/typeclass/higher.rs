//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). This is essential
//! for defining type class traits like Functor, Applicative, and Monad.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we
//! cannot write a trait that abstracts over `Maybe<_>` and `Either<L, _>`
//! as type constructors. This module uses GAT to work around this
//! limitation.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::TypeConstructor;
//! use kleisli::control::Maybe;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Maybe<i32>>();
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Maybe<_>`,
/// `Either<L, _>`, or `Identity<_>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently
///   applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use kleisli::typeclass::TypeConstructor;
/// use kleisli::control::Maybe;
///
/// // Maybe<i32> implements TypeConstructor
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> would be the same constructor with String
/// }
///
/// example::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Maybe<i32>`, `WithType<String>` would be
    /// `Maybe<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
//
// Option and Result participate at the constructor level so that the
// sequence_option/sequence_result bounds on Traversable resolve; the
// full trait family is reserved for this library's own containers.
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    /// Verifies that Identity<i32> has the correct Inner type.
    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    /// Verifies that Identity's WithType produces the correct type.
    #[test]
    fn identity_with_type_produces_correct_type() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<String> = Identity<String>>,
        {
        }

        assert_with_type::<Identity<i32>>();
    }

    /// Tests chaining WithType transformations.
    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Identity<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_identity_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_identity_bool::<Step2>();
    }

    /// Tests that nested type constructors work correctly.
    #[test]
    fn nested_type_constructor_works() {
        fn assert_type_constructor<T: TypeConstructor>() {}
        assert_type_constructor::<Identity<Identity<i32>>>();

        fn assert_inner<T: TypeConstructor<Inner = Identity<i32>>>() {}
        assert_inner::<Identity<Identity<i32>>>();
    }
}
