//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that form
//! the foundation of this library:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding over structures to produce summary values
//! - [`Traversable`]: Traversing structures with effects
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Monad
//! in a generic way.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (identity functor)
//! - [`Sum`], [`Product`]: Numeric wrappers for different monoid operations
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use kleisli::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use kleisli::typeclass::Applicative;
//! use kleisli::control::Maybe;
//!
//! // Lifting a pure value
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::just(42));
//!
//! // Combining two Maybe values
//! let a = Maybe::just(1);
//! let b = Maybe::just(2);
//! let sum = a.map2(b, |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
