//! # kleisli
//!
//! Monadic containers for optional values and deferred asynchronous
//! effects, composed through a shared family of typeclass traits.
//!
//! ## Overview
//!
//! This library provides two concrete containers with a uniform
//! sequencing protocol:
//!
//! - [`Maybe`](control::Maybe): a closed two-variant optional value
//!   whose operations short-circuit on absence
//! - [`Task`](effect::Task): a suspended asynchronous computation that
//!   executes only when explicitly run
//!
//! Both are built against the same algebraic contracts — `Functor`,
//! `Applicative`, `Monad`, `Foldable`, `Traversable` — together with
//! the [`Either`](control::Either) disjoint union that carries
//! success/failure for the fallible lifting combinators.
//!
//! ## Feature Flags
//!
//! - `typeclass`: typeclass traits and base instances
//! - `control`: `Maybe` and `Either` containers
//! - `effect`: the `Task` effect container and lifting combinators
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let total = Maybe::lift2(|a: i32, b: i32| a + b, Maybe::just(2), Maybe::just(3));
//! assert_eq!(total, Maybe::just(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
