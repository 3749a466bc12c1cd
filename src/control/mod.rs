//! Container types for functional programming.
//!
//! This module provides the concrete value containers of the library:
//!
//! - [`Maybe`]: An optional value as a closed two-variant sum type
//! - [`Either`]: A value that is one of two types; the success/failure
//!   carrier used by the fallible effect lifters
//!
//! # Examples
//!
//! ## Optional values
//!
//! ```rust
//! use kleisli::control::Maybe;
//! use kleisli::typeclass::Monad;
//!
//! let result = Maybe::just(5)
//!     .flat_map(|n| if n > 0 { Maybe::just(n * 2) } else { Maybe::nothing() });
//! assert_eq!(result, Maybe::just(10));
//! ```
//!
//! ## Success or failure
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let success: Either<String, i32> = Either::Right(42);
//! assert_eq!(success.map_right(|n| n + 1), Either::Right(43));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
