//! Deferred effect handling.
//!
//! This module provides the [`Task`] monad for deferred asynchronous side
//! effects, together with the lifting combinators that adapt ordinary and
//! fallible functions into it.
//!
//! # Task Monad
//!
//! The [`Task`] type represents an asynchronous computation that may
//! perform side effects. Construction never executes anything; only
//! `run` does, and every run restarts the computation from scratch.
//!
//! ```rust
//! use kleisli::effect::Task;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Build and chain tasks - side effects don't occur until run
//! let task = Task::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| Task::pure(x + 1));
//!
//! assert_eq!(task.run().await, 21);
//! # }
//! ```
//!
//! # Lifting Functions
//!
//! Ordinary functions enter the deferred model through a fixed-arity
//! family ([`call`] through [`call5`]) or through curried builders
//! ([`lift_impure`] and friends). Fallible asynchronous functions use the
//! [`try_call`] family or [`lift_fallible`]; their failures become
//! [`Either::Left`](crate::control::Either) values inside a successfully
//! settling task rather than outer failures.
//!
//! ```rust
//! use kleisli::control::Either;
//! use kleisli::effect::{call2, try_call};
//!
//! async fn halve(x: i32) -> Result<i32, String> {
//!     if x % 2 == 0 { Ok(x / 2) } else { Err("odd".to_string()) }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! assert_eq!(call2(|a: i32, b: i32| a + b, 1, 2).run().await, 3);
//! assert_eq!(try_call(halve, 7).run().await, Either::Left("odd".to_string()));
//! # }
//! ```

mod task;

pub use task::Task;

pub use task::{call, call2, call3, call4, call5};
pub use task::{lift_fallible, lift_fallible2, lift_fallible3};
pub use task::{lift_impure, lift_impure2, lift_impure3};
pub use task::{try_call, try_call2, try_call3, try_call4, try_call5};
