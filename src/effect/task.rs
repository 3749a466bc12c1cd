//! `Task` Monad - Deferred asynchronous side effect handling.
//!
//! The `Task` type represents an asynchronous computation that may perform
//! side effects. Side effects are not executed until `run` is called,
//! maintaining referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! `Task` "describes" side effects but doesn't "execute" them. Execution
//! happens only via `run().await`, which should be called at the program's
//! "edge" (e.g., in async handlers or the main function).
//!
//! A `Task` wraps a *recipe*: a zero-argument closure producing a fresh
//! future each time it is invoked. Because the recipe can be invoked any
//! number of times, running the same `Task` twice re-executes its side
//! effects twice; there is no memoization. The one documented exception is
//! [`Task::from_future`], which wraps work that is already in flight.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::Task;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Create a pure Task
//! let task = Task::pure(42);
//! assert_eq!(task.run().await, 42);
//!
//! // Chain Tasks
//! let task = Task::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| Task::pure(x + 1));
//! assert_eq!(task.run().await, 21);
//! # }
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use kleisli::effect::Task;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let task = Task::new(move || {
//!     let flag = executed_clone.clone();
//!     async move {
//!         flag.store(true, Ordering::SeqCst);
//!         42
//!     }
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Execute the Task
//! let result = task.run().await;
//! assert!(executed.load(Ordering::SeqCst));
//! assert_eq!(result, 42);
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use static_assertions::assert_impl_all;

use crate::control::{Either, Maybe};

/// A monad representing deferred asynchronous side effects.
///
/// `Task<A>` wraps an asynchronous computation that produces a value of
/// type `A` and may perform side effects. The computation is not executed
/// until `run` is called, and every call to `run` restarts it from
/// scratch.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the task.
///
/// # Monad Laws
///
/// `Task` satisfies the monad laws, observed through the value the `run`
/// future resolves to:
///
/// 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Task::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Cloning
///
/// `Task` is cheaply cloneable: clones share the immutable recipe, never
/// results. Running a clone re-executes the recipe exactly like running
/// the original.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::Task;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = Task::pure(42);
/// let result = task.run().await;
/// assert_eq!(result, 42);
/// # }
/// ```
pub struct Task<A> {
    /// The recipe producing a fresh future for each run.
    computation: Arc<dyn Fn() -> BoxFuture<'static, A> + Send + Sync>,
}

assert_impl_all!(Task<i32>: Send, Sync, Clone);

impl<A> Clone for Task<A> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> Task<A> {
    /// Creates a new `Task` from an async recipe.
    ///
    /// The recipe will not be invoked until `run` is called, and it is
    /// invoked again on every subsequent run.
    ///
    /// # Arguments
    ///
    /// * `computation` - A closure that returns a Future producing a value
    ///   of type `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// let task = Task::new(|| async { 40 + 2 });
    /// // Nothing has executed yet
    /// ```
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            computation: Arc::new(move || -> BoxFuture<'static, A> { Box::pin(computation()) }),
        }
    }

    /// Defers construction of a `Task` until run-time.
    ///
    /// The thunk itself is not invoked until `run` is called, so any
    /// composition chain built inside it is also deferred. This guards
    /// against eager evaluation when assembling a task requires work of
    /// its own.
    ///
    /// # Arguments
    ///
    /// * `thunk` - A closure producing the task to execute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::defer(|| Task::pure(2).fmap(|x| x + 40));
    /// assert_eq!(task.run().await, 42);
    /// # }
    /// ```
    pub fn defer<F>(thunk: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self {
            computation: Arc::new(move || thunk().run()),
        }
    }

    /// Lifts a synchronous function into the deferred model.
    ///
    /// The function is invoked only when the task is run, once per run.
    ///
    /// # Arguments
    ///
    /// * `function` - The synchronous computation to defer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::from_fn(|| 6 * 7);
    /// assert_eq!(task.run().await, 42);
    /// # }
    /// ```
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
        A: Send,
    {
        Self::new(move || {
            let value = function();
            async move { value }
        })
    }
}

impl<A: Clone + Send + Sync + 'static> Task<A> {
    /// Wraps a pure value in a no-op task.
    ///
    /// Running the task immediately resolves to the value without
    /// performing any side effects.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to wrap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::pure(42);
    /// assert_eq!(task.run().await, 42);
    /// # }
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || {
            let value = value.clone();
            async move { value }
        })
    }

    /// Wraps an already-created future.
    ///
    /// The future may already be running or even settled when the task is
    /// constructed. **This is the one exception to the re-run contract**:
    /// because the underlying work exists independently of the task, a
    /// second `run` does not re-trigger it — the first run drives the
    /// future to completion and later runs observe the same settled
    /// result.
    ///
    /// # Arguments
    ///
    /// * `future` - The in-flight computation to adopt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::from_future(async { 42 });
    /// assert_eq!(task.run().await, 42);
    /// // A second run yields the settled result without redoing the work
    /// assert_eq!(task.run().await, 42);
    /// # }
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        let shared = future.shared();
        Self::new(move || shared.clone())
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<A: 'static> Task<A> {
    /// Invokes the recipe and returns the future performing the work.
    ///
    /// This is the only operation that triggers execution. The call
    /// returns the future handle immediately; the side effects happen as
    /// the future is polled. Each call restarts the computation from
    /// scratch (except for tasks built with [`Task::from_future`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::pure(42);
    /// let result = task.run().await;
    /// assert_eq!(result, 42);
    /// # }
    /// ```
    pub fn run(&self) -> BoxFuture<'static, A> {
        (self.computation)()
    }
}

// =============================================================================
// Functor Operations
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Transforms the result of a task using a function.
    ///
    /// Defined in terms of `flat_map` and `pure`, which is where the
    /// `B: Clone` requirement comes from. Construction never executes the
    /// underlying computation.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::pure(21).fmap(|x| x * 2);
    /// assert_eq!(task.run().await, 42);
    /// # }
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
    {
        self.flat_map(move |value| Task::pure(function(value)))
    }
}

// =============================================================================
// Monad Operations
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Chains tasks, passing the result of the first to a function that
    /// produces the second.
    ///
    /// This is the `bind` operation from Monad. Sequencing is strict: the
    /// second task is not even constructed until the first task's future
    /// has settled.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the result and returns a new task.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::pure(10).flat_map(|x| Task::pure(x * 2));
    /// assert_eq!(task.run().await, 20);
    /// # }
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
        B: 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let first = self.run();
            let function = Arc::clone(&function);
            async move {
                let value = first.await;
                let next = function(value);
                next.run().await
            }
        })
    }

    /// Alias for `flat_map`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::pure(10).and_then(|x| Task::pure(x + 5));
    /// assert_eq!(task.run().await, 15);
    /// # }
    /// ```
    pub fn and_then<B, F>(self, function: F) -> Task<B>
    where
        F: Fn(A) -> Task<B> + Send + Sync + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two tasks, discarding the result of the first.
    ///
    /// The first task is still executed for its side effects.
    ///
    /// # Arguments
    ///
    /// * `next` - The task to execute after this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Task::pure(10).then(Task::pure(20));
    /// assert_eq!(task.run().await, 20);
    /// # }
    /// ```
    #[must_use]
    pub fn then<B>(self, next: Task<B>) -> Task<B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Applicative Operations
// =============================================================================

impl<A: Send + 'static> Task<A> {
    /// Applies a task-wrapped function to this task's value.
    ///
    /// The function task runs to completion first, then the value task;
    /// the two are never run concurrently.
    ///
    /// # Arguments
    ///
    /// * `function_task` - A task containing a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let function_task = Task::pure(|x: i32| x * 2);
    /// let value_task = Task::pure(21);
    /// let result = value_task.apply(function_task).run().await;
    /// assert_eq!(result, 42);
    /// # }
    /// ```
    #[must_use]
    pub fn apply<B, F>(self, function_task: Task<F>) -> Task<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: 'static,
    {
        Task::new(move || {
            let function_future = function_task.run();
            let value_task = self.clone();
            async move {
                let function = function_future.await;
                let value = value_task.run().await;
                function(value)
            }
        })
    }

    /// Combines two tasks using a function.
    ///
    /// Both computations are executed sequentially (this task first), and
    /// their results are combined using the provided function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second task.
    /// * `function` - A function to combine the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let combined = Task::pure(10).map2(Task::pure(20), |a, b| a + b);
    /// assert_eq!(combined.run().await, 30);
    /// # }
    /// ```
    pub fn map2<B, C, F>(self, other: Task<B>, function: F) -> Task<C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: Send + 'static,
        C: 'static,
    {
        let function = Arc::new(function);
        Task::new(move || {
            let first = self.run();
            let other = other.clone();
            let function = Arc::clone(&function);
            async move {
                let first_value = first.await;
                let second_value = other.run().await;
                function(first_value, second_value)
            }
        })
    }

    /// Combines two tasks into a tuple.
    ///
    /// # Arguments
    ///
    /// * `other` - The second task.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let result = Task::pure(10).product(Task::pure(20)).run().await;
    /// assert_eq!(result, (10, 20));
    /// # }
    /// ```
    #[must_use]
    pub fn product<B>(self, other: Task<B>) -> Task<(A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Fixed-Arity Call Lifters
//
// Lift a direct function call into a Task without a separate currying
// step. The wrapped function runs once per run of the task; the arguments
// are cloned into each run. A panicking function is not caught here - the
// caller opted out of failure wrapping.
// =============================================================================

/// Lifts a unary synchronous call into a `Task`.
///
/// Equivalent to `lift_impure(function)(first)` without the currying step.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::{Task, call};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = call(|x: i32| x * 2, 21);
/// assert_eq!(task.run().await, 42);
/// # }
/// ```
pub fn call<T1, Z, F>(function: F, first: T1) -> Task<Z>
where
    F: Fn(T1) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    Task::new(move || {
        let value = function(first.clone());
        async move { value }
    })
}

/// Lifts a binary synchronous call into a `Task`.
pub fn call2<T1, T2, Z, F>(function: F, first: T1, second: T2) -> Task<Z>
where
    F: Fn(T1, T2) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    Task::new(move || {
        let value = function(first.clone(), second.clone());
        async move { value }
    })
}

/// Lifts a ternary synchronous call into a `Task`.
pub fn call3<T1, T2, T3, Z, F>(function: F, first: T1, second: T2, third: T3) -> Task<Z>
where
    F: Fn(T1, T2, T3) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    Task::new(move || {
        let value = function(first.clone(), second.clone(), third.clone());
        async move { value }
    })
}

/// Lifts a four-argument synchronous call into a `Task`.
pub fn call4<T1, T2, T3, T4, Z, F>(
    function: F,
    first: T1,
    second: T2,
    third: T3,
    fourth: T4,
) -> Task<Z>
where
    F: Fn(T1, T2, T3, T4) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    T4: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    Task::new(move || {
        let value = function(
            first.clone(),
            second.clone(),
            third.clone(),
            fourth.clone(),
        );
        async move { value }
    })
}

/// Lifts a five-argument synchronous call into a `Task`.
pub fn call5<T1, T2, T3, T4, T5, Z, F>(
    function: F,
    first: T1,
    second: T2,
    third: T3,
    fourth: T4,
    fifth: T5,
) -> Task<Z>
where
    F: Fn(T1, T2, T3, T4, T5) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    T4: Clone + Send + Sync + 'static,
    T5: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    Task::new(move || {
        let value = function(
            first.clone(),
            second.clone(),
            third.clone(),
            fourth.clone(),
            fifth.clone(),
        );
        async move { value }
    })
}

// =============================================================================
// Fixed-Arity Fallible Call Lifters
//
// The wrapped function returns a future that may fail. The produced task
// always settles: success becomes Either::Right, failure becomes
// Either::Left. The run future itself never fails.
// =============================================================================

/// Lifts a unary fallible asynchronous call into a `Task`.
///
/// A failing function settles the task with `Either::Left(error)` rather
/// than failing the run future itself; failure is data, observed by
/// matching on the result.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
/// use kleisli::effect::{Task, try_call};
///
/// async fn reciprocal(x: i32) -> Result<i32, String> {
///     if x == 0 {
///         Err("division by zero".to_string())
///     } else {
///         Ok(100 / x)
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = try_call(reciprocal, 4);
/// assert_eq!(task.run().await, Either::Right(25));
///
/// let task = try_call(reciprocal, 0);
/// assert_eq!(task.run().await, Either::Left("division by zero".to_string()));
/// # }
/// ```
pub fn try_call<T1, Z, E, F, Fut>(function: F, first: T1) -> Task<Either<E, Z>>
where
    F: Fn(T1) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    Task::new(move || {
        let future = function(first.clone());
        async move {
            match future.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(error),
            }
        }
    })
}

/// Lifts a binary fallible asynchronous call into a `Task`.
pub fn try_call2<T1, T2, Z, E, F, Fut>(function: F, first: T1, second: T2) -> Task<Either<E, Z>>
where
    F: Fn(T1, T2) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    Task::new(move || {
        let future = function(first.clone(), second.clone());
        async move {
            match future.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(error),
            }
        }
    })
}

/// Lifts a ternary fallible asynchronous call into a `Task`.
pub fn try_call3<T1, T2, T3, Z, E, F, Fut>(
    function: F,
    first: T1,
    second: T2,
    third: T3,
) -> Task<Either<E, Z>>
where
    F: Fn(T1, T2, T3) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    Task::new(move || {
        let future = function(first.clone(), second.clone(), third.clone());
        async move {
            match future.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(error),
            }
        }
    })
}

/// Lifts a four-argument fallible asynchronous call into a `Task`.
pub fn try_call4<T1, T2, T3, T4, Z, E, F, Fut>(
    function: F,
    first: T1,
    second: T2,
    third: T3,
    fourth: T4,
) -> Task<Either<E, Z>>
where
    F: Fn(T1, T2, T3, T4) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    T4: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    Task::new(move || {
        let future = function(
            first.clone(),
            second.clone(),
            third.clone(),
            fourth.clone(),
        );
        async move {
            match future.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(error),
            }
        }
    })
}

/// Lifts a five-argument fallible asynchronous call into a `Task`.
pub fn try_call5<T1, T2, T3, T4, T5, Z, E, F, Fut>(
    function: F,
    first: T1,
    second: T2,
    third: T3,
    fourth: T4,
    fifth: T5,
) -> Task<Either<E, Z>>
where
    F: Fn(T1, T2, T3, T4, T5) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    T4: Clone + Send + Sync + 'static,
    T5: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    Task::new(move || {
        let future = function(
            first.clone(),
            second.clone(),
            third.clone(),
            fourth.clone(),
            fifth.clone(),
        );
        async move {
            match future.await {
                Ok(value) => Either::Right(value),
                Err(error) => Either::Left(error),
            }
        }
    })
}

// =============================================================================
// Curried Lifter Builders
//
// These return a closure awaiting concrete arguments; calling the closure
// produces the corresponding call*/try_call* task.
// =============================================================================

/// Converts an impure unary function into a task-producing function.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::{Task, lift_impure};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let doubled = lift_impure(|x: i32| x * 2);
/// assert_eq!(doubled(21).run().await, 42);
/// assert_eq!(doubled(5).run().await, 10);
/// # }
/// ```
pub fn lift_impure<T1, Z, F>(function: F) -> impl Fn(T1) -> Task<Z>
where
    F: Fn(T1) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    let function = Arc::new(function);
    move |first: T1| {
        let function = Arc::clone(&function);
        Task::new(move || {
            let value = function(first.clone());
            async move { value }
        })
    }
}

/// Converts an impure binary function into a task-producing function.
pub fn lift_impure2<T1, T2, Z, F>(function: F) -> impl Fn(T1, T2) -> Task<Z>
where
    F: Fn(T1, T2) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    let function = Arc::new(function);
    move |first: T1, second: T2| {
        let function = Arc::clone(&function);
        Task::new(move || {
            let value = function(first.clone(), second.clone());
            async move { value }
        })
    }
}

/// Converts an impure ternary function into a task-producing function.
pub fn lift_impure3<T1, T2, T3, Z, F>(function: F) -> impl Fn(T1, T2, T3) -> Task<Z>
where
    F: Fn(T1, T2, T3) -> Z + Send + Sync + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    Z: Send + 'static,
{
    let function = Arc::new(function);
    move |first: T1, second: T2, third: T3| {
        let function = Arc::clone(&function);
        Task::new(move || {
            let value = function(first.clone(), second.clone(), third.clone());
            async move { value }
        })
    }
}

/// Converts a fallible unary asynchronous function into a task-producing
/// function.
///
/// The produced tasks always settle; failure arrives as
/// `Either::Left(error)`.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
/// use kleisli::effect::{Task, lift_fallible};
///
/// async fn parse(input: String) -> Result<i32, String> {
///     input.parse().map_err(|_| format!("bad input: {input}"))
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let parser = lift_fallible(parse);
/// assert_eq!(parser("42".to_string()).run().await, Either::Right(42));
/// assert!(parser("oops".to_string()).run().await.is_left());
/// # }
/// ```
pub fn lift_fallible<T1, Z, E, F, Fut>(function: F) -> impl Fn(T1) -> Task<Either<E, Z>>
where
    F: Fn(T1) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    let function = Arc::new(function);
    move |first: T1| {
        let function = Arc::clone(&function);
        Task::new(move || {
            let future = function(first.clone());
            async move {
                match future.await {
                    Ok(value) => Either::Right(value),
                    Err(error) => Either::Left(error),
                }
            }
        })
    }
}

/// Converts a fallible binary asynchronous function into a task-producing
/// function.
pub fn lift_fallible2<T1, T2, Z, E, F, Fut>(function: F) -> impl Fn(T1, T2) -> Task<Either<E, Z>>
where
    F: Fn(T1, T2) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    let function = Arc::new(function);
    move |first: T1, second: T2| {
        let function = Arc::clone(&function);
        Task::new(move || {
            let future = function(first.clone(), second.clone());
            async move {
                match future.await {
                    Ok(value) => Either::Right(value),
                    Err(error) => Either::Left(error),
                }
            }
        })
    }
}

/// Converts a fallible ternary asynchronous function into a task-producing
/// function.
pub fn lift_fallible3<T1, T2, T3, Z, E, F, Fut>(
    function: F,
) -> impl Fn(T1, T2, T3) -> Task<Either<E, Z>>
where
    F: Fn(T1, T2, T3) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Z, E>> + Send + 'static,
    T1: Clone + Send + Sync + 'static,
    T2: Clone + Send + Sync + 'static,
    T3: Clone + Send + Sync + 'static,
    Z: 'static,
    E: 'static,
{
    let function = Arc::new(function);
    move |first: T1, second: T2, third: T3| {
        let function = Arc::clone(&function);
        Task::new(move || {
            let future = function(first.clone(), second.clone(), third.clone());
            async move {
                match future.await {
                    Ok(value) => Either::Right(value),
                    Err(error) => Either::Left(error),
                }
            }
        })
    }
}

// =============================================================================
// Traversal from Maybe
// =============================================================================

impl<A: 'static> Maybe<A> {
    /// Turns an optional effectful computation into an effectful optional.
    ///
    /// For `Just(value)` the function is applied and its task's result is
    /// wrapped back into `Just`. For `Nothing` the absence is lifted into
    /// a pure task without invoking the function.
    ///
    /// # Arguments
    ///
    /// * `function` - A function producing the task for the present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let task = Maybe::just(21).traverse_task(|n| Task::pure(n * 2));
    /// assert_eq!(task.run().await, Maybe::just(42));
    ///
    /// let task = Maybe::<i32>::nothing().traverse_task(|n| Task::pure(n * 2));
    /// assert_eq!(task.run().await, Maybe::nothing());
    /// # }
    /// ```
    pub fn traverse_task<B, F>(self, function: F) -> Task<Maybe<B>>
    where
        F: FnOnce(A) -> Task<B>,
        B: Clone + Send + Sync + 'static,
    {
        match self {
            Maybe::Nothing => Task::pure(Maybe::nothing()),
            Maybe::Just(value) => function(value).fmap(Maybe::just),
        }
    }
}

impl<A> Maybe<Task<A>> {
    /// Turns an optional task inside out.
    ///
    /// Equivalent to `traverse_task(|task| task)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    /// use kleisli::effect::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let optional_task = Maybe::just(Task::pure(42));
    /// assert_eq!(optional_task.sequence_task().run().await, Maybe::just(42));
    /// # }
    /// ```
    pub fn sequence_task(self) -> Task<Maybe<A>>
    where
        A: Clone + Send + Sync + 'static,
    {
        self.traverse_task(|task| task)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<A> std::fmt::Display for Task<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Task>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[test]
    fn test_display_task() {
        let task = Task::pure(42);
        assert_eq!(format!("{task}"), "<Task>");
    }

    // =========================================================================
    // Core Operation Tests
    // =========================================================================

    #[tokio::test]
    async fn test_task_pure_and_run() {
        let task = Task::pure(42);
        assert_eq!(task.run().await, 42);
    }

    #[tokio::test]
    async fn test_task_new_and_run() {
        let task = Task::new(|| async { 10 + 20 });
        assert_eq!(task.run().await, 30);
    }

    #[tokio::test]
    async fn test_task_fmap() {
        let task = Task::pure(21).fmap(|x| x * 2);
        assert_eq!(task.run().await, 42);
    }

    #[tokio::test]
    async fn test_task_flat_map() {
        let task = Task::pure(10).flat_map(|x| Task::pure(x * 2));
        assert_eq!(task.run().await, 20);
    }

    #[tokio::test]
    async fn test_task_and_then() {
        let task = Task::pure(10).and_then(|x| Task::pure(x + 5));
        assert_eq!(task.run().await, 15);
    }

    #[tokio::test]
    async fn test_task_then() {
        let task = Task::pure(10).then(Task::pure(20));
        assert_eq!(task.run().await, 20);
    }

    #[tokio::test]
    async fn test_task_apply() {
        let function_task = Task::pure(|x: i32| x * 2);
        let task = Task::pure(21).apply(function_task);
        assert_eq!(task.run().await, 42);
    }

    #[tokio::test]
    async fn test_task_map2() {
        let task = Task::pure(10).map2(Task::pure(20), |a, b| a + b);
        assert_eq!(task.run().await, 30);
    }

    #[tokio::test]
    async fn test_task_product() {
        let task = Task::pure(10).product(Task::pure(20));
        assert_eq!(task.run().await, (10, 20));
    }

    #[tokio::test]
    async fn test_task_clone_shares_recipe() {
        let task = Task::pure(7).fmap(|x| x + 1);
        let cloned = task.clone();
        assert_eq!(task.run().await, 8);
        assert_eq!(cloned.run().await, 8);
    }

    // =========================================================================
    // Lifter Tests
    // =========================================================================

    #[tokio::test]
    async fn test_call_family_arities() {
        assert_eq!(call(|a: i32| a, 1).run().await, 1);
        assert_eq!(call2(|a: i32, b: i32| a + b, 1, 2).run().await, 3);
        assert_eq!(call3(|a: i32, b: i32, c: i32| a + b + c, 1, 2, 3).run().await, 6);
        assert_eq!(
            call4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d, 1, 2, 3, 4)
                .run()
                .await,
            10
        );
        assert_eq!(
            call5(
                |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e,
                1,
                2,
                3,
                4,
                5
            )
            .run()
            .await,
            15
        );
    }

    #[tokio::test]
    async fn test_try_call_success_and_failure() {
        async fn checked(x: i32) -> Result<i32, &'static str> {
            if x >= 0 { Ok(x * 2) } else { Err("negative") }
        }

        assert_eq!(try_call(checked, 21).run().await, Either::Right(42));
        assert_eq!(try_call(checked, -1).run().await, Either::Left("negative"));
    }

    #[tokio::test]
    async fn test_try_call_family_arities() {
        async fn sum3(a: i32, b: i32, c: i32) -> Result<i32, &'static str> {
            Ok(a + b + c)
        }
        async fn sum4(a: i32, b: i32, c: i32, d: i32) -> Result<i32, &'static str> {
            Ok(a + b + c + d)
        }
        async fn sum5(a: i32, b: i32, c: i32, d: i32, e: i32) -> Result<i32, &'static str> {
            Ok(a + b + c + d + e)
        }

        assert_eq!(try_call3(sum3, 1, 2, 3).run().await, Either::Right(6));
        assert_eq!(try_call4(sum4, 1, 2, 3, 4).run().await, Either::Right(10));
        assert_eq!(try_call5(sum5, 1, 2, 3, 4, 5).run().await, Either::Right(15));
    }

    #[tokio::test]
    async fn test_curried_lifter_arities() {
        let add3 = lift_impure3(|a: i32, b: i32, c: i32| a + b + c);
        assert_eq!(add3(1, 2, 3).run().await, 6);

        async fn checked_add(a: i32, b: i32) -> Result<i32, &'static str> {
            a.checked_add(b).ok_or("overflow")
        }
        let adder = lift_fallible2(checked_add);
        assert_eq!(adder(40, 2).run().await, Either::Right(42));
        assert_eq!(adder(i32::MAX, 1).run().await, Either::Left("overflow"));

        async fn clamped_sum(a: i32, b: i32, c: i32) -> Result<i32, &'static str> {
            let total = a + b + c;
            if total > 100 { Err("too large") } else { Ok(total) }
        }
        let summed = lift_fallible3(clamped_sum);
        assert_eq!(summed(1, 2, 3).run().await, Either::Right(6));
        assert_eq!(summed(50, 50, 50).run().await, Either::Left("too large"));
    }

    #[tokio::test]
    async fn test_lift_impure_is_reusable() {
        let doubled = lift_impure(|x: i32| x * 2);
        assert_eq!(doubled(1).run().await, 2);
        assert_eq!(doubled(2).run().await, 4);
    }

    #[tokio::test]
    async fn test_lift_fallible_wraps_errors() {
        async fn parse(input: &'static str) -> Result<i32, std::num::ParseIntError> {
            input.parse()
        }

        let parser = lift_fallible(parse);
        assert_eq!(parser("42").run().await, Either::Right(42));
        assert!(parser("oops").run().await.is_left());
    }

    // =========================================================================
    // Traversal Tests
    // =========================================================================

    #[tokio::test]
    async fn test_traverse_task_just() {
        let task = Maybe::just(21).traverse_task(|n| Task::pure(n * 2));
        assert_eq!(task.run().await, Maybe::just(42));
    }

    #[tokio::test]
    async fn test_traverse_task_nothing() {
        let task = Maybe::<i32>::nothing().traverse_task(|n| Task::pure(n * 2));
        assert_eq!(task.run().await, Maybe::nothing());
    }

    #[tokio::test]
    async fn test_sequence_task() {
        let task = Maybe::just(Task::pure(42)).sequence_task();
        assert_eq!(task.run().await, Maybe::just(42));

        let task = Maybe::<Task<i32>>::nothing().sequence_task();
        assert_eq!(task.run().await, Maybe::nothing());
    }
}
