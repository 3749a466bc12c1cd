#![cfg(feature = "effect")]
//! Property-based tests for Task Monad laws.
//!
//! This module verifies that the Task type satisfies the Monad laws:
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! Also verifies Functor and Applicative laws. All laws are observed at
//! the only observation point a Task has: the value its run future
//! resolves to.

use kleisli::effect::Task;
use proptest::prelude::*;

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).flat_map(f) == f(a)
    ///
    /// Wrapping a value in pure and then flat_mapping over it with a function
    /// is the same as just applying the function to the value.
    #[test]
    fn prop_task_monad_left_identity(value: i32) {
        let function = |n: i32| Task::pure(n.wrapping_mul(2));

        // We need to run the async tests in a tokio runtime
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(value).flat_map(function).run().await
        });
        let right_result = runtime.block_on(async {
            function(value).run().await
        });

        prop_assert_eq!(left_result, right_result);
    }

    /// Right Identity Law: m.flat_map(pure) == m
    ///
    /// flat_mapping a monad with pure returns the original monad.
    #[test]
    fn prop_task_monad_right_identity(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(value).flat_map(Task::pure).run().await
        });
        let right_result = value;

        prop_assert_eq!(left_result, right_result);
    }

    /// Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    ///
    /// The order of flat_map composition doesn't matter (modulo grouping).
    #[test]
    fn prop_task_monad_associativity(value: i32) {
        let function1 = |n: i32| Task::pure(n.wrapping_add(1));
        let function2 = |n: i32| Task::pure(n.wrapping_mul(2));

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(value)
                .flat_map(function1)
                .flat_map(function2)
                .run()
                .await
        });
        let right_result = runtime.block_on(async {
            Task::pure(value)
                .flat_map(move |x| function1(x).flat_map(function2))
                .run()
                .await
        });

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: fmap(id) == id
    ///
    /// Mapping the identity function over a Task returns an equivalent Task.
    #[test]
    fn prop_task_functor_identity(value: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(value).fmap(|x| x).run().await
        });
        let right_result = value;

        prop_assert_eq!(left_result, right_result);
    }

    /// Functor Composition Law: fmap(f . g) == fmap(g) followed by fmap(f)
    ///
    /// Mapping a composed function is the same as composing the maps.
    #[test]
    fn prop_task_functor_composition(value: i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(value)
                .fmap(move |x| function2(function1(x)))
                .run()
                .await
        });
        let right_result = runtime.block_on(async {
            Task::pure(value)
                .fmap(function1)
                .fmap(function2)
                .run()
                .await
        });

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    /// Homomorphism Law: pure(f).apply-style(pure(x)) == pure(f(x))
    #[test]
    fn prop_task_applicative_homomorphism(value: i32) {
        let function = |x: i32| x.wrapping_mul(3);

        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(value).apply(Task::pure(function)).run().await
        });
        let right_result = runtime.block_on(async {
            Task::pure(function(value)).run().await
        });

        prop_assert_eq!(left_result, right_result);
    }

    /// map2 agrees with flat_map + fmap
    #[test]
    fn prop_task_map2_consistency(first: i32, second: i32) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let left_result = runtime.block_on(async {
            Task::pure(first)
                .map2(Task::pure(second), |a, b| a.wrapping_add(b))
                .run()
                .await
        });
        let right_result = runtime.block_on(async {
            Task::pure(first)
                .flat_map(move |a| Task::pure(second).fmap(move |b| a.wrapping_add(b)))
                .run()
                .await
        });

        prop_assert_eq!(left_result, right_result);
    }
}
