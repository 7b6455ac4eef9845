//! # Statekit Testing
//!
//! Testing utilities and helpers for statekit reducers.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then builder for reducer tests
//! - [`assertions`]: assertion helpers for reducer laws
//! - [`properties`]: the same laws as `proptest` checks
//!
//! ## Example
//!
//! ```ignore
//! use statekit_testing::ReducerTest;
//!
//! ReducerTest::new(FilterReducer)
//!     .given_state(Filter::ShowAll)
//!     .when_action(set_filter(Filter::ShowActive))
//!     .then_state_eq(Filter::ShowActive)
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Property-based testing utilities
///
/// Helpers meant to be called from inside a `proptest!` block; they return
/// `TestCaseError` instead of panicking so proptest can shrink the input.
pub mod properties {
    use proptest::prelude::*;
    use statekit_core::reducer::Reducer;
    use std::fmt::Debug;

    /// Check that `action` leaves `state` unchanged
    ///
    /// # Errors
    ///
    /// Fails the test case if the reduced state differs from the input.
    pub fn prop_assert_identity<R, S, A>(reducer: &R, state: &S, action: A) -> Result<(), TestCaseError>
    where
        R: Reducer<State = S, Action = A>,
        S: Clone + PartialEq + Debug,
    {
        let mut next = state.clone();
        reducer.reduce(&mut next, action);
        prop_assert_eq!(&next, state);
        Ok(())
    }

    /// Check that applying `action` twice gives back the original state
    ///
    /// # Errors
    ///
    /// Fails the test case if the state after two applications differs
    /// from the input.
    pub fn prop_assert_involution<R, S, A>(reducer: &R, state: &S, action: &A) -> Result<(), TestCaseError>
    where
        R: Reducer<State = S, Action = A>,
        S: Clone + PartialEq + Debug,
        A: Clone,
    {
        let mut next = state.clone();
        reducer.reduce(&mut next, action.clone());
        reducer.reduce(&mut next, action.clone());
        prop_assert_eq!(&next, state);
        Ok(())
    }
}
