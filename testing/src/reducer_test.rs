//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use statekit_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S, &S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Several `when_action` calls are applied in order. State assertions
/// receive the resulting state and the initial state, so "unchanged"
/// checks don't need a second copy of the fixture.
///
/// # Example
///
/// ```ignore
/// use statekit_testing::ReducerTest;
///
/// ReducerTest::new(TodosReducer)
///     .given_state(Vec::new())
///     .when_action(add_todo(Todo::new(1, "milk")))
///     .then_state(|todos| {
///         assert_eq!(todos.len(), 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A>
where
    R: Reducer<State = S, Action = A>,
{
    reducer: R,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
}

impl<R, S, A> ReducerTest<R, S, A>
where
    R: Reducer<State = S, Action = A>,
    S: Clone + 'static,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to apply (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions
            .push(Box::new(move |state: &S, _initial: &S| assertion(state)));
        self
    }

    /// Assert the resulting state equals `expected` (Then)
    #[must_use]
    pub fn then_state_eq(mut self, expected: S) -> Self
    where
        S: PartialEq + std::fmt::Debug,
    {
        self.state_assertions.push(Box::new(move |state: &S, _initial: &S| {
            assert_eq!(state, &expected, "Resulting state differs from expected");
        }));
        self
    }

    /// Assert the resulting state equals the initial state (Then)
    #[must_use]
    pub fn then_unchanged(mut self) -> Self
    where
        S: PartialEq + std::fmt::Debug,
    {
        self.state_assertions.push(Box::new(|state: &S, initial: &S| {
            assert_eq!(state, initial, "Expected state to be unchanged");
        }));
        self
    }

    /// Add an assertion comparing resulting and initial state (Then)
    #[must_use]
    pub fn then_compare<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S, &S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the initial state or any action is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let initial = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let mut state = initial.clone();
        for action in self.actions {
            self.reducer.reduce(&mut state, action);
        }

        for assertion in self.state_assertions {
            assertion(&state, &initial);
        }
    }
}

/// Helper assertions for reducer laws
pub mod assertions {
    use statekit_core::reducer::Reducer;
    use std::fmt::Debug;

    /// Assert that `action` leaves `state` unchanged
    ///
    /// # Panics
    ///
    /// Panics if the reduced state differs from the input.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_identity<R, S, A>(reducer: &R, state: &S, action: A)
    where
        R: Reducer<State = S, Action = A>,
        S: Clone + PartialEq + Debug,
        A: Debug,
    {
        let description = format!("{action:?}");
        let mut next = state.clone();
        reducer.reduce(&mut next, action);
        assert_eq!(
            &next, state,
            "Expected {description} to leave state unchanged"
        );
    }

    /// Apply every action in order and return the final state
    #[must_use]
    pub fn reduce_all<R, S, A>(reducer: &R, mut state: S, actions: impl IntoIterator<Item = A>) -> S
    where
        R: Reducer<State = S, Action = A>,
    {
        for action in actions {
            reducer.reduce(&mut state, action);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Ignore,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            match action {
                TestAction::Increment => state.count += 1,
                TestAction::Decrement => state.count -= 1,
                TestAction::Ignore => {},
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_sequence() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Decrement)
            .then_state_eq(TestState { count: 3 })
            .then_compare(|state, initial| {
                assert_eq!(initial.count - state.count, 2);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_unchanged() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 9 })
            .when_action(TestAction::Ignore)
            .then_unchanged()
            .run();
    }

    #[test]
    #[should_panic(expected = "Initial state must be set")]
    fn test_missing_state_panics() {
        ReducerTest::new(TestReducer)
            .when_action(TestAction::Increment)
            .run();
    }

    #[test]
    fn test_assert_identity() {
        assertions::assert_identity(&TestReducer, &TestState { count: 1 }, TestAction::Ignore);
    }

    #[test]
    #[should_panic(expected = "to leave state unchanged")]
    fn test_assert_identity_detects_change() {
        assertions::assert_identity(&TestReducer, &TestState { count: 1 }, TestAction::Increment);
    }

    #[test]
    fn test_reduce_all() {
        let state = assertions::reduce_all(
            &TestReducer,
            TestState { count: 0 },
            [TestAction::Increment, TestAction::Increment, TestAction::Decrement],
        );
        assert_eq!(state, TestState { count: 1 });
    }
}
