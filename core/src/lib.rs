//! # Statekit Core
//!
//! Core traits for a predictable, single-source-of-truth state container.
//!
//! ## Core Concepts
//!
//! - **State**: Plain owned data describing the whole application
//! - **Action**: An immutable value describing an intended state change
//! - **Reducer**: `(State, Action) → State`, expressed as an in-place update
//!   of state the reducer exclusively borrows
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: UI → action → reducer → state → UI
//! - Reducers are total: an action a reducer does not care about is a no-op
//! - Small reducers own one slice of state and are composed into a root
//!   reducer (see [`composition`])
//!
//! ## Example
//!
//! ```
//! use statekit_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Reset => state.count = 0,
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

pub mod composition;

/// Action module - the unified input type for reducers
///
/// Actions are plain values. Every action carries a string type tag that
/// names the kind of change it describes; the tag is what gets logged and
/// what appears on the wire.
pub mod action {
    use std::fmt::Debug;

    /// Marker trait for values that can be dispatched to a store
    ///
    /// Use `#[derive(Action)]` from `statekit-macros` on an enum to generate
    /// the implementation; the tag of each variant defaults to its name in
    /// `SCREAMING_SNAKE_CASE`.
    ///
    /// # Example
    ///
    /// ```
    /// use statekit_core::action::Action;
    ///
    /// #[derive(Clone, Debug)]
    /// enum Ping {
    ///     Ping,
    /// }
    ///
    /// impl Action for Ping {
    ///     fn action_type(&self) -> &'static str {
    ///         "PING"
    ///     }
    /// }
    ///
    /// assert_eq!(Ping::Ping.action_type(), "PING");
    /// ```
    pub trait Action: Clone + Debug + Send + 'static {
        /// The type tag of this action (e.g. `"ADD_TODO"`)
        fn action_type(&self) -> &'static str;

        /// The tag this action carries on the wire
        ///
        /// Same as [`action_type`](Self::action_type) unless the action
        /// stands in for an unknown one and kept the tag it arrived with.
        /// `#[derive(Action)]` overrides this for a variant marked
        /// `#[action(unrecognized)]`.
        fn tag(&self) -> &str {
            self.action_type()
        }
    }
}

/// Reducer module - the core trait for state transitions
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state (or state slice) this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// - Deterministic: same state and action always give the same result
    /// - Total: actions that are irrelevant to this reducer leave state
    ///   untouched
    /// - No side effects beyond diagnostic logging
    ///
    /// The store holds the only mutable reference to state, so updating in
    /// place is observationally the same as returning a new value. Shared
    /// records inside state (e.g. `Arc<T>` entries) must be replaced, not
    /// mutated, so that earlier snapshots stay valid.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to the current state
        /// - `action`: The action to process
        fn reduce(&self, state: &mut Self::State, action: Self::Action);
    }
}

// Re-export the traits at the crate root
pub use action::Action;
pub use reducer::Reducer;
