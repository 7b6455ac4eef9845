//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on one field of a larger state
//!
//! Together they build a root reducer out of slice reducers: scope each slice
//! reducer onto its field, then combine the scoped reducers.
//!
//! # Examples
//!
//! ```
//! use statekit_core::Reducer;
//! use statekit_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Debug, Default)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &mut i32, action: AppAction) {
//!         if matches!(action, AppAction::Increment) {
//!             *state += 1;
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &mut String, action: AppAction) {
//!         if let AppAction::SetName(name) = action {
//!             *state = name;
//!         }
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(CountReducer, |s: &mut AppState| &mut s.count)),
//!     Box::new(scope_reducer(NameReducer, |s: &mut AppState| &mut s.name)),
//! ]);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Increment);
//! root.reduce(&mut state, AppAction::SetName("Alice".to_string()));
//! assert_eq!(state.count, 1);
//! assert_eq!(state.name, "Alice");
//! ```

use crate::reducer::Reducer;
use std::marker::PhantomData;

/// A boxed reducer that can be shared across threads.
pub type BoxedReducer<S, A> = Box<dyn Reducer<State = S, Action = A> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence with its own clone of the action. Every
/// reducer sees the state as left by the previous one.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
#[must_use]
pub fn combine_reducers<S, A>(reducers: Vec<BoxedReducer<S, A>>) -> CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    reducers: Vec<BoxedReducer<S, A>>,
}

impl<S, A> CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    /// Number of reducers being combined
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no reducers were combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A> std::fmt::Debug for CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("reducers", &self.reducers.len())
            .finish()
    }
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone());
        }
    }
}

/// Scopes a reducer to operate on one field of a larger state.
///
/// The `lens` borrows the child state out of the parent, so the child
/// reducer updates the field directly and the rest of the parent is left
/// untouched.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (a field of `S`)
/// - `A`: The action type
/// - `R`: The child reducer
///
/// # Examples
///
/// ```
/// use statekit_core::Reducer;
/// use statekit_core::composition::scope_reducer;
///
/// struct Double;
///
/// impl Reducer for Double {
///     type State = i32;
///     type Action = ();
///
///     fn reduce(&self, state: &mut i32, _action: ()) {
///         *state *= 2;
///     }
/// }
///
/// #[derive(Default)]
/// struct Parent {
///     value: i32,
///     label: &'static str,
/// }
///
/// let scoped = scope_reducer(Double, |p: &mut Parent| &mut p.value);
/// let mut parent = Parent { value: 4, label: "kept" };
/// scoped.reduce(&mut parent, ());
/// assert_eq!(parent.value, 8);
/// assert_eq!(parent.label, "kept");
/// ```
pub fn scope_reducer<S, SubS, A, R>(reducer: R, lens: fn(&mut S) -> &mut SubS) -> ScopedReducer<S, SubS, A, R>
where
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        lens,
        _phantom: PhantomData,
    }
}

/// A scoped reducer that operates on one field of a larger state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
    _phantom: PhantomData<fn(A)>,
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        self.reducer.reduce((self.lens)(state), action);
    }
}
