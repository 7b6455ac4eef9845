//! Reducers for the todo list.
//!
//! Each slice of [`AppState`] has its own reducer; [`app_reducer`] scopes
//! them onto their fields and combines them into the root reducer. Every
//! reducer is total: an action it does not handle leaves its slice alone.

use crate::actions::TodoAction;
use crate::types::{AppState, Filter, TodoId, Todos};
use statekit_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use statekit_core::reducer::Reducer;
use std::sync::Arc;

/// The root reducer type
pub type AppReducer = CombinedReducer<AppState, TodoAction>;

/// Builds the root reducer over `{todos, filter}`
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(TodosReducer, |s: &mut AppState| &mut s.todos)),
        Box::new(scope_reducer(FilterReducer, |s: &mut AppState| &mut s.filter)),
    ])
}

/// Reducer for the todo collection
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Replaces every todo with the given id by a toggled copy
    ///
    /// Other entries keep their `Arc`, so readers holding an older snapshot
    /// never see a record change underneath them.
    fn toggle(todos: &mut Todos, id: TodoId) {
        for slot in todos.iter_mut().filter(|todo| todo.id == id) {
            *slot = Arc::new(slot.toggled());
        }
    }
}

impl Reducer for TodosReducer {
    type State = Todos;
    type Action = TodoAction;

    fn reduce(&self, todos: &mut Todos, action: TodoAction) {
        match action {
            TodoAction::AddTodo(todo) => todos.push(todo),
            TodoAction::ToggleTodo(id) => Self::toggle(todos, id),
            TodoAction::DeleteCompleted => todos.retain(|todo| !todo.completed),
            TodoAction::SetFilter(_) | TodoAction::Unrecognized(_) => {},
        }
    }
}

/// Reducer for the visibility filter
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = Filter;
    type Action = TodoAction;

    fn reduce(&self, filter: &mut Filter, action: TodoAction) {
        if let TodoAction::SetFilter(next) = action {
            *filter = next;
        }
    }
}
