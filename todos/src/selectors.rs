//! Derived views over the todo state.

use crate::types::{Filter, Todos};
use std::sync::Arc;

/// The todos visible under `filter`, in collection order
///
/// Always returns a new collection. Entries are shared with `todos`.
#[must_use]
pub fn visible_todos(todos: &Todos, filter: Filter) -> Todos {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .map(Arc::clone)
        .collect()
}

/// Whether at least one todo is completed
#[must_use]
pub fn has_completed(todos: &Todos) -> bool {
    todos.iter().any(|todo| todo.completed)
}
