//! Container bindings between the store and the UI.
//!
//! A container holds a handle to the [`AppStore`], selects the slice of
//! state its component renders, and exposes callbacks that build actions
//! and dispatch them. Components never touch the store directly.

use crate::actions::{add_todo, delete_completed_todos, set_filter, toggle_todo};
use crate::selectors::{has_completed, visible_todos};
use crate::types::{AppState, Filter, Todo, TodoId, Todos};
use crate::AppStore;

/// The id the next added todo should get so it does not collide with any
/// todo currently in the list
fn next_free_id(state: &AppState) -> TodoId {
    state.max_id().map_or(TodoId::FIRST, TodoId::next)
}

/// Binds the add-todo form
///
/// Ids are handed out sequentially, starting after the highest id already
/// in the store, so a fresh container over a populated store never reuses
/// a live id.
#[derive(Debug)]
pub struct AddTodoContainer {
    store: AppStore,
    next_id: TodoId,
}

impl AddTodoContainer {
    /// Creates the container, seeding its id counter from the store
    pub async fn new(store: AppStore) -> Self {
        let next_id = store.state(next_free_id).await;
        Self { store, next_id }
    }

    /// The id the next successful add will use, as far as this container knows
    #[must_use]
    pub const fn next_id(&self) -> TodoId {
        self.next_id
    }

    /// Form submission callback
    ///
    /// Dispatches an add action for `value` and returns the id it was given.
    /// Blank input (empty after trimming) is refused and nothing is
    /// dispatched. The text is stored as entered.
    pub async fn on_add_todo(&mut self, value: &str) -> Option<TodoId> {
        if value.trim().is_empty() {
            tracing::warn!("Refusing to add a blank todo");
            return None;
        }

        let live = self.store.state(next_free_id).await;
        let id = self.next_id.max(live);
        self.next_id = id.next();

        self.store.send(add_todo(Todo::new(id, value))).await;
        Some(id)
    }
}

/// Props for the todo list component
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleTodosProps {
    /// Todos visible under the current filter
    pub todos: Todos,
}

/// Binds the todo list
#[derive(Clone, Debug)]
pub struct VisibleTodosContainer {
    store: AppStore,
}

impl VisibleTodosContainer {
    /// Creates the container
    #[must_use]
    pub const fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Selects the visible todos
    pub async fn props(&self) -> VisibleTodosProps {
        let todos = self
            .store
            .state(|state| visible_todos(&state.todos, state.filter))
            .await;
        VisibleTodosProps { todos }
    }

    /// Item click callback: toggles the todo
    pub async fn on_todo_click(&self, id: TodoId) {
        self.store.send(toggle_todo(id)).await;
    }
}

/// Props for the filter bar component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FiltersProps {
    /// The active filter
    pub filter: Filter,
    /// True when at least one todo is completed; shows the delete control
    pub active_status: bool,
}

/// Binds the filter bar and the delete-completed control
#[derive(Clone, Debug)]
pub struct FiltersContainer {
    store: AppStore,
}

impl FiltersContainer {
    /// Creates the container
    #[must_use]
    pub const fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Selects the current filter and whether anything can be deleted
    pub async fn props(&self) -> FiltersProps {
        self.store
            .state(|state| FiltersProps {
                filter: state.filter,
                active_status: has_completed(&state.todos),
            })
            .await
    }

    /// Filter link click callback
    pub async fn on_filter_click(&self, filter: Filter) {
        self.store.send(set_filter(filter)).await;
    }

    /// Delete-completed button callback
    pub async fn on_delete_completed(&self) {
        self.store.send(delete_completed_todos()).await;
    }
}
