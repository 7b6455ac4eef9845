//! Domain types for the todo list.
//!
//! The application state is a single value with exactly two slices: the
//! ordered todo collection and the visibility filter. Todo records are
//! immutable once created and shared through `Arc`, so a state snapshot
//! taken before a dispatch never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The id handed to the first todo of an empty list
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier, unique within the list when assigned by the add container
    pub id: TodoId,
    /// The text the user entered
    pub value: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo
    #[must_use]
    pub fn new(id: impl Into<TodoId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            completed: false,
        }
    }

    /// Returns a copy of this todo with `completed` inverted
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which todos are visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Filter {
    /// Every todo
    #[default]
    ShowAll,
    /// Todos that are not completed
    ShowActive,
    /// Completed todos
    ShowCompleted,
}

impl Filter {
    /// All filters, in the order the filter bar shows them
    pub const ALL: [Self; 3] = [Self::ShowAll, Self::ShowActive, Self::ShowCompleted];

    /// Wire name of the filter (`"SHOW_ALL"`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowActive => "SHOW_ACTIVE",
            Self::ShowCompleted => "SHOW_COMPLETED",
        }
    }

    /// Short label used by the filter bar
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShowAll => "All",
            Self::ShowActive => "Active",
            Self::ShowCompleted => "Completed",
        }
    }

    /// Whether `todo` is visible under this filter
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowActive => !todo.completed,
            Self::ShowCompleted => todo.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no filter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter \"{0}\", expected SHOW_ALL, SHOW_ACTIVE or SHOW_COMPLETED")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// The ordered todo collection
pub type Todos = Vec<Arc<Todo>>;

/// Complete application state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Todos in insertion order
    pub todos: Todos,
    /// The active visibility filter
    pub filter: Filter,
}

impl AppState {
    /// Creates an empty state showing all todos
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state with the given filter
    #[must_use]
    pub const fn with_filter(filter: Filter) -> Self {
        Self {
            todos: Vec::new(),
            filter,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the first todo with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id).map(AsRef::as_ref)
    }

    /// Returns the highest id in the list
    #[must_use]
    pub fn max_id(&self) -> Option<TodoId> {
        self.todos.iter().map(|t| t.id).max()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(TodoId::new(42).to_string(), "42");
        assert_eq!(TodoId::FIRST.next(), TodoId::new(2));
    }

    #[test]
    fn todo_new_is_active() {
        let todo = Todo::new(1, "milk");

        assert_eq!(todo.id, TodoId::new(1));
        assert_eq!(todo.value, "milk");
        assert!(!todo.completed);
    }

    #[test]
    fn todo_toggled_leaves_original() {
        let todo = Todo::new(1, "milk");
        let done = todo.toggled();

        assert!(done.completed);
        assert!(!todo.completed);
        assert_eq!(done.toggled(), todo);
    }

    #[test]
    fn filter_round_trips_through_str() {
        for filter in Filter::ALL {
            assert_eq!(filter.as_str().parse::<Filter>(), Ok(filter));
        }
        assert_eq!(
            "show_all".parse::<Filter>(),
            Err(UnknownFilter("show_all".to_string()))
        );
    }

    #[test]
    fn filter_serializes_as_wire_name() {
        let json = serde_json::to_string(&Filter::ShowCompleted).unwrap();
        assert_eq!(json, "\"SHOW_COMPLETED\"");
    }

    #[test]
    fn filter_matches() {
        let active = Todo::new(1, "a");
        let done = active.toggled();

        assert!(Filter::ShowAll.matches(&active) && Filter::ShowAll.matches(&done));
        assert!(Filter::ShowActive.matches(&active) && !Filter::ShowActive.matches(&done));
        assert!(!Filter::ShowCompleted.matches(&active) && Filter::ShowCompleted.matches(&done));
    }

    #[test]
    fn app_state_counts() {
        let mut state = AppState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.max_id(), None);
        assert_eq!(state.filter, Filter::ShowAll);

        state.todos.push(Arc::new(Todo::new(3, "a")));
        state.todos.push(Arc::new(Todo::new(1, "b").toggled()));

        assert_eq!(state.count(), 2);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.max_id(), Some(TodoId::new(3)));
        assert_eq!(state.get(TodoId::new(1)).map(|t| t.value.as_str()), Some("b"));
        assert!(state.get(TodoId::new(2)).is_none());
    }
}
