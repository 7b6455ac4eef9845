//! Actions and action creators.
//!
//! An action is a plain value describing one intended change. On the wire
//! it is a tagged record `{"type": "...", "payload": ...}`:
//!
//! ```json
//! {"type": "ADD_TODO", "payload": {"id": 1, "value": "milk", "completed": false}}
//! {"type": "TOGGLE_TODO", "payload": 1}
//! {"type": "SET_FILTER", "payload": "SHOW_ACTIVE"}
//! {"type": "DELETE_COMPLETED"}
//! ```
//!
//! Older producers select a filter by sending the filter name itself as the
//! type (`{"type": "SHOW_ACTIVE"}`). That shape is still accepted when
//! decoding and turns into [`TodoAction::SetFilter`]; it is never produced.

use crate::types::{Filter, Todo, TodoId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use statekit_core::Action as _;
use statekit_macros::Action;
use std::sync::Arc;

/// Everything that can happen to the todo list
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawAction", try_from = "RawAction")]
pub enum TodoAction {
    /// Append a todo to the list
    AddTodo(Arc<Todo>),

    /// Flip `completed` on the todo with this id
    ToggleTodo(TodoId),

    /// Change the visibility filter
    SetFilter(Filter),

    /// Remove every completed todo
    DeleteCompleted,

    /// A decoded action whose type no reducer handles; carries the type tag
    ///
    /// Only the decoder should build this variant. It encodes as
    /// `{"type": tag}` with no payload, so a tag that names a known action
    /// does not decode back to `Unrecognized`.
    #[action(unrecognized)]
    Unrecognized(String),
}

/// Builds an [`TodoAction::AddTodo`] action. The todo is not validated.
#[must_use]
pub fn add_todo(todo: Todo) -> TodoAction {
    tracing::info!(id = %todo.id, value = %todo.value, "Todo added");
    TodoAction::AddTodo(Arc::new(todo))
}

/// Builds a [`TodoAction::ToggleTodo`] action.
#[must_use]
pub fn toggle_todo(id: TodoId) -> TodoAction {
    tracing::info!(%id, "Todo toggled");
    TodoAction::ToggleTodo(id)
}

/// Builds a [`TodoAction::SetFilter`] action.
#[must_use]
pub fn set_filter(filter: Filter) -> TodoAction {
    tracing::info!(%filter, "Visibility changed");
    TodoAction::SetFilter(filter)
}

/// Builds a [`TodoAction::DeleteCompleted`] action.
#[must_use]
pub fn delete_completed_todos() -> TodoAction {
    tracing::info!("Completed todos deleted");
    TodoAction::DeleteCompleted
}

/// Errors raised while decoding an action from JSON
#[derive(Debug, thiserror::Error)]
pub enum ActionDecodeError {
    /// The input is not a JSON object with a string `type`
    #[error("invalid action JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The action type requires a payload but none was given
    #[error("action {action_type} requires a payload")]
    MissingPayload {
        /// The action type
        action_type: &'static str,
    },

    /// The payload does not have the shape the action type requires
    #[error("invalid payload for {action_type}: {source}")]
    InvalidPayload {
        /// The action type
        action_type: &'static str,
        /// What was wrong with the payload
        #[source]
        source: serde_json::Error,
    },
}

/// The untyped wire form of an action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// Type tag
    #[serde(rename = "type")]
    pub action_type: String,
    /// Optional payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl TodoAction {
    /// Decodes an action from its JSON wire form
    ///
    /// # Errors
    ///
    /// Returns [`ActionDecodeError`] if the input is not an action record or
    /// the payload does not fit the action type. Unknown types are not an
    /// error; they decode to [`TodoAction::Unrecognized`].
    pub fn from_json(input: &str) -> Result<Self, ActionDecodeError> {
        let raw: RawAction = serde_json::from_str(input)?;
        Self::try_from(raw)
    }
}

fn payload<T>(action_type: &'static str, payload: Option<Value>) -> Result<T, ActionDecodeError>
where
    T: serde::de::DeserializeOwned,
{
    let value = payload.ok_or(ActionDecodeError::MissingPayload { action_type })?;
    serde_json::from_value(value).map_err(|source| ActionDecodeError::InvalidPayload {
        action_type,
        source,
    })
}

impl TryFrom<RawAction> for TodoAction {
    type Error = ActionDecodeError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let action = match raw.action_type.as_str() {
            "ADD_TODO" => Self::AddTodo(Arc::new(payload("ADD_TODO", raw.payload)?)),
            "TOGGLE_TODO" => Self::ToggleTodo(payload("TOGGLE_TODO", raw.payload)?),
            "SET_FILTER" => Self::SetFilter(payload("SET_FILTER", raw.payload)?),
            "DELETE_COMPLETED" => Self::DeleteCompleted,
            other => match other.parse::<Filter>() {
                Ok(filter) => {
                    tracing::debug!(%filter, "Decoded legacy filter action");
                    Self::SetFilter(filter)
                },
                Err(_) => {
                    tracing::debug!(action_type = other, "Decoded unrecognized action");
                    Self::Unrecognized(raw.action_type)
                },
            },
        };
        Ok(action)
    }
}

impl From<TodoAction> for RawAction {
    fn from(action: TodoAction) -> Self {
        let action_type = action.tag().to_string();
        let payload = match action {
            TodoAction::AddTodo(todo) => Some(json!({
                "id": todo.id.get(),
                "value": todo.value,
                "completed": todo.completed,
            })),
            TodoAction::ToggleTodo(id) => Some(Value::from(id.get())),
            TodoAction::SetFilter(filter) => Some(Value::from(filter.as_str())),
            TodoAction::DeleteCompleted | TodoAction::Unrecognized(_) => None,
        };
        Self {
            action_type,
            payload,
        }
    }
}
