//! Todo list built on the statekit state container.
//!
//! - [`actions`]: action values and the creators the UI calls
//! - [`reducer`]: slice reducers and the root reducer
//! - [`selectors`]: derived views such as the visible todos
//! - [`containers`]: bindings that select props and dispatch callbacks
//!
//! # Quick Start
//!
//! ```
//! use statekit_runtime::StoreConfig;
//! use todos::containers::{AddTodoContainer, FiltersContainer, VisibleTodosContainer};
//! use todos::{create_store, AppState, Filter};
//!
//! # tokio_test::block_on(async {
//! let store = create_store(AppState::new(), StoreConfig::default());
//!
//! let mut add = AddTodoContainer::new(store.clone()).await;
//! let list = VisibleTodosContainer::new(store.clone());
//! let filters = FiltersContainer::new(store.clone());
//!
//! let id = add.on_add_todo("Buy milk").await;
//! if let Some(id) = id {
//!     list.on_todo_click(id).await;
//! }
//! filters.on_filter_click(Filter::ShowCompleted).await;
//!
//! let visible = list.props().await.todos;
//! assert_eq!(visible.len(), 1);
//! assert!(visible[0].completed);
//! # });
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod containers;
pub mod reducer;
pub mod selectors;
pub mod types;
pub mod view;

pub use actions::{ActionDecodeError, TodoAction};
pub use reducer::{app_reducer, AppReducer};
pub use types::{AppState, Filter, Todo, TodoId, Todos};

use statekit_runtime::{Store, StoreConfig};

/// The store type the containers bind to
pub type AppStore = Store<AppState, TodoAction, AppReducer>;

/// Creates a store over `initial` driven by the root reducer
#[must_use]
pub fn create_store(initial: AppState, config: StoreConfig) -> AppStore {
    Store::with_config(initial, app_reducer(), config)
}
