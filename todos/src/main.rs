//! Terminal front end for the todo list.
//!
//! Reads one command per line from stdin and routes it through the
//! containers. A subscriber task re-renders the list after every dispatch.

use statekit_core::Action;
use statekit_runtime::Subscription;
use tokio::io::{AsyncBufReadExt, BufReader};
use todos::cli::{Command, HELP};
use todos::config::Config;
use todos::containers::{AddTodoContainer, FiltersContainer, VisibleTodosContainer};
use todos::view::{render_filters, render_todos};
use todos::{create_store, AppState, AppStore, TodoAction};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The containers the front end talks to
struct Ui {
    store: AppStore,
    add: AddTodoContainer,
    list: VisibleTodosContainer,
    filters: FiltersContainer,
}

impl Ui {
    async fn new(store: AppStore) -> Self {
        Self {
            add: AddTodoContainer::new(store.clone()).await,
            list: VisibleTodosContainer::new(store.clone()),
            filters: FiltersContainer::new(store.clone()),
            store,
        }
    }

    /// Runs one command; returns false when the loop should stop
    async fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Add(text) => {
                if self.add.on_add_todo(&text).await.is_none() {
                    println!("nothing to add");
                }
            },
            Command::Toggle(id) => self.list.on_todo_click(id).await,
            Command::Show(filter) => self.filters.on_filter_click(filter).await,
            Command::Clear => {
                if self.filters.props().await.active_status {
                    self.filters.on_delete_completed().await;
                } else {
                    println!("no completed todos");
                }
            },
            Command::Dispatch(action) => self.store.send(action).await,
            Command::Help => println!("{HELP}"),
            Command::Quit => return false,
        }
        true
    }
}

async fn render(list: &VisibleTodosContainer, filters: &FiltersContainer) {
    let todos = render_todos(&list.props().await);
    let bar = render_filters(&filters.props().await);
    print!("{todos}{bar}");
}

async fn render_on_dispatch(
    mut updates: Subscription<TodoAction>,
    list: VisibleTodosContainer,
    filters: FiltersContainer,
) {
    while let Ok(action) = updates.next().await {
        tracing::debug!(tag = action.tag(), "Re-rendering");
        render(&list, &filters).await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing; stdout is reserved for the list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    statekit_runtime::metrics::describe_metrics();
    tracing::info!(?config, "Starting todos");

    let store = create_store(
        AppState::with_filter(config.initial_filter),
        config.store_config(),
    );

    let renderer = tokio::spawn(render_on_dispatch(
        store.subscribe(),
        VisibleTodosContainer::new(store.clone()),
        FiltersContainer::new(store.clone()),
    ));

    let mut ui = Ui::new(store).await;
    println!("{HELP}\n");
    render(&ui.list, &ui.filters).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !ui.execute(command).await {
                    break;
                }
            },
            Err(e) => println!("error: {e}"),
        }
    }

    // The renderer holds its own store handles, so it never sees the store close
    renderer.abort();
    tracing::info!("Goodbye");
    Ok(())
}
