//! Plain-text rendering of the container props.

use crate::containers::{FiltersProps, VisibleTodosProps};
use crate::types::Filter;

/// Renders the todo list, one line per todo
#[must_use]
pub fn render_todos(props: &VisibleTodosProps) -> String {
    if props.todos.is_empty() {
        return "  (nothing to show)\n".to_string();
    }

    props
        .todos
        .iter()
        .map(|todo| {
            let mark = if todo.completed { 'x' } else { ' ' };
            format!("  [{mark}] {:>3}  {}\n", todo.id, todo.value)
        })
        .collect()
}

/// Renders the filter bar; the active filter is bracketed
#[must_use]
pub fn render_filters(props: &FiltersProps) -> String {
    let mut out = String::from("Show:");
    for filter in Filter::ALL {
        let label = if filter == props.filter {
            format!(" [{}]", filter.label())
        } else {
            format!(" {}", filter.label())
        };
        out.push_str(&label);
    }
    if props.active_status {
        out.push_str("  (clear: delete completed)");
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Todo;
    use std::sync::Arc;

    #[test]
    fn renders_todos_with_marks() {
        let props = VisibleTodosProps {
            todos: vec![Arc::new(Todo::new(1, "milk")), Arc::new(Todo::new(2, "eggs").toggled())],
        };

        assert_eq!(render_todos(&props), "  [ ]   1  milk\n  [x]   2  eggs\n");
        assert_eq!(render_todos(&VisibleTodosProps::default()), "  (nothing to show)\n");
    }

    #[test]
    fn renders_active_filter_and_delete_hint() {
        let props = FiltersProps {
            filter: Filter::ShowActive,
            active_status: false,
        };
        assert_eq!(render_filters(&props), "Show: All [Active] Completed\n");

        let props = FiltersProps {
            filter: Filter::ShowAll,
            active_status: true,
        };
        assert_eq!(
            render_filters(&props),
            "Show: [All] Active Completed  (clear: delete completed)\n"
        );
    }
}
