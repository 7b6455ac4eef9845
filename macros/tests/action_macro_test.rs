//! Tests for #[derive(Action)] macro

use statekit_core::action::Action;
use statekit_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
enum TodoAction {
    AddTodo { value: String },

    ToggleTodo(u64),

    #[action(rename = "SHOW_COMPLETED")]
    ShowDone,

    DeleteCompleted,
}

#[derive(Action, Clone, Debug)]
enum Wrapped<T: Clone + std::fmt::Debug + Send + 'static> {
    Inner(T),
    Nothing,
}

#[derive(Action, Clone, Debug)]
enum Incoming {
    Ping,
    #[action(unrecognized)]
    Other(String),
}

#[test]
fn test_named_fields_variant() {
    let action = TodoAction::AddTodo {
        value: "milk".to_string(),
    };
    assert_eq!(action.action_type(), "ADD_TODO");
}

#[test]
fn test_tuple_variant() {
    assert_eq!(TodoAction::ToggleTodo(7).action_type(), "TOGGLE_TODO");
}

#[test]
fn test_unit_variant() {
    assert_eq!(TodoAction::DeleteCompleted.action_type(), "DELETE_COMPLETED");
}

#[test]
fn test_renamed_variant() {
    assert_eq!(TodoAction::ShowDone.action_type(), "SHOW_COMPLETED");
}

#[test]
fn test_action_types_in_declaration_order() {
    assert_eq!(
        TodoAction::ACTION_TYPES,
        &["ADD_TODO", "TOGGLE_TODO", "SHOW_COMPLETED", "DELETE_COMPLETED"]
    );
}

#[test]
fn test_every_variant_listed() {
    let actions = vec![
        TodoAction::AddTodo {
            value: "a".to_string(),
        },
        TodoAction::ToggleTodo(1),
        TodoAction::ShowDone,
        TodoAction::DeleteCompleted,
    ];

    for action in actions {
        assert!(
            TodoAction::ACTION_TYPES.contains(&action.action_type()),
            "Missing action type for {action:?}"
        );
    }
}

#[test]
fn test_generic_enum() {
    assert_eq!(Wrapped::Inner(3_u8).action_type(), "INNER");
    assert_eq!(Wrapped::<u8>::Nothing.action_type(), "NOTHING");
    assert_eq!(Wrapped::<u8>::ACTION_TYPES, &["INNER", "NOTHING"]);
}

#[test]
fn test_tag_defaults_to_action_type() {
    assert_eq!(TodoAction::ToggleTodo(7).tag(), "TOGGLE_TODO");
    assert_eq!(TodoAction::ShowDone.tag(), "SHOW_COMPLETED");
    assert_eq!(Incoming::Ping.tag(), "PING");
}

#[test]
fn test_unrecognized_variant_keeps_its_tag() {
    let action = Incoming::Other("@@INIT".to_string());

    assert_eq!(action.action_type(), "OTHER");
    assert_eq!(action.tag(), "@@INIT");
    assert_eq!(Incoming::ACTION_TYPES, &["PING", "OTHER"]);
}
