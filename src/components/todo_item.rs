//! Todo Item Component
//!
//! One row of the list: completion checkbox, title/description/due date,
//! edit and delete actions.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, UpdateTodoArgs};
use crate::context::AppContext;
use crate::models::Todo;

/// Render a stored timestamp for display, falling back to the raw string
fn format_due_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map(|parsed| parsed.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn TodoItem(
    todo: Todo,
    set_editing: WriteSignal<Option<Todo>>,
    set_form_open: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = todo.id;
    let completed = todo.completed;
    let todo_for_edit = todo.clone();

    let on_toggle = move |_| {
        spawn_local(async move {
            let args = UpdateTodoArgs {
                completed: Some(!completed),
                ..Default::default()
            };
            if api::update_todo(id, &args).await.is_ok() {
                ctx.reload();
            } else {
                set_error.set(Some("Failed to update todo. Please try again.".to_string()));
            }
        });
    };

    let on_edit = move |_| {
        set_editing.set(Some(todo_for_edit.clone()));
        set_form_open.set(true);
    };

    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this todo?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if api::delete_todo(id).await.is_ok() {
                ctx.reload();
            } else {
                set_error.set(Some("Failed to delete todo. Please try again.".to_string()));
            }
        });
    };

    view! {
        <div class=move || if completed { "todo-item done" } else { "todo-item" }>
            <input type="checkbox" prop:checked=completed on:change=on_toggle />

            <div class="todo-body">
                <span class="todo-title">{todo.title.clone()}</span>
                {todo.description.clone().map(|description| view! {
                    <p class="todo-description">{description}</p>
                })}
                {todo.due_date.clone().map(|due| view! {
                    <p class="todo-due">{format!("Due: {}", format_due_date(&due))}</p>
                })}
            </div>

            <div class="todo-actions">
                <button class="link-btn" on:click=on_edit>"Edit"</button>
                <button class="link-btn danger" on:click=on_delete>"Delete"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_due_date_variants() {
        assert_eq!(format_due_date("2026-12-31T23:59:59"), "2026-12-31 23:59");
        assert_eq!(format_due_date("2026-12-31T23:59"), "2026-12-31 23:59");
        assert_eq!(format_due_date("soon"), "soon");
    }
}
