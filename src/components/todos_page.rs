//! Todos Page Component
//!
//! Fetches the list, holds it in a signal, and wires up the filter tabs,
//! the create/edit form and the per-item actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{FilterTabs, TodoForm, TodoItem};
use crate::context::AppContext;
use crate::models::{Filter, Todo};

#[component]
pub fn TodosPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (filter, set_filter) = signal(Filter::All);
    let (form_open, set_form_open) = signal(false);
    let (editing, set_editing) = signal(None::<Todo>);

    // Fetch on mount and after every mutation (reload trigger)
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_todos().await {
                Ok(list) => {
                    set_todos.set(list);
                    set_error.set(None);
                }
                Err(_) => set_error.set(Some("Failed to fetch todos. Please try again.".to_string())),
            }
            set_loading.set(false);
        });
    });

    let filtered = move || {
        todos
            .get()
            .into_iter()
            .filter(|todo| filter.get().matches(todo))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="todos-page">
            <div class="todos-header">
                <h2>"My Todo List"</h2>
                <button
                    class="primary-btn"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_form_open.update(|open| *open = !*open);
                    }
                >
                    {move || if form_open.get() { "Cancel" } else { "Add New Todo" }}
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show when=move || form_open.get()>
                <TodoForm
                    editing=editing
                    set_editing=set_editing
                    set_form_open=set_form_open
                    set_error=set_error
                />
            </Show>

            <FilterTabs filter=filter set_filter=set_filter />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading todos..."</div> }
            >
                <Show
                    when=move || !filtered().is_empty()
                    fallback=move || view! {
                        <div class="empty-list">{move || filter.get().empty_message()}</div>
                    }
                >
                    <div class="todo-list">
                        <For
                            each=filtered
                            key=|todo| (todo.id, todo.completed, todo.updated_at.clone())
                            children=move |todo| {
                                view! {
                                    <TodoItem
                                        todo=todo
                                        set_editing=set_editing
                                        set_form_open=set_form_open
                                        set_error=set_error
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <p class="item-count">{move || format!("{} todos", todos.get().len())}</p>
        </div>
    }
}
