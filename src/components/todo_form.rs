//! Todo Form Component
//!
//! Creates a new todo or edits an existing one, depending on the `editing`
//! signal. An empty title never reaches the network.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateTodoArgs, UpdateTodoArgs};
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn TodoForm(
    editing: ReadSignal<Option<Todo>>,
    set_editing: WriteSignal<Option<Todo>>,
    set_form_open: WriteSignal<bool>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Populate the fields when an existing todo is selected for editing
    Effect::new(move |_| match editing.get() {
        Some(todo) => {
            set_title.set(todo.title);
            set_description.set(todo.description.unwrap_or_default());
            set_due_date.set(todo.due_date.unwrap_or_default());
        }
        None => {
            set_title.set(String::new());
            set_description.set(String::new());
            set_due_date.set(String::new());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();

        // Client-side validation: no request for an empty title
        if title_value.trim().is_empty() {
            set_error.set(Some("Title is required".to_string()));
            return;
        }

        let description_value = description.get();
        let due_value = due_date.get();
        let editing_id = editing.get().map(|todo| todo.id);

        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => {
                    let args = UpdateTodoArgs {
                        title: Some(&title_value),
                        description: if description_value.is_empty() {
                            None
                        } else {
                            Some(&description_value)
                        },
                        completed: None,
                        // Explicit null clears a previously set due date
                        due_date: Some(if due_value.is_empty() {
                            None
                        } else {
                            Some(&due_value)
                        }),
                    };
                    api::update_todo(id, &args).await.map(|_| ())
                }
                None => {
                    let args = CreateTodoArgs {
                        title: &title_value,
                        description: if description_value.is_empty() {
                            None
                        } else {
                            Some(&description_value)
                        },
                        due_date: if due_value.is_empty() {
                            None
                        } else {
                            Some(&due_value)
                        },
                    };
                    api::create_todo(&args).await.map(|_| ())
                }
            };

            match result {
                Ok(()) => {
                    set_editing.set(None);
                    set_form_open.set(false);
                    ctx.reload();
                }
                Err(msg) => set_error.set(Some(msg)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="todo-form-card">
            <h3>{move || if editing.get().is_some() { "Edit Todo" } else { "Add New Todo" }}</h3>

            <form on:submit=on_submit>
                <label for="todo-title">"Title *"</label>
                <input
                    type="text"
                    id="todo-title"
                    placeholder="Enter todo title"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />

                <label for="todo-description">"Description"</label>
                <textarea
                    id="todo-description"
                    placeholder="Enter description (optional)"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_description.set(area.value());
                    }
                />

                <label for="todo-due-date">"Due Date"</label>
                <input
                    type="datetime-local"
                    id="todo-due-date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_due_date.set(input.value());
                    }
                />

                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Todo" }}
                </button>
            </form>
        </div>
    }
}
