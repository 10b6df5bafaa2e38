//! Home Screen Component
//!
//! Landing screen with entry points that depend on login state.

use leptos::prelude::*;

use crate::context::{AppContext, Screen};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="home">
            <h2>"Welcome to Todo List App"</h2>
            <p>"A simple and effective way to manage your tasks and stay organized."</p>

            {move || match ctx.user.get() {
                Some(user) => view! {
                    <div class="home-actions">
                        <p>{format!("Hello, {}! You are logged in.", user.username)}</p>
                        <button class="primary-btn" on:click=move |_| ctx.goto(Screen::Todos)>
                            "Go to My Todos"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="home-actions">
                        <p>"Get started by logging in or creating a new account"</p>
                        <button class="primary-btn" on:click=move |_| ctx.goto(Screen::Login)>
                            "Login"
                        </button>
                        <button class="secondary-btn" on:click=move |_| ctx.goto(Screen::Register)>
                            "Register"
                        </button>
                    </div>
                }
                .into_any(),
            }}

            <div class="home-features">
                <h3>"Features:"</h3>
                <ul>
                    <li>"Create and manage your personal todo list"</li>
                    <li>"Mark tasks as completed"</li>
                    <li>"Set due dates for your tasks"</li>
                    <li>"Secure user authentication"</li>
                </ul>
            </div>
        </div>
    }
}
