//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{AppContext, Screen};
use crate::storage;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        let pass = password.get();

        // Required-field check before any network call
        if name.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }

        set_error.set(None);
        set_loading.set(true);
        spawn_local(async move {
            match api::login(&name, &pass).await {
                Ok(auth) => {
                    storage::set_token(&auth.access_token);
                    ctx.login(auth.user);
                }
                Err(msg) => set_error.set(Some(msg)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Login"</h2>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <label for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    placeholder="Enter your username"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_username.set(input.value());
                    }
                />

                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />

                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <p class="auth-switch">
                "Don't have an account? "
                <button class="link-btn" on:click=move |_| ctx.goto(Screen::Register)>
                    "Register"
                </button>
            </p>
        </div>
    }
}
