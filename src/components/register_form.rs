//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{AppContext, Screen};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        let mail = email.get();
        let pass = password.get();

        // Required-field check before any network call
        if name.trim().is_empty() || mail.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("All fields are required".to_string()));
            return;
        }

        set_error.set(None);
        set_loading.set(true);
        spawn_local(async move {
            match api::register(&name, &mail, &pass).await {
                // Registration returns no token; continue on the login screen
                Ok(_) => ctx.goto(Screen::Login),
                Err(msg) => set_error.set(Some(msg)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Register"</h2>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <form on:submit=on_submit>
                <label for="reg-username">"Username"</label>
                <input
                    type="text"
                    id="reg-username"
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_username.set(input.value());
                    }
                />

                <label for="reg-email">"Email"</label>
                <input
                    type="email"
                    id="reg-email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />

                <label for="reg-password">"Password"</label>
                <input
                    type="password"
                    id="reg-password"
                    placeholder="Choose a password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />

                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>
            </form>

            <p class="auth-switch">
                "Already have an account? "
                <button class="link-btn" on:click=move |_| ctx.goto(Screen::Login)>
                    "Login"
                </button>
            </p>
        </div>
    }
}
