//! Todo List Frontend App
//!
//! Root component: session bootstrap plus screen switching on login state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Header, Home, LoginForm, RegisterForm, TodosPage};
use crate::context::{AppContext, Screen};
use crate::models::User;
use crate::storage;

#[component]
pub fn App() -> impl IntoView {
    let (user, set_user) = signal(None::<User>);
    let (screen, set_screen) = signal(Screen::Home);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (booting, set_booting) = signal(true);

    let ctx = AppContext::new(
        (user, set_user),
        (screen, set_screen),
        (reload_trigger, set_reload_trigger),
    );
    provide_context(ctx);

    // Restore the session from a stored token, if any
    Effect::new(move |_| {
        if storage::get_token().is_some() {
            spawn_local(async move {
                match api::current_user().await {
                    Ok(user) => ctx.login(user),
                    // Stale or rejected token: drop it and stay logged out
                    Err(_) => storage::clear_token(),
                }
                set_booting.set(false);
            });
        } else {
            set_booting.set(false);
        }
    });

    view! {
        <div class="app-shell">
            <Header />

            <main class="main-content">
                <Show
                    when=move || !booting.get()
                    fallback=|| view! { <div class="loading">"Loading..."</div> }
                >
                    {move || match screen.get() {
                        Screen::Home => view! { <Home /> }.into_any(),
                        Screen::Login => view! { <LoginForm /> }.into_any(),
                        Screen::Register => view! { <RegisterForm /> }.into_any(),
                        // Guard: the todo screen needs a logged-in user
                        Screen::Todos => {
                            if user.get().is_some() {
                                view! { <TodosPage /> }.into_any()
                            } else {
                                view! { <LoginForm /> }.into_any()
                            }
                        }
                    }}
                </Show>
            </main>

            <footer class="app-footer">"Todo List App"</footer>
        </div>
    }
}
