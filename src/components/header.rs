//! Header Component
//!
//! App title plus session controls (login/register links or a logout button).

use leptos::prelude::*;

use crate::context::{AppContext, Screen};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="app-header">
            <h1 class="app-title" on:click=move |_| ctx.goto(Screen::Home)>
                "Todo List App"
            </h1>

            {move || match ctx.user.get() {
                Some(user) => view! {
                    <div class="header-session">
                        <span>{format!("Welcome, {}!", user.username)}</span>
                        <button class="link-btn" on:click=move |_| ctx.logout()>
                            "Logout"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="header-session">
                        <button class="link-btn" on:click=move |_| ctx.goto(Screen::Login)>
                            "Login"
                        </button>
                        <button class="link-btn" on:click=move |_| ctx.goto(Screen::Register)>
                            "Register"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </header>
    }
}
