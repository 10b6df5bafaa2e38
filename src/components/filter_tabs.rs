//! Filter Tabs Component
//!
//! All / Active / Completed tabs over the in-memory list.

use leptos::prelude::*;

use crate::models::Filter;

#[component]
pub fn FilterTabs(
    filter: ReadSignal<Filter>,
    set_filter: WriteSignal<Filter>,
) -> impl IntoView {
    view! {
        <div class="filter-tabs">
            {Filter::ALL.iter().map(|option| {
                let option = *option;
                let is_active = move || filter.get() == option;
                view! {
                    <button
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        on:click=move |_| set_filter.set(option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
