//! Filter Tabs Component
//!
//! Tab bar for switching the view filter, with per-filter counts.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::{count_tasks, ViewFilter};
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="filter-tabs">
            {ViewFilter::ALL.into_iter().map(|filter| {
                let is_active = move || store.view().get() == filter;
                let count = move || store.tasks().with(|tasks| count_tasks(tasks, filter));
                view! {
                    <button
                        class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                        data-filter=filter.as_str()
                        on:click=move |_| store.view().set(filter)
                    >
                        {filter.label()} " (" {count} ")"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
