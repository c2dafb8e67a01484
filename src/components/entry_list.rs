//! Entry List Component
//!
//! The container: entries in insertion order, keyed by id.

use leptos::prelude::*;

use crate::components::EntryRow;
use crate::store::{use_task_store, TaskListStoreFields};

#[component]
pub fn EntryList() -> impl IntoView {
    let store = use_task_store();

    view! {
        <ul id="taskList">
            <For
                each=move || store.entries().get()
                key=|entry| entry.id
                children=move |entry| view! { <EntryRow entry=entry /> }
            />
        </ul>
    }
}
