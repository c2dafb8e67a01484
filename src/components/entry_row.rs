//! Entry Row Component
//!
//! A single entry: clicking the text toggles completion, the button removes it.

use leptos::prelude::*;

use crate::controller::use_task_controller;
use crate::models::{Entry, EntryState};

#[component]
pub fn EntryRow(entry: Entry) -> impl IntoView {
    let ctrl = use_task_controller();
    let id = entry.id;

    // Rows are keyed by id, so completion has to be read reactively
    let row_class = move || {
        ctrl.state_of(id)
            .unwrap_or(EntryState::Active)
            .css_class()
    };

    view! {
        <li class=row_class>
            <span class="task-text" on:click=move |_| {
                ctrl.toggle_completed(id);
            }>
                {entry.text}
            </span>
            <button class="delete-btn" on:click=move |_| {
                if ctrl.remove_entry(id).is_some() {
                    web_sys::console::log_1(&format!("[TaskList] Removed entry {}", id).into());
                }
            }>
                "Remove"
            </button>
        </li>
    }
}
