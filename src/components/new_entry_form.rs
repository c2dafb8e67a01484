//! New Entry Form Component
//!
//! Text input plus the "Add Task" trigger. Both route to the same add action.

use leptos::html::Input;
use leptos::prelude::*;

use crate::controller::use_task_controller;

/// Input field and add trigger
#[component]
pub fn NewEntryForm(input_ref: NodeRef<Input>) -> impl IntoView {
    let ctrl = use_task_controller();

    let add = move || {
        if let Some(id) = ctrl.add_entry() {
            web_sys::console::log_1(&format!("[TaskList] Added entry {}", id).into());
        }
    };

    view! {
        <div class="input-section">
            <input
                id="taskInput"
                type="text"
                placeholder="Add a new task..."
                node_ref=input_ref
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.is_composing() {
                        ev.prevent_default();
                        add();
                    }
                }
            />
            <button id="addTaskBtn" type="button" on:click=move |_| add()>"Add Task"</button>
        </div>
    }
}
