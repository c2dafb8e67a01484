//! Task List App
//!
//! Root component: owns the entry store and the input handle, binds the
//! controller to them and provides both via context.

use leptos::html::Input;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EntryList, NewEntryForm};
use crate::controller::{AppController, TaskListController};
use crate::dom::BrowserAlert;
use crate::store::{TaskList, TaskStore};

#[component]
pub fn App() -> impl IntoView {
    let store: TaskStore = Store::new(TaskList::new());
    let input_ref = NodeRef::<Input>::new();
    let controller: AppController = TaskListController::new(input_ref, BrowserAlert, store);

    provide_context(store);
    provide_context(controller);

    view! {
        <div class="container">
            <h1>"To-Do List"</h1>
            <NewEntryForm input_ref=input_ref />
            <EntryList />
        </div>
    }
}
