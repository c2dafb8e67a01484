//! Task List Controller
//!
//! Mediates between the input field, the add trigger and the entry container.
//! Provided to the view via the Leptos Context API.

use leptos::html::Input;
use leptos::prelude::*;

use crate::dom::{BrowserAlert, EntryContainer, InputField, Notifier};
use crate::models::{Entry, EntryId, EntryState};
use crate::store::TaskStore;

/// Controller as wired by [`crate::app::App`]
pub type AppController = TaskListController<NodeRef<Input>, BrowserAlert, TaskStore>;

#[derive(Clone, Copy)]
pub struct TaskListController<I, N, C> {
    input: I,
    notifier: N,
    container: C,
}

impl<I, N, C> TaskListController<I, N, C>
where
    I: InputField,
    N: Notifier,
    C: EntryContainer,
{
    /// Bind the controller to its input field, notification channel and container.
    /// The add trigger and the Enter key are routed to [`Self::add_entry`] by the view.
    pub fn new(input: I, notifier: N, container: C) -> Self {
        Self {
            input,
            notifier,
            container,
        }
    }

    /// Add the current input value as a new Active entry.
    ///
    /// Blank input raises a blocking alert and leaves everything as it was.
    /// On success the input is cleared and keeps focus.
    pub fn add_entry(&self) -> Option<EntryId> {
        let raw = self.input.value();
        let pushed = self.container.mutate(|list| {
            let result = list.push(&raw);
            (result.is_ok(), result)
        })?;
        match pushed {
            Ok(id) => {
                self.input.clear();
                self.input.focus();
                Some(id)
            }
            Err(err) => {
                self.notifier.alert(&err.to_string());
                None
            }
        }
    }

    pub fn toggle_completed(&self, id: EntryId) -> Option<EntryState> {
        self.container
            .mutate(|list| {
                let state = list.toggle(id);
                (state.is_some(), state)
            })
            .flatten()
    }

    pub fn remove_entry(&self, id: EntryId) -> Option<Entry> {
        self.container
            .mutate(|list| {
                let removed = list.remove(id);
                (removed.is_some(), removed)
            })
            .flatten()
    }

    /// Current state of an entry; tracked when read inside a reactive scope
    pub fn state_of(&self, id: EntryId) -> Option<EntryState> {
        self.container
            .inspect(|list| list.get(id).map(Entry::state))
            .flatten()
    }
}

/// Get the controller from context
pub fn use_task_controller() -> AppController {
    expect_context::<AppController>()
}
