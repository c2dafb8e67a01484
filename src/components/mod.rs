//! UI Components
//!
//! Leptos components for the task list.

mod new_entry_form;
mod entry_list;
mod entry_row;

pub use new_entry_form::NewEntryForm;
pub use entry_list::EntryList;
pub use entry_row::EntryRow;
