//! Task List State Store
//!
//! Ordered entry container. Wrapped in a `reactive_stores::Store` so the list
//! view can subscribe to the `entries` field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TaskError;
use crate::models::{Entry, EntryId, EntryState};

/// Entries in insertion order. Insertion order is display order.
#[derive(Clone, Debug, Default, Store)]
pub struct TaskList {
    entries: Vec<Entry>,
    /// Next id to hand out; ids are never reused
    next_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new Active entry with the trimmed text.
    pub fn push(&mut self, raw: &str) -> Result<EntryId, TaskError> {
        let text = trim_input(raw);
        if text.is_empty() {
            return Err(TaskError::EmptyInput);
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry::new(id, text.to_string()));
        Ok(id)
    }

    /// Flip the entry's completed flag, returning its new state
    pub fn toggle(&mut self, id: EntryId) -> Option<EntryState> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(Entry::toggle)
    }

    /// Detach the entry. Order of the remaining entries is untouched.
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let pos = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trim like the browser's `String.prototype.trim`, which also strips U+FEFF.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Type alias for the store
pub type TaskStore = Store<TaskList>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.iter().map(|entry| entry.text.as_str()).collect()
    }

    #[test]
    fn test_push_trims_and_appends() {
        let mut list = TaskList::new();
        let first = list.push("  Buy milk \n").unwrap();
        let second = list.push("Walk dog").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(texts(&list), vec!["Buy milk", "Walk dog"]);
        assert_eq!(list.get(first).unwrap().state(), EntryState::Active);
        assert_ne!(first, second);
    }

    #[test]
    fn test_push_rejects_blank() {
        let mut list = TaskList::new();
        assert_eq!(list.push(""), Err(TaskError::EmptyInput));
        assert_eq!(list.push("   "), Err(TaskError::EmptyInput));
        assert_eq!(list.push("\t\n\u{feff}\u{a0}"), Err(TaskError::EmptyInput));
        assert!(list.is_empty());
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let mut list = TaskList::new();
        let id = list.push(" a  b ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "a  b");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = TaskList::new();
        let id = list.push("Buy milk").unwrap();

        assert_eq!(list.toggle(id), Some(EntryState::Completed));
        assert!(list.get(id).unwrap().completed);
        assert_eq!(list.toggle(id), Some(EntryState::Active));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = TaskList::new();
        let a = list.push("a").unwrap();
        let b = list.push("b").unwrap();
        let c = list.push("c").unwrap();

        let removed = list.remove(b).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert!(list.get(a).is_some());
        assert!(list.get(c).is_some());
    }

    #[test]
    fn test_removed_id_is_gone_for_good() {
        let mut list = TaskList::new();
        let a = list.push("a").unwrap();
        list.remove(a);

        let b = list.push("b").unwrap();
        assert_ne!(a, b);
        assert_eq!(list.toggle(a), None);
        assert_eq!(list.remove(a), None);
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn test_completed_entry_is_removable() {
        let mut list = TaskList::new();
        let id = list.push("done").unwrap();
        list.toggle(id);
        assert!(list.remove(id).is_some());
        assert!(list.is_empty());
    }
}
