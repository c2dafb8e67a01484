//! Frontend Models
//!
//! Data structures for task list entries.

use std::fmt;

/// Render key for an entry. Allocated by [`crate::store::TaskList`], never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of an entry still in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Active,
    Completed,
}

impl EntryState {
    pub fn toggled(self) -> Self {
        match self {
            EntryState::Active => EntryState::Completed,
            EntryState::Completed => EntryState::Active,
        }
    }

    /// CSS class applied to the entry row
    pub fn css_class(self) -> &'static str {
        match self {
            EntryState::Active => "",
            EntryState::Completed => "completed",
        }
    }
}

/// One row of the task list
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    /// Display text, trimmed and non-empty
    pub text: String,
    pub completed: bool,
}

impl Entry {
    pub fn new(id: EntryId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn state(&self) -> EntryState {
        if self.completed {
            EntryState::Completed
        } else {
            EntryState::Active
        }
    }

    /// Flip completion and return the new state
    pub fn toggle(&mut self) -> EntryState {
        let next = self.state().toggled();
        self.completed = next == EntryState::Completed;
        next
    }
}
