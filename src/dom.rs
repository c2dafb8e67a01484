//! Bound Element Seams
//!
//! The controller talks to the page only through these traits: the input
//! field, the blocking notification channel and the entry container.

use leptos::html::Input;
use leptos::prelude::*;

use crate::store::{TaskList, TaskStore};

/// A text input the controller reads from, clears and focuses
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
    fn focus(&self);
}

/// Blocking user-facing notification
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Owned handle to the ordered entry container.
///
/// Both methods return `None` only when the backing storage has been disposed.
pub trait EntryContainer {
    /// `f` reports whether it changed the list; subscribers are only notified if it did.
    fn mutate<R>(&self, f: impl FnOnce(&mut TaskList) -> (bool, R)) -> Option<R>;
    fn inspect<R>(&self, f: impl FnOnce(&TaskList) -> R) -> Option<R>;
}

// ========================
// Browser implementations
// ========================

impl InputField for web_sys::HtmlInputElement {
    fn value(&self) -> String {
        web_sys::HtmlInputElement::value(self)
    }

    fn clear(&self) {
        self.set_value("");
    }

    fn focus(&self) {
        if let Err(err) = web_sys::HtmlElement::focus(self) {
            web_sys::console::error_2(&"[TaskList] Failed to focus input".into(), &err);
        }
    }
}

/// Input rendered by the view; unmounted refs read as empty.
impl InputField for NodeRef<Input> {
    fn value(&self) -> String {
        self.get_untracked()
            .map(|el| InputField::value(&el))
            .unwrap_or_default()
    }

    fn clear(&self) {
        if let Some(el) = self.get_untracked() {
            InputField::clear(&el);
        }
    }

    fn focus(&self) {
        if let Some(el) = self.get_untracked() {
            InputField::focus(&el);
        }
    }
}

/// `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            web_sys::console::error_2(&"[TaskList] Failed to show alert".into(), &err);
        }
    }
}

impl EntryContainer for TaskStore {
    fn mutate<R>(&self, f: impl FnOnce(&mut TaskList) -> (bool, R)) -> Option<R> {
        self.try_maybe_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&TaskList) -> R) -> Option<R> {
        self.try_with(f)
    }
}
