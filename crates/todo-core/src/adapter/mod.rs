//! Event-driven front end over a [`TaskStore`].
//!
//! [`EventAdapter`] turns user gestures (submit, delete, checkbox click, edit)
//! into exactly one store call each and reports the result to a [`View`] as a
//! localized [`Patch`] instead of a full re-render.
//!
//! ```text
//! Gesture ──▶ EventAdapter ──▶ TaskStore
//!                  │
//!                  └──▶ View::apply(Patch)
//! ```
//!
//! Gestures are handled one at a time in arrival order; nothing here is
//! shared across threads.
//!
//! # Edit mode
//!
//! An `edit` gesture only switches the item into edit mode; the store is not
//! touched until the edit is committed. Edit mode is remembered by [`TaskId`]
//! so it follows the task when earlier tasks are deleted.
//!
//! ```rust
//! use todo_core::{EventAdapter, RenderedList};
//!
//! let mut adapter = EventAdapter::new(RenderedList::new());
//! adapter.on_submit("buy milk")?;
//! adapter.on_edit(0)?;
//! let task = adapter.on_edit_commit(0, "   ")?;
//!
//! assert_eq!(task.text, "buy milk");
//! assert_eq!(adapter.view().texts(), ["buy milk"]);
//! # Ok::<(), todo_core::TaskError>(())
//! ```

mod view;


use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

pub use view::{Patch, PatchLog, RenderedItem, RenderedList, View};

use crate::{
    error::{Result, TaskError},
    models::{Task, TaskId},
    store::TaskStore,
};

/// A single user gesture, addressed by 0-based display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    /// Submit button click or Enter in the input field
    Submit { text: String },
    /// Delete button on an item
    Delete { position: usize },
    /// Checkbox or label click on an item
    Toggle { position: usize },
    /// Edit button on an item
    Edit { position: usize },
    /// Enter or focus loss in an item's edit field
    EditCommit { position: usize, text: String },
}

/// Page controller owning the task store and the view it renders into.
pub struct EventAdapter<V: View> {
    store: TaskStore,
    view: V,
    editing: BTreeSet<TaskId>,
}

impl<V: View> EventAdapter<V> {
    /// Creates an adapter with an empty store.
    pub fn new(view: V) -> Self {
        Self {
            store: TaskStore::new(),
            view,
            editing: BTreeSet::new(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Whether the task at `position` is currently in edit mode.
    pub fn is_editing(&self, position: usize) -> bool {
        self.store
            .get(position)
            .is_some_and(|task| self.editing.contains(&task.id))
    }

    /// Routes a gesture to its hook.
    ///
    /// # Errors
    ///
    /// Returns whatever error the hook for that gesture returns.
    pub fn dispatch(&mut self, gesture: Gesture) -> Result<Task> {
        match gesture {
            Gesture::Submit { text } => self.on_submit(&text),
            Gesture::Delete { position } => self.on_delete(position),
            Gesture::Toggle { position } => self.on_toggle(position),
            Gesture::Edit { position } => self.on_edit(position),
            Gesture::EditCommit { position, text } => self.on_edit_commit(position, &text),
        }
    }

    /// Adds a task and clears the input field.
    ///
    /// Blank input is rejected without calling the store and without
    /// touching the view.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyInput`] for blank text.
    pub fn on_submit(&mut self, text: &str) -> Result<Task> {
        if text.trim().is_empty() {
            debug!("Ignoring empty submit");
            return Err(TaskError::EmptyInput);
        }

        let task = self.store.add(text)?;
        self.view.apply(Patch::Append {
            position: self.store.len() - 1,
            task: task.clone(),
        });
        self.view.apply(Patch::ClearInput);
        Ok(task)
    }

    /// Removes the task at `position` and its rendered element.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if no task is rendered there.
    pub fn on_delete(&mut self, position: usize) -> Result<Task> {
        let task = self.store.remove_at(position)?;
        if self.editing.remove(&task.id) {
            debug!("Discarded edit state of deleted task {}", task.id);
        }
        self.view.apply(Patch::Remove { position });
        Ok(task)
    }

    /// Flips the done flag of the task at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if no task is rendered there.
    pub fn on_toggle(&mut self, position: usize) -> Result<Task> {
        let task = self.store.toggle_at(position)?;
        self.view.apply(Patch::SetDone {
            position,
            done: task.done,
        });
        Ok(task)
    }

    /// Puts the task at `position` into edit mode without changing it.
    ///
    /// Repeating the gesture on an item already in edit mode changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if no task is rendered there.
    pub fn on_edit(&mut self, position: usize) -> Result<Task> {
        let task = self
            .store
            .get(position)
            .cloned()
            .ok_or_else(|| TaskError::out_of_range(position, self.store.len()))?;

        if self.editing.insert(task.id) {
            self.view.apply(Patch::BeginEdit {
                position,
                text: task.text.clone(),
            });
        }
        Ok(task)
    }

    /// Commits an edit and restores the static view of the item.
    ///
    /// Blank text keeps the task's previous text. A commit does not require
    /// a preceding [`on_edit`](Self::on_edit): it is the store's `edit_at`
    /// hook for any position, and the emitted [`Patch::EndEdit`] is a plain
    /// text refresh for an item that was never in edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if no task is rendered there.
    pub fn on_edit_commit(&mut self, position: usize, text: &str) -> Result<Task> {
        let task = self.store.edit_at(position, text)?;
        self.editing.remove(&task.id);
        self.view.apply(Patch::EndEdit {
            position,
            text: task.text.clone(),
        });
        Ok(task)
    }

    /// Consumes the adapter, returning the store and the view.
    pub fn into_parts(self) -> (TaskStore, V) {
        (self.store, self.view)
    }
}
