//! Render patches and the views that consume them.

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// A localized change to the rendered list.
///
/// Positions are 0-based and refer to the rendered list as it was before the
/// patch is applied. A [`Patch::Remove`] at `position` shifts every rendered
/// element after it down by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "patch", rename_all = "snake_case")]
pub enum Patch {
    /// Render a new task at the end of the list
    Append { position: usize, task: Task },
    /// Empty the text input used for submitting tasks
    ClearInput,
    /// Drop the rendered element at `position`
    Remove { position: usize },
    /// Set or clear the done styling of one element
    SetDone { position: usize, done: bool },
    /// Swap the static text for an editable field holding `text`
    BeginEdit { position: usize, text: String },
    /// Restore the static text, now showing `text`
    EndEdit { position: usize, text: String },
}

/// Caller-supplied view layer that applies render patches.
pub trait View {
    fn apply(&mut self, patch: Patch);
}

/// View that records patches for a transport to forward.
#[derive(Debug, Default)]
pub struct PatchLog {
    patches: Vec<Patch>,
}

impl PatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every patch recorded since the last drain.
    pub fn drain(&mut self) -> Vec<Patch> {
        std::mem::take(&mut self.patches)
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

impl View for PatchLog {
    fn apply(&mut self, patch: Patch) {
        self.patches.push(patch);
    }
}

/// One element of a [`RenderedList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub text: String,
    pub done: bool,
    /// Text of the editable field while the item is in edit mode
    pub editing: Option<String>,
}

/// In-memory mirror of a rendered task list.
///
/// Applies patches the way a document view would, so the rendered state can
/// be compared against the store after any sequence of gestures.
#[derive(Debug, Default)]
pub struct RenderedList {
    pub items: Vec<RenderedItem>,
    /// Number of times the submit input has been cleared
    pub input_clears: usize,
}

impl RenderedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered texts in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }
}

impl View for RenderedList {
    fn apply(&mut self, patch: Patch) {
        match patch {
            Patch::Append { task, .. } => self.items.push(RenderedItem {
                text: task.text,
                done: task.done,
                editing: None,
            }),
            Patch::ClearInput => self.input_clears += 1,
            Patch::Remove { position } => {
                if position < self.items.len() {
                    self.items.remove(position);
                }
            }
            Patch::SetDone { position, done } => {
                if let Some(item) = self.items.get_mut(position) {
                    item.done = done;
                }
            }
            Patch::BeginEdit { position, text } => {
                if let Some(item) = self.items.get_mut(position) {
                    item.editing = Some(text);
                }
            }
            Patch::EndEdit { position, text } => {
                if let Some(item) = self.items.get_mut(position) {
                    item.text = text;
                    item.editing = None;
                }
            }
        }
    }
}
