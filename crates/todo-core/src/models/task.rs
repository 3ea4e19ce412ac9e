//! Task model definition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the store when a task is added.
///
/// Ids are never reused within one store. They are an internal handle only;
/// the public contract of every operation is the task's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier within the owning store
    pub id: TaskId,

    /// Display text, always non-empty and trimmed
    pub text: String,

    /// Completion flag, toggled only by the event front end
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }
}
