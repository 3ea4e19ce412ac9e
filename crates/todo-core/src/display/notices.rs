//! One-line feedback messages for menu operations.

use std::fmt;

use crate::{error::TaskError, models::Task};

/// Feedback printed after a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice<'a> {
    Added(&'a Task),
    Removed(&'a Task),
    NoTaskEntered,
    InvalidTaskNumber,
    InvalidChoice,
    Exiting,
}

impl<'a> Notice<'a> {
    /// Maps a rejected add or remove to the notice shown for it.
    pub fn for_error(error: &TaskError) -> Notice<'a> {
        match error {
            TaskError::EmptyInput => Notice::NoTaskEntered,
            TaskError::OutOfRange { .. } => Notice::InvalidTaskNumber,
        }
    }
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added(task) => write!(f, "Added: \"{}\"", task.text),
            Notice::Removed(task) => write!(f, "Removed: \"{}\"", task.text),
            Notice::NoTaskEntered => write!(f, "No task entered."),
            Notice::InvalidTaskNumber => write!(f, "Invalid task number."),
            Notice::InvalidChoice => write!(f, "Invalid choice."),
            Notice::Exiting => write!(f, "Exiting..."),
        }
    }
}
