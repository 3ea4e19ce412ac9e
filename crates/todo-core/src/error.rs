//! Error types for task list operations.

use serde::Serialize;
use thiserror::Error;

/// The two ways a task list operation can be rejected.
///
/// Both are recoverable: a rejected operation leaves the list exactly as it
/// was, and the caller is expected to report the problem and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Blank or whitespace-only text where a task text is required
    #[error("Task text must not be empty")]
    EmptyInput,
    /// Position outside `[0, len)`, or input that is not a position at all
    #[error("Position '{requested}' is out of range for a list of {len} task(s)")]
    OutOfRange { requested: String, len: usize },
}

/// Machine-readable error kind, used by front ends that report errors as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    OutOfRange,
}

impl TaskError {
    /// Creates an out-of-range error for a requested position.
    pub fn out_of_range(requested: impl ToString, len: usize) -> Self {
        TaskError::OutOfRange {
            requested: requested.to_string(),
            len,
        }
    }

    /// Returns the kind of this error without its context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::EmptyInput => ErrorKind::EmptyInput,
            TaskError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

/// Result type alias for task list operations
pub type Result<T> = std::result::Result<T, TaskError>;
