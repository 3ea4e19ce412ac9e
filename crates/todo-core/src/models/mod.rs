//! Data models for the task list.
//!
//! Display implementations live in [`crate::display`], keeping the data
//! structures free of presentation logic.

pub mod task;


pub use task::{Task, TaskId};
