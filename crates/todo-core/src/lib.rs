//! Core library for the todo task list.
//!
//! This crate owns the task list and every rule that governs it. Front ends
//! (the interactive menu and the event-driven adapter) only translate user
//! gestures into [`TaskStore`] calls and render what comes back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front ends    │    │    TaskStore    │    │    Rendering    │
//! │ (menu, events)  │───▶│ (add, remove,   │───▶│ (Tasks display, │
//! │                 │    │  edit, toggle)  │    │  render patches)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Positions are the public identity of a task: 0-based inside the store and
//! 1-based whenever they are shown to a person. Removing a task shifts every
//! later task down by one position.
//!
//! # Quick Start
//!
//! ```rust
//! use todo_core::{display::Tasks, TaskStore};
//!
//! let mut store = TaskStore::new();
//! store.add("write spec")?;
//! store.add("test it")?;
//! assert_eq!(format!("{}", Tasks(store.list())), "1. write spec\n2. test it\n");
//!
//! store.remove_at(0)?;
//! assert_eq!(format!("{}", Tasks(store.list())), "1. test it\n");
//! # Ok::<(), todo_core::TaskError>(())
//! ```

pub mod adapter;
pub mod display;
pub mod error;
pub mod models;
pub mod position;
pub mod store;

// Re-export commonly used types
pub use adapter::{EventAdapter, Gesture, Patch, PatchLog, RenderedList, View};
pub use display::{Notice, Tasks};
pub use error::{ErrorKind, Result, TaskError};
pub use models::{Task, TaskId};
pub use position::parse_display_position;
pub use store::TaskStore;
