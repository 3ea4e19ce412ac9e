//! Display wrappers for task lists and operation notices.
//!
//! Domain models stay free of formatting; the wrappers here decide how a list
//! or the outcome of an operation reads on screen.
//!
//! - [`collections`]: the numbered task listing ([`Tasks`])
//! - [`notices`]: one-line operation feedback ([`Notice`])
//!
//! ```rust
//! use todo_core::{display::Tasks, Task};
//!
//! let empty: Vec<Task> = Vec::new();
//! assert_eq!(format!("{}", Tasks(&empty)), "No tasks yet.\n");
//! ```

pub mod collections;
pub mod notices;

pub use collections::Tasks;
pub use notices::Notice;
