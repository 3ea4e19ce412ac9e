//! The task store: sole owner and mutator of the task list.
//!
//! [`TaskStore`] holds an ordered list of [`Task`]s where insertion order is
//! display order. Every operation validates its input and either applies its
//! change completely or leaves the list untouched.
//!
//! # Positions
//!
//! All operations address tasks by 0-based position. Removing the task at
//! position `i` shifts every task after it down by one, exactly like a
//! `Vec::remove`:
//!
//! ```rust
//! use todo_core::TaskStore;
//!
//! let mut store = TaskStore::new();
//! for text in ["a", "b", "c"] {
//!     store.add(text)?;
//! }
//! let removed = store.remove_at(1)?;
//! assert_eq!(removed.text, "b");
//!
//! let texts: Vec<_> = store.list().iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["a", "c"]);
//! # Ok::<(), todo_core::TaskError>(())
//! ```
//!
//! # Editing
//!
//! A blank edit keeps the task's previous text instead of failing:
//!
//! ```rust
//! use todo_core::TaskStore;
//!
//! let mut store = TaskStore::new();
//! store.add("buy milk")?;
//! let task = store.edit_at(0, "   ")?;
//! assert_eq!(task.text, "buy milk");
//! # Ok::<(), todo_core::TaskError>(())
//! ```

use log::debug;

use crate::{
    error::{Result, TaskError},
    models::{Task, TaskId},
};


/// Ordered, in-memory task list with validated operations.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyInput`] if `text` is blank after trimming.
    pub fn add(&mut self, text: &str) -> Result<Task> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Rejected add: empty input");
            return Err(TaskError::EmptyInput);
        }

        self.next_id += 1;
        let task = Task::new(TaskId(self.next_id), text.to_string());
        self.tasks.push(task.clone());
        debug!("Added task {} at position {}", task.id, self.tasks.len() - 1);
        Ok(task)
    }

    /// Removes and returns the task at `index`, shifting later tasks down.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let task = self.tasks.remove(index);
        debug!("Removed task {} from position {index}", task.id);
        Ok(task)
    }

    /// Replaces the text of the task at `index`.
    ///
    /// Blank `new_text` keeps the previous text and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if `index >= len`.
    pub fn edit_at(&mut self, index: usize, new_text: &str) -> Result<Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];

        let new_text = new_text.trim();
        if new_text.is_empty() {
            debug!("Blank edit on task {}, keeping previous text", task.id);
        } else {
            task.text = new_text.to_string();
            debug!("Edited task {} at position {index}", task.id);
        }
        Ok(task.clone())
    }

    /// Flips the completion flag of the task at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::OutOfRange`] if `index >= len`.
    pub fn toggle_at(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        let task = &mut self.tasks[index];
        task.done = !task.done;
        debug!("Toggled task {} to done={}", task.id, task.done);
        Ok(task.clone())
    }

    /// Read-only view of the tasks in display order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Current position of the task with the given id.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            debug!("Rejected position {index}: list has {} task(s)", self.tasks.len());
            Err(TaskError::out_of_range(index, self.tasks.len()))
        }
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
