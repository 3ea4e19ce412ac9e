//! Numbered listing of tasks.

use std::fmt;

use crate::{models::Task, position::display_position};

/// Newtype wrapper that formats tasks as a 1-based numbered list.
///
/// Each task is one line, `"<n>. <text>"`. An empty slice formats as the
/// single line `No tasks yet.`. Completion state is not shown.
///
/// # Examples
///
/// ```rust
/// use todo_core::{display::Tasks, TaskStore};
///
/// let mut store = TaskStore::new();
/// store.add("write spec")?;
/// store.add("test it")?;
///
/// assert_eq!(Tasks(store.list()).to_string(), "1. write spec\n2. test it\n");
/// # Ok::<(), todo_core::TaskError>(())
/// ```
pub struct Tasks<'a>(pub &'a [Task]);

impl Tasks<'_> {
    /// Individual `"<n>. <text>"` lines, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{}. {}", display_position(index), task.text))
            .collect()
    }
}

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks yet.");
        }
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskStore;

    #[test]
    fn test_empty_listing() {
        assert_eq!(Tasks(&[]).to_string(), "No tasks yet.\n");
        assert!(Tasks(&[]).lines().is_empty());
    }

    #[test]
    fn test_listing_is_one_based() {
        let mut store = TaskStore::new();
        store.add("write spec").unwrap();
        store.add("test it").unwrap();

        assert_eq!(Tasks(store.list()).lines(), ["1. write spec", "2. test it"]);
    }

    #[test]
    fn test_listing_renumbers_after_remove() {
        let mut store = TaskStore::new();
        store.add("write spec").unwrap();
        store.add("test it").unwrap();
        store.remove_at(0).unwrap();

        assert_eq!(Tasks(store.list()).to_string(), "1. test it\n");
    }

    #[test]
    fn test_listing_ignores_done_flag() {
        let mut store = TaskStore::new();
        store.add("a").unwrap();
        store.toggle_at(0).unwrap();

        assert_eq!(Tasks(store.list()).to_string(), "1. a\n");
    }
}
