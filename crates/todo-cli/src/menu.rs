//! Interactive numbered menu over a task store.
//!
//! The session blocks on each line of input, performs at most one store
//! operation per action, and re-prints the whole list afterwards. Store
//! errors are reported as notices and never end the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use todo_core::{parse_display_position, Notice, TaskStore};

use crate::renderer::TerminalRenderer;

const MENU: &str = "Choose an option:\n1. Add Task\n2. Remove Task\n3. View Tasks\n4. Exit";
const ADD_PROMPT: &str = "Enter a task:";
const REMOVE_PROMPT: &str = "Enter the task number to remove:";
const LIST_HEADER: &str = "Your To-Do List:";

/// A menu session reading choices from `input` and printing to `output`.
pub struct MenuSession<R, W> {
    input: R,
    output: W,
    renderer: TerminalRenderer,
    store: TaskStore,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W, renderer: TerminalRenderer) -> Self {
        Self {
            input,
            output,
            renderer,
            store: TaskStore::new(),
        }
    }

    /// Runs the menu until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.read_line()? else {
                info!("Input closed, ending menu session");
                return Ok(());
            };

            match choice.trim() {
                "1" => self.add_task()?,
                "2" => self.remove_task()?,
                "3" => self.show_tasks()?,
                "4" => {
                    self.notice(&Notice::Exiting)?;
                    return Ok(());
                }
                other => {
                    debug!("Unknown menu choice {other:?}");
                    self.notice(&Notice::InvalidChoice)?;
                }
            }
        }
    }

    fn add_task(&mut self) -> Result<()> {
        writeln!(self.output, "{ADD_PROMPT}")?;
        let text = self.read_line()?.unwrap_or_default();

        match self.store.add(&text) {
            Ok(task) => self.notice(&Notice::Added(&task))?,
            Err(e) => self.notice(&Notice::for_error(&e))?,
        }
        self.show_tasks()
    }

    fn remove_task(&mut self) -> Result<()> {
        self.show_tasks()?;
        writeln!(self.output, "{REMOVE_PROMPT}")?;
        let raw = self.read_line()?.unwrap_or_default();

        let removed = parse_display_position(&raw, self.store.len())
            .and_then(|index| self.store.remove_at(index));
        match removed {
            Ok(task) => self.notice(&Notice::Removed(&task))?,
            Err(e) => self.notice(&Notice::for_error(&e))?,
        }
        self.show_tasks()
    }

    fn show_tasks(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{LIST_HEADER}")?;
        self.renderer.render_tasks(&mut self.output, self.store.list())
    }

    fn notice(&mut self, notice: &Notice<'_>) -> Result<()> {
        writeln!(self.output, "{notice}")?;
        Ok(())
    }

    /// Reads one line, returning `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    fn into_parts(self) -> (TaskStore, W) {
        (self.store, self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str) -> (TaskStore, String) {
        run_script_with(script, TerminalRenderer::new(false))
    }

    fn run_script_with(script: &str, renderer: TerminalRenderer) -> (TaskStore, String) {
        let mut session = MenuSession::new(Cursor::new(script.to_string()), Vec::new(), renderer);
        session.run().unwrap();
        let (store, output) = session.into_parts();
        (store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (store, output) = run_script("4\n");
        assert!(store.is_empty());
        assert!(output.starts_with(MENU));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_add_prints_notice_and_listing() {
        let (store, output) = run_script("1\nbuy milk\n4\n");
        assert_eq!(store.len(), 1);
        assert!(output.contains("Enter a task:\nAdded: \"buy milk\"\n\nYour To-Do List:\n1. buy milk\n"));
    }

    #[test]
    fn test_blank_add_is_rejected() {
        let (store, output) = run_script("1\n   \n4\n");
        assert!(store.is_empty());
        assert!(output.contains("No task entered.\n\nYour To-Do List:\nNo tasks yet.\n"));
    }

    #[test]
    fn test_remove_uses_one_based_numbers() {
        let (store, output) = run_script("1\na\n1\nb\n1\nc\n2\n2\n4\n");
        let texts: Vec<_> = store.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
        assert!(output.contains("Removed: \"b\"\n\nYour To-Do List:\n1. a\n2. c\n"));
    }

    #[test]
    fn test_invalid_remove_numbers() {
        let (store, output) = run_script("1\na\n2\n0\n2\n5\n2\nabc\n4\n");
        assert_eq!(store.len(), 1);
        assert_eq!(output.matches("Invalid task number.").count(), 3);
    }

    #[test]
    fn test_remove_lists_before_prompting() {
        let (_, output) = run_script("2\n1\n4\n");
        assert!(output.contains("Your To-Do List:\nNo tasks yet.\nEnter the task number to remove:\nInvalid task number.\n"));
    }

    #[test]
    fn test_view_and_invalid_choice() {
        let (_, output) = run_script("3\n9\n\n4\n");
        assert!(output.contains("\nYour To-Do List:\nNo tasks yet.\n"));
        assert_eq!(output.matches("Invalid choice.").count(), 2);
    }

    #[test]
    fn test_choice_is_trimmed() {
        let (store, _) = run_script(" 1 \r\nx\r\n 4\n");
        assert_eq!(store.list()[0].text, "x");
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (store, output) = run_script("1\nhalf");
        assert_eq!(store.len(), 1);
        assert!(!output.contains("Exiting..."));
    }

    #[test]
    fn test_end_of_input_at_prompt_counts_as_empty() {
        let (store, output) = run_script("1\n");
        assert!(store.is_empty());
        assert!(output.contains("No task entered."));
    }

    #[test]
    fn test_rich_listing_shows_markdown_characters_as_typed() {
        let text = "*urgent* fix `cfg` a_b_c";
        let (store, output) =
            run_script_with(&format!("1\n{text}\n4\n"), TerminalRenderer::new(true));

        assert_eq!(store.list()[0].text, text);
        assert!(output.contains(&format!("Added: \"{text}\"\n")));
        assert!(output.contains(&format!(" {text}\n")));
    }
}
