//! Terminal rendering module for task listings
//!
//! Rich output styles only the `<n>.` numbering with termimad; task text is
//! always written exactly as entered. Plain output is the listing as-is.

use std::io::Write;

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};
use todo_core::{position::display_position, Task, Tasks};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);

        Self { rich_enabled, skin }
    }

    /// Render the numbered task listing into `out`
    pub fn render_tasks<W: Write>(&self, out: &mut W, tasks: &[Task]) -> Result<()> {
        if !self.rich_enabled || tasks.is_empty() {
            write!(out, "{}", Tasks(tasks))?;
            return Ok(());
        }

        for (index, task) in tasks.iter().enumerate() {
            let number = format!("{}.", display_position(index));
            writeln!(out, "{} {}", self.skin.bold.apply_to(number), task.text)?;
        }
        Ok(())
    }
}
