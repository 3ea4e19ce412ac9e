use clap::{Parser, Subcommand};

/// Interactive task list
///
/// Keeps an ordered list of tasks for the length of one session. Tasks can be
/// managed through a numbered text menu, or through a JSON-lines event stream
/// intended for a separate view layer.
#[derive(Parser)]
#[command(version, about, name = "todo")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available front ends
///
/// Both drive the same task store; `menu` is used when no command is given.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive numbered menu
    #[command(alias = "m")]
    Menu,
    /// Read gestures as JSON lines on stdin and write render patches to stdout
    #[command(alias = "e")]
    Events,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_command() {
        let args = Args::try_parse_from(["todo"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.no_color);
    }

    #[test]
    fn test_global_no_color_after_subcommand() {
        let args = Args::try_parse_from(["todo", "events", "--no-color"]).unwrap();
        assert_eq!(args.command, Some(Commands::Events));
        assert!(args.no_color);
    }

    #[test]
    fn test_menu_alias() {
        let args = Args::try_parse_from(["todo", "m"]).unwrap();
        assert_eq!(args.command, Some(Commands::Menu));
    }
}
