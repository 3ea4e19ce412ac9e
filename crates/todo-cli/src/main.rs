//! Todo CLI Application
//!
//! Command-line front ends for the todo task list: an interactive numbered
//! menu and a JSON-lines event driver.

mod args;
mod events;
mod menu;
mod renderer;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use events::EventSession;
use log::info;
use menu::MenuSession;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, command } = Args::parse();

    let rich = !no_color && io::stdout().is_terminal();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            info!("Starting menu session");
            let renderer = TerminalRenderer::new(rich);
            MenuSession::new(stdin, stdout, renderer)
                .run()
                .context("Menu session failed")
        }
        Commands::Events => {
            info!("Starting event session");
            EventSession::new(stdin, stdout)
                .run()
                .context("Event session failed")
        }
    }
}
