//! Strictly Timetravel - terminal adapter
//!
//! Interactive tic-tac-toe with a navigable move history, plus a headless
//! `replay` command for scripted runs.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::{ConfigSource, TuiConfig};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use strictly_timetravel::SortOrder;
use tracing::{info, instrument};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = TuiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play { descending: false }) {
        Command::Play { descending } => {
            let config = if descending {
                config.with_sort(SortOrder::Descending)
            } else {
                config
            };
            logging::init_file_logging(&config)?;
            log_config(&source, &config);
            run_tui(&config)
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr_logging(&config);
            log_config(&source, &config);
            let output = replay::run(&moves, jump, json, *config.sort())?;
            println!("{}", output);
            Ok(())
        }
    }
}

fn log_config(source: &ConfigSource, config: &TuiConfig) {
    info!(%source, sort = ?config.sort(), filter = %config.log_filter(), "Config loaded");
}

/// Runs the interactive UI, restoring the terminal however it exits.
#[instrument(skip(config))]
fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(*config.sort()));
    ratatui::restore();
    info!("Terminal restored");
    result
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}
