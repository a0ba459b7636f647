//! Minesweeper in the terminal.

mod app;
mod cli;
mod input;
mod logging;
mod settings;
mod terminal;
mod ui;

use clap::{CommandFactory, Parser, error::ErrorKind};
use std::process::ExitCode;
use termsweep_core::SessionState;

use app::App;
use cli::Args;
use settings::Settings;

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => Args::command()
                .error(ErrorKind::Io, format!("{err:#}"))
                .exit(),
        },
        None => Settings::default(),
    };
    let config = match args.game_config(&settings) {
        Ok(config) => config,
        Err(err) => Args::command()
            .error(ErrorKind::ValueValidation, err)
            .exit(),
    };

    if let Err(err) = logging::init(&args.log_file, args.verbose.log_level_filter()) {
        eprintln!("warning: {err:#}");
    }
    log::debug!("Args: {:?}", args);

    match run(App::new(config, args.seed)) {
        Ok(SessionState::Won) => {
            println!("You cleared the board.");
            ExitCode::SUCCESS
        }
        Ok(SessionState::Lost) => {
            println!("You hit a mine.");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Owns the terminal for the duration of the game and always hands it back.
fn run(mut app: App) -> anyhow::Result<SessionState> {
    terminal::check_colors()?;

    let mut tui = terminal::init()?;
    let result = app.run(&mut tui);
    terminal::restore()?;
    result
}
