use clap::Parser;
use std::path::PathBuf;
use termsweep_core::{CellCount, Coord, GameConfig, GameError, mult};
use thiserror::Error;

use crate::settings::Settings;

/// Minesweeper in the terminal.
///
/// Give one number to set the mine count, two to set the board size, or three for
/// both: `termsweep 16 16 40`.
#[derive(Parser, Debug)]
#[command(version, about, override_usage = "termsweep [OPTIONS] [COLS ROWS] [MINES]")]
pub struct Args {
    /// Board size and/or mine count
    #[arg(value_name = "NUMBER")]
    pub numbers: Vec<u32>,

    /// What log level to use, off unless asked for
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::OffLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML file with default and maximum board dimensions
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Where log output goes, the screen belongs to the game
    #[arg(long, value_name = "PATH", default_value = "termsweep.log")]
    pub log_file: PathBuf,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgError {
    #[error("too many arguments")]
    TooManyArguments,
    #[error("expected a cols value between 1 and {max} (inclusive)")]
    Cols { max: Coord },
    #[error("expected a rows value between 1 and {max} (inclusive)")]
    Rows { max: Coord },
    #[error("expected a mines value above 0")]
    NoMines,
    #[error("expected a mines value less than or equal to rows*cols ({capacity})")]
    TooManyMines { capacity: CellCount },
    #[error(transparent)]
    Game(#[from] GameError),
}

impl Args {
    /// Board size and mine count from the positional numbers, falling back to
    /// `settings` for whatever was not given.
    pub fn game_config(&self, settings: &Settings) -> Result<GameConfig, ArgError> {
        let (mut cols, mut rows, mut mines): (u32, u32, CellCount) = (
            settings.default_cols.into(),
            settings.default_rows.into(),
            settings.default_mines,
        );

        match *self.numbers.as_slice() {
            [] => {}
            [m] => mines = m,
            [c, r] => (cols, rows) = (c, r),
            [c, r, m] => (cols, rows, mines) = (c, r, m),
            _ => return Err(ArgError::TooManyArguments),
        }

        let cols = axis(cols, settings.max_cols).ok_or(ArgError::Cols {
            max: settings.max_cols,
        })?;
        let rows = axis(rows, settings.max_rows).ok_or(ArgError::Rows {
            max: settings.max_rows,
        })?;
        if mines < 1 {
            return Err(ArgError::NoMines);
        }
        let capacity = mult(cols, rows);
        if mines > capacity {
            return Err(ArgError::TooManyMines { capacity });
        }

        Ok(GameConfig::new((cols, rows), mines)?)
    }
}

fn axis(value: u32, max: Coord) -> Option<Coord> {
    Coord::try_from(value)
        .ok()
        .filter(|&value| (1..=max).contains(&value))
}
