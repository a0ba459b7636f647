use anyhow::bail;
use crossterm::{
    cursor::Show,
    execute,
    style::available_color_count,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Fails on terminals with fewer than the eight colors the board is drawn with.
pub fn check_colors() -> anyhow::Result<()> {
    let colors = available_color_count();
    log::debug!("Terminal reports {} colors", colors);
    require_colors(colors)
}

fn require_colors(count: u16) -> anyhow::Result<()> {
    if count < 8 {
        bail!("terminal does not support color");
    }
    Ok(())
}

/// Raw mode plus alternate screen. A panic restores the terminal before the message
/// is printed.
pub fn init() -> io::Result<Tui> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    undo_on_err(execute!(stdout, EnterAlternateScreen), disable_raw_mode)?;
    undo_on_err(Terminal::new(CrosstermBackend::new(stdout)), restore)
}

/// Runs `undo` when `result` is an error, keeping the original error.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    result.inspect_err(|err| {
        log::error!("Terminal setup failed: {}", err);
        let _ = undo();
    })
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}
