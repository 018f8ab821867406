//! Terminal takeover for the dashboard.
//!
//! `enter()` switches to raw mode on the alternate screen with mouse capture
//! and bracketed paste; `leave()` undoes all of it. The runtime calls `leave()`
//! from `Drop`, and the panic hook calls it before the panic message prints.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal.
///
/// Mouse capture drives list clicks and wheel scrolling; bracketed paste
/// delivers a pasted import path as one event.
///
/// # Errors
/// Returns an error if any mode switch fails. Call `leave()` to undo a partial
/// takeover.
pub fn enter() -> Result<DashboardTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )
    .context("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Gives the terminal back. Safe to call more than once.
///
/// # Errors
/// Returns an error if the alternate screen or raw mode cannot be left.
pub fn leave() -> Result<()> {
    // Input modes first, while still in raw mode; harmless if never enabled.
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);

    execute!(io::stdout(), LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")
}

/// Chains a hook that gives the terminal back before the default panic output.
///
/// Install before `enter()`.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave();
        previous(info);
    }));
}
