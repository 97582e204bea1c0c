//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::feeds::FeedFetcher;
use crate::ui;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal, Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undo `setup_terminal`, returning the user's shell to normal.
fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Runs the dashboard as a terminal UI.
///
/// The session's event receiver and shutdown handle move into the UI loop.
/// The terminal is restored before any UI error surfaces, then the feed
/// workers are awaited so the process exits cleanly.
pub async fn run_tui_mode(
    session: SessionData,
    with_background_color: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", session.feeds.environment());

    let mut terminal = setup_terminal()?;

    let app = ui::App::new(
        session.feeds.environment().clone(),
        session.event_receiver,
        session.shutdown_sender.clone(),
        with_background_color,
    );
    let result = ui::run(&mut terminal, app).await;

    restore_terminal(&mut terminal)?;
    result?;

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
