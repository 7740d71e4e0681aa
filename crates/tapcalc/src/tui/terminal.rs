//! Terminal session guard
//!
//! Raw mode, the alternate screen and mouse capture are acquired together in
//! [`TerminalSession::start`] and released together on drop, on error paths
//! too.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::debug;

use crate::error::AppResult;

/// An owned, configured terminal
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl std::fmt::Debug for TerminalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession").finish_non_exhaustive()
    }
}

impl TerminalSession {
    /// Puts the terminal into raw mode on the alternate screen
    pub fn start() -> AppResult<Self> {
        enable_raw_mode()?;
        match Self::enter() {
            Ok(terminal) => {
                debug!("terminal session started");
                Ok(Self { terminal })
            }
            Err(err) => {
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }

    fn enter() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Current terminal size as (width, height)
    pub fn size(&self) -> AppResult<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }

    /// Draws one frame
    pub fn draw<F>(&mut self, render: F) -> AppResult<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
        debug!("terminal session restored");
    }
}
