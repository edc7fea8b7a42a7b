//! Terminal handling shared by the TUI screens
//!
//! [`App`] owns the ratatui terminal: raw mode, the alternate screen and
//! mouse capture are set up on creation and restored on drop, so a panic
//! or early return never leaves the user's shell in a broken state.

pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Terminal wrapper for fullscreen TUI screens.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl App {
    /// Enter fullscreen mode. `tick_rate` bounds how long `poll_event`
    /// waits for input.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enter_terminal()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to initialize terminal")?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for the next input event.
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout.min(self.tick_rate))? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Nothing useful to do with a failure while unwinding.
        let _ = leave_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Ok(())
}

fn leave_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
