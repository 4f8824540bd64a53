//! Terminal session: raw mode and alternate-screen lifecycle.
//!
//! Owns the mode switches that must be undone before the process exits.
//! `enter` unwinds any step it already took when a later step fails, so a
//! setup error never leaves the terminal half-configured. `restore` runs
//! exactly once; a `Drop` fallback covers panic unwinding.

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// DECSTR soft reset, clears colors and modes left over from the last frame.
const SOFT_RESET: &[u8] = b"\x1b[!p";

/// An active raw-mode + alternate-screen terminal session.
#[derive(Debug)]
pub struct Session {
    mouse: bool,
    active: bool,
}

impl Session {
    /// Switch the terminal to raw mode on the alternate screen with the
    /// cursor hidden, optionally capturing mouse events.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        if mouse {
            if let Err(e) = execute!(stdout, EnableMouseCapture) {
                let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
                let _ = terminal::disable_raw_mode();
                return Err(e);
            }
        }

        Ok(Self {
            mouse,
            active: true,
        })
    }

    /// Current terminal size in `(columns, rows)`, status row included.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Restore the terminal: soft reset, show the cursor, return to the
    /// primary screen buffer, leave raw mode.
    ///
    /// Subsequent calls are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut stdout = io::stdout();
        stdout.write_all(SOFT_RESET)?;
        if self.mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Best effort only; the orchestrator calls restore() explicitly and
        // reports its error, this covers unwinding paths.
        let _ = self.restore();
    }
}
