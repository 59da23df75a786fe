//! Terminal management
//!
//! Owns the crossterm backend: raw mode and alternate screen on init,
//! restore on drop, and a tick-bounded key poll.

use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    modes: TerminalModes,
    last_tick: Instant,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            modes: TerminalModes::default(),
            last_tick: Instant::now(),
            tick_rate,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.modes.raw = true;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.modes.alternate_screen = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        let modes = self.modes.take();
        if modes.raw {
            disable_raw_mode()?;
        }
        if modes.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for a key press
    pub fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

/// Terminal modes entered so far, each undone separately on restore
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TerminalModes {
    raw: bool,
    alternate_screen: bool,
}

impl TerminalModes {
    /// Hand back what needs undoing and forget it
    fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_mode_undone_without_alternate_screen() {
        // Alternate screen failed after raw mode was enabled
        let mut modes = TerminalModes {
            raw: true,
            alternate_screen: false,
        };
        let pending = modes.take();
        assert!(pending.raw);
        assert!(!pending.alternate_screen);
        assert_eq!(modes, TerminalModes::default());
    }

    #[test]
    fn test_restore_runs_once() {
        let mut modes = TerminalModes {
            raw: true,
            alternate_screen: true,
        };
        assert_eq!(
            modes.take(),
            TerminalModes {
                raw: true,
                alternate_screen: true
            }
        );
        assert_eq!(modes.take(), TerminalModes::default());
    }
}
