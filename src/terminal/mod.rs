//! Terminal management with RAII cleanup.
//!
//! Entering the TUI flips the terminal into raw mode, the alternate
//! screen and (optionally) mouse capture. All of it must be undone on
//! every exit path, including panics, or the user's shell is left
//! unusable. [`TerminalGuard`] restores state on drop and
//! [`setup_panic_hook`] restores it before the panic message prints.

use std::io::{self, Stdout, Write};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Put the terminal into TUI mode.
pub fn enter_tui_mode(writer: &mut impl Write, mouse: bool) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Restore the terminal to cooked mode. Errors are swallowed: restore is
/// called on exit paths where there is nothing left to do about them.
pub fn leave_tui_mode(writer: &mut impl Write) {
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before the default
/// hook prints the panic message.
pub fn setup_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_tui_mode(&mut io::stdout());
        default_hook(info);
    }));
}

/// RAII wrapper owning the terminal for the application's lifetime.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enter TUI mode and build the terminal.
    pub fn new(mouse: bool) -> Result<Self> {
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout, mouse)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// The terminal for drawing.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal explicitly, ahead of drop.
    pub fn restore(&mut self) {
        if !self.restored {
            leave_tui_mode(&mut io::stdout());
            self.restored = true;
        }
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        // Not a terminal in CI; restore must still be safe to call
        let mut sink = Vec::new();
        leave_tui_mode(&mut sink);
    }
}
