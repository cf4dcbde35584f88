use std::io::{self, stdout};

use crossterm::{
    cursor,
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Raw-mode alternate-screen terminal session with focus reporting.
///
/// Dropping the session restores the terminal, including on error paths.
pub struct TermSession {
    _private: (),
}

impl TermSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableFocusChange,
            cursor::Hide
        )?;
        Ok(Self { _private: () })
    }
}

impl Drop for TermSession {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            cursor::Show,
            DisableFocusChange,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
