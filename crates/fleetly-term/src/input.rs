use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical commands produced by the terminal input layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    TogglePlay,
    RateUp,
    RateDown,
    StepBack,
    StepForward,
    Restart,
    /// The terminal lost focus; playback should halt.
    Suspend,
    /// The terminal was resized; the current word needs repainting.
    Redraw,
    Quit,
}

/// Waits up to `timeout` for one terminal event and translates it.
///
/// Returns `None` on timeout or on events with no command mapping.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let command = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => translate_key(key),
        Event::FocusLost => Some(Command::Suspend),
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    };
    Ok(command)
}

fn translate_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Char(' ') => Some(Command::TogglePlay),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::RateUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Command::RateDown),
        KeyCode::Left => Some(Command::StepBack),
        KeyCode::Right => Some(Command::StepForward),
        KeyCode::Home => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
