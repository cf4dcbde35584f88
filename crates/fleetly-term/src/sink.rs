use std::io::{self, Write, stdout};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use fleetly_core::{PresentationSink, WordFrame};
use log::warn;

/// Horizontal position of the recognition point, as a percentage of the
/// terminal width.
const ORP_ANCHOR_PERCENT: u16 = 42;

/// Crossterm implementation of the engine's display target.
///
/// The recognition char of every word lands on the same screen column,
/// marked with fixation ticks above and below, so the reader's eye never
/// moves. Draw failures are logged once and swallowed; the engine never
/// sees them.
pub struct TermSink {
    fault_logged: bool,
}

impl TermSink {
    pub fn new() -> Self {
        Self {
            fault_logged: false,
        }
    }

    /// Bottom status row: rate, progress, transport state, key help.
    pub fn draw_status(
        &mut self,
        wpm: u16,
        position: usize,
        total: usize,
        running: bool,
    ) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let state = if running { "playing" } else { "paused" };
        let line = format!(
            "{wpm} wpm | word {}/{} | {state} | space play/pause  +/- rate  arrows step  q quit",
            (position + 1).min(total),
            total,
        );
        let line: String = line.chars().take(width as usize).collect();

        let mut out = stdout();
        queue!(
            out,
            MoveTo(0, height.saturating_sub(1)),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        out.flush()
    }

    fn draw_word(&self, frame: &WordFrame<'_>) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let row = (height / 2).max(1);
        let anchor_col = anchor_column(width);

        let (before, focus, after) = frame.split();
        let before_cols = before.chars().count() as u16;
        let start_col = anchor_col.saturating_sub(before_cols);

        let mut out = stdout();
        queue!(
            out,
            MoveTo(0, row - 1),
            Clear(ClearType::CurrentLine),
            MoveTo(anchor_col, row - 1),
            Print('┬'),
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            MoveTo(start_col, row),
            Print(before),
            SetForegroundColor(Color::Red),
            Print(focus),
            ResetColor,
            Print(after),
            MoveTo(0, row + 1),
            Clear(ClearType::CurrentLine),
            MoveTo(anchor_col, row + 1),
            Print('┴'),
        )?;
        out.flush()
    }

    fn blank_word(&self) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        let row = (height / 2).max(1);

        let mut out = stdout();
        queue!(
            out,
            MoveTo(0, row - 1),
            Clear(ClearType::CurrentLine),
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            MoveTo(0, row + 1),
            Clear(ClearType::CurrentLine),
        )?;
        out.flush()
    }

    fn note_fault(&mut self, err: io::Error) {
        if !self.fault_logged {
            warn!("terminal draw failed: {err}");
            self.fault_logged = true;
        }
    }
}

impl Default for TermSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSink for TermSink {
    fn render(&mut self, frame: &WordFrame<'_>) {
        if let Err(err) = self.draw_word(frame) {
            self.note_fault(err);
        }
    }

    fn clear(&mut self) {
        if let Err(err) = self.blank_word() {
            self.note_fault(err);
        }
    }
}

fn anchor_column(width: u16) -> u16 {
    (u32::from(width) * u32::from(ORP_ANCHOR_PERCENT) / 100) as u16
}
