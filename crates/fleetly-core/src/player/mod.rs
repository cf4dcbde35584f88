//! Play/pause state machine driving word advancement.

use log::debug;

use crate::{
    pacing::{MIN_WPM, delay_ms},
    render::{PresentationSink, WordFrame},
    tokenize::{WordSequence, tokenize},
};

/// Outcome of one cooperative [`Player::tick`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    /// Idle, or the pending advancement is not due yet.
    NoChange,
    /// Advanced to and rendered the next word; another advancement is
    /// pending.
    Advanced,
    /// Advanced past the last word and went idle, leaving it on the sink.
    Finished,
}

/// Playback rate configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RateConfig {
    pub words_per_minute: u16,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 400,
        }
    }
}

/// Playback controller.
///
/// Owns the word sequence, the cursor, the rate, and the single pending
/// advancement deadline. Rendering goes through the injected sink; time
/// comes in through the caller's monotonic millisecond clock, with
/// [`Player::tick`] firing the advancement once its deadline passes.
///
/// Invariants: `position <= word_count`, and `next_word_ms` is `Some`
/// exactly while running. Every transition out of the running state
/// rewrites the deadline field, so at most one advancement is ever pending
/// and a cancelled one can never fire late.
pub struct Player<S: PresentationSink> {
    sink: S,
    sequence: WordSequence,
    position: usize,
    wpm: u16,
    running: bool,
    next_word_ms: Option<u64>,
}

impl<S: PresentationSink> Player<S> {
    pub fn new(sink: S, config: RateConfig) -> Self {
        Self {
            sink,
            sequence: WordSequence::default(),
            position: 0,
            wpm: config.words_per_minute.max(MIN_WPM),
            running: false,
            next_word_ms: None,
        }
    }

    /// Replaces the sequence: idle, position zero, pending advancement
    /// cancelled. Shows the first word, or blanks the display when the new
    /// sequence is empty.
    pub fn load(&mut self, sequence: WordSequence) {
        self.sequence = sequence;
        self.position = 0;
        self.running = false;
        self.next_word_ms = None;

        if self.sequence.is_empty() {
            self.sink.clear();
        } else {
            self.render_current();
        }
        debug!("player: loaded {} words", self.sequence.len());
    }

    /// Tokenizes `text` and loads the result.
    pub fn load_text(&mut self, text: &str) {
        self.load(tokenize(text));
    }

    /// Begins playback from the current position: renders the current word
    /// and schedules the first advancement. No-op while already running or
    /// with nothing left to show.
    pub fn start(&mut self, now_ms: u64) {
        if self.running || self.position >= self.sequence.len() {
            return;
        }
        self.running = true;
        self.render_current();
        self.next_word_ms = Some(now_ms + self.current_gap_ms());
        debug!("player: start position={} wpm={}", self.position, self.wpm);
    }

    /// Halts playback and cancels the pending advancement. The position is
    /// preserved, so a later [`Player::start`] resumes in place.
    pub fn stop(&mut self) {
        if self.running {
            debug!("player: stop position={}", self.position);
        }
        self.running = false;
        self.next_word_ms = None;
    }

    /// Fires the scheduled advancement once its deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let Some(due_ms) = self.next_word_ms else {
            return TickResult::NoChange;
        };
        if now_ms < due_ms {
            return TickResult::NoChange;
        }

        self.position += 1;
        if self.position >= self.sequence.len() {
            // Terminal: go idle and keep the last word on the sink.
            self.running = false;
            self.next_word_ms = None;
            debug!("player: finished after {} words", self.sequence.len());
            return TickResult::Finished;
        }

        self.render_current();
        self.next_word_ms = Some(now_ms + self.current_gap_ms());
        TickResult::Advanced
    }

    /// Moves the cursor, clamped into `[0, word_count]`. Landing on
    /// `word_count` forces idle; any other target is rendered immediately
    /// without altering the running state.
    pub fn set_position(&mut self, index: usize) {
        let index = index.min(self.sequence.len());
        self.position = index;
        if index == self.sequence.len() {
            self.running = false;
            self.next_word_ms = None;
            return;
        }
        self.render_current();
    }

    /// Applies a new rate, clamped to [`MIN_WPM`]. While running, the
    /// pending advancement is rescheduled against the new rate without
    /// re-rendering the current word; while idle the rate only becomes
    /// observable on the next start.
    pub fn change_rate(&mut self, wpm: u16, now_ms: u64) {
        self.wpm = wpm.max(MIN_WPM);
        if self.running {
            self.next_word_ms = Some(now_ms + self.current_gap_ms());
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn word_count(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn words_per_minute(&self) -> u16 {
        self.wpm
    }

    /// Deadline of the pending advancement, while one exists.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_word_ms
    }

    /// Word under the cursor; `None` at the terminal position.
    pub fn current_word(&self) -> Option<&str> {
        self.sequence.get(self.position)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn current_gap_ms(&self) -> u64 {
        let word = self.sequence.get(self.position).unwrap_or("");
        // Deadlines live on a whole-millisecond clock; round to nearest.
        (delay_ms(word, self.wpm) + 0.5) as u64
    }

    fn render_current(&mut self) {
        if let Some(word) = self.sequence.get(self.position) {
            self.sink.render(&WordFrame::new(word));
        }
    }
}

#[cfg(test)]
mod tests;
