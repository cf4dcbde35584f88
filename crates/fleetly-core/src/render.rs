//! Presentation seam between the engine and a concrete display.

use crate::orp::orp_offset;

/// One displayable word together with its optical recognition point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordFrame<'a> {
    word: &'a str,
    orp: usize,
}

impl<'a> WordFrame<'a> {
    pub fn new(word: &'a str) -> Self {
        Self {
            word,
            orp: orp_offset(word),
        }
    }

    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Char index the display should hold fixed on screen.
    pub fn orp_offset(&self) -> usize {
        self.orp
    }

    /// Splits the word into the text before the recognition point, the
    /// recognition char itself, and the text after it. Splits on char
    /// boundaries, so multibyte words stay valid UTF-8.
    pub fn split(&self) -> (&'a str, &'a str, &'a str) {
        let Some((start, c)) = self.word.char_indices().nth(self.orp) else {
            return (self.word, "", "");
        };
        let end = start + c.len_utf8();
        (
            &self.word[..start],
            &self.word[start..end],
            &self.word[end..],
        )
    }
}

/// Abstract display target driven by the playback controller.
pub trait PresentationSink {
    /// Show one word anchored at its recognition point.
    fn render(&mut self, frame: &WordFrame<'_>);

    /// Blank the display.
    fn clear(&mut self);
}
