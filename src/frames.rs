// src/frames.rs
//! Character frame table: animation frames paired with their column width.

use unicode_width::UnicodeWidthStr;

use crate::error::{Result, SpinnerError};

/// One still image of the animation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    text: String,
    width: usize,
}

impl Frame {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = UnicodeWidthStr::width(text.as_str());
        Self { text, width }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rendered column width, not byte or char count.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Text right-padded with spaces to `width` columns.
    #[must_use]
    pub fn padded(&self, width: usize) -> String {
        let pad = width.saturating_sub(self.width);
        let mut out = String::with_capacity(self.text.len() + pad);
        out.push_str(&self.text);
        out.extend(std::iter::repeat(' ').take(pad));
        out
    }
}

/// Ordered, non-empty, cyclic sequence of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    frames: Vec<Frame>,
    widest: usize,
}

impl FrameSet {
    /// Builds the table from raw strings.
    ///
    /// # Errors
    /// Returns `EmptyCharSet` when `chars` is empty.
    pub fn new<S: AsRef<str>>(chars: &[S]) -> Result<Self> {
        if chars.is_empty() {
            return Err(SpinnerError::EmptyCharSet);
        }

        let frames: Vec<Frame> = chars.iter().map(|c| Frame::new(c.as_ref())).collect();
        let widest = frames.iter().map(Frame::width).max().unwrap_or(0);

        Ok(Self { frames, widest })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false for a constructed set; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Widest animation frame, ignoring the stop frames.
    #[must_use]
    pub fn widest(&self) -> usize {
        self.widest
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Flips the animation order in place.
    pub fn reverse(&mut self) {
        self.frames.reverse();
    }
}

/// Width the spinner field is padded to: the widest of the animation and both stop frames.
#[must_use]
pub fn max_width(set: &FrameSet, stop: &Frame, stop_fail: &Frame) -> usize {
    set.widest().max(stop.width()).max(stop_fail.width())
}
