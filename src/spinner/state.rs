// src/spinner/state.rs
//! Render state shared between the control surface and the render thread.

use std::sync::Arc;
use std::time::Duration;

use super::mailbox::{Mailbox, Resolution};
use crate::color::Style;
use crate::frames::{self, Frame, FrameSet};

/// Frame, message, and style used for one of the two final lines.
#[derive(Debug, Clone, Default)]
pub struct Ending {
    pub frame: Frame,
    pub message: String,
    pub style: Style,
}

pub struct RenderState {
    pub frequency: Duration,
    frames: FrameSet,
    max_width: usize,
    index: usize,
    pub prefix: String,
    pub suffix: String,
    pub message: String,
    pub style: Style,
    stop: Ending,
    stop_fail: Ending,
    mailbox: Option<Arc<Mailbox>>,
}

/// Consistent copy of everything one painted line needs.
#[derive(Debug, Clone)]
pub struct Line {
    pub prefix: String,
    pub suffix: String,
    pub message: String,
    pub frame: Frame,
    pub max_width: usize,
    pub style: Style,
}

impl RenderState {
    pub fn new(frequency: Duration, frames: FrameSet) -> Self {
        let max_width = frames.widest();
        Self {
            frequency,
            frames,
            max_width,
            index: 0,
            prefix: String::new(),
            suffix: String::new(),
            message: String::new(),
            style: Style::plain(),
            stop: Ending::default(),
            stop_fail: Ending::default(),
            mailbox: None,
        }
    }

    #[cfg(test)]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ending(&self, resolution: Resolution) -> &Ending {
        match resolution {
            Resolution::Success => &self.stop,
            Resolution::Failure => &self.stop_fail,
        }
    }

    pub fn ending_mut(&mut self, resolution: Resolution) -> &mut Ending {
        match resolution {
            Resolution::Success => &mut self.stop,
            Resolution::Failure => &mut self.stop_fail,
        }
    }

    /// Replaces the stop frame for `resolution` and re-derives the pad width.
    pub fn set_ending_frame(&mut self, resolution: Resolution, frame: Frame) {
        self.ending_mut(resolution).frame = frame;
        self.refresh_width();
    }

    pub fn set_frames(&mut self, frames: FrameSet) {
        self.frames = frames;
        self.index = 0;
        self.refresh_width();
    }

    pub fn reverse(&mut self) {
        self.frames.reverse();
        self.index = 0;
    }

    fn refresh_width(&mut self) {
        self.max_width = frames::max_width(&self.frames, &self.stop.frame, &self.stop_fail.frame);
    }

    pub fn attach(&mut self, mailbox: Arc<Mailbox>) {
        self.mailbox = Some(mailbox);
    }

    /// Drops the mailbox and rewinds the animation; the spinner is stopped.
    pub fn detach(&mut self) {
        self.mailbox = None;
        self.index = 0;
    }

    pub fn mailbox(&self) -> Option<&Arc<Mailbox>> {
        self.mailbox.as_ref()
    }

    /// Wakes the render thread for a repaint, if one is running.
    pub fn notify_data(&self) {
        if let Some(m) = &self.mailbox {
            m.notify_data();
        }
    }

    /// Snapshot for an animation line.
    ///
    /// With `advance` the current frame is shown and the cursor moves on;
    /// otherwise the most recently shown frame is repeated.
    pub fn next_line(&mut self, advance: bool) -> Line {
        let len = self.frames.len();
        let shown = if advance {
            let shown = self.index;
            self.index = (self.index + 1) % len;
            shown
        } else {
            (self.index + len - 1) % len
        };

        Line {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            message: self.message.clone(),
            frame: self.frames.get(shown).cloned().unwrap_or_default(),
            max_width: self.max_width,
            style: self.style.clone(),
        }
    }

    /// Snapshot for the final stop or stop-fail line.
    pub fn final_line(&self, resolution: Resolution) -> Line {
        let ending = self.ending(resolution);
        Line {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            message: ending.message.clone(),
            frame: ending.frame.clone(),
            max_width: self.max_width,
            style: ending.style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(chars: &[&str]) -> RenderState {
        RenderState::new(Duration::from_millis(10), FrameSet::new(chars).unwrap())
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut s = state(&["y", "z"]);
        assert_eq!(s.next_line(true).frame.text(), "y");
        assert_eq!(s.index(), 1);
        assert_eq!(s.next_line(true).frame.text(), "z");
        assert_eq!(s.index(), 0);
        assert_eq!(s.next_line(true).frame.text(), "y");
    }

    #[test]
    fn test_data_update_repeats_last_frame() {
        let mut s = state(&["y", "z"]);
        // before any tick the previous frame wraps to the end of the set
        assert_eq!(s.next_line(false).frame.text(), "z");
        s.next_line(true);
        assert_eq!(s.next_line(false).frame.text(), "y");
        assert_eq!(s.next_line(false).frame.text(), "y");
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn test_stop_frames_widen() {
        let mut s = state(&[".", "..", "..."]);
        assert_eq!(s.max_width(), 3);
        s.set_ending_frame(Resolution::Success, Frame::new("xxxx"));
        assert_eq!(s.max_width(), 4);
        s.set_ending_frame(Resolution::Failure, Frame::new("xxxxx"));
        assert_eq!(s.max_width(), 5);
        s.set_ending_frame(Resolution::Failure, Frame::new("x"));
        assert_eq!(s.max_width(), 4);
    }

    #[test]
    fn test_set_frames_resets_index() {
        let mut s = state(&["a", "b", "c"]);
        s.next_line(true);
        s.set_frames(FrameSet::new(&["x"]).unwrap());
        assert_eq!(s.index(), 0);
        assert_eq!(s.max_width(), 1);
    }

    #[test]
    fn test_reverse_resets_index() {
        let mut s = state(&["a", "b", "c"]);
        s.next_line(true);
        s.reverse();
        assert_eq!(s.index(), 0);
        assert_eq!(s.next_line(true).frame.text(), "c");
    }

    #[test]
    fn test_final_line_uses_ending() {
        let mut s = state(&["a"]);
        s.prefix = "p".into();
        s.ending_mut(Resolution::Failure).message = "boom".into();
        s.set_ending_frame(Resolution::Failure, Frame::new("✗"));
        let line = s.final_line(Resolution::Failure);
        assert_eq!(line.message, "boom");
        assert_eq!(line.frame.text(), "✗");
        assert_eq!(line.prefix, "p");
    }
}
