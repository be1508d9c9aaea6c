// src/spinner/paint.rs
//! Line painting: turns a state snapshot into the exact bytes for one terminal line.

use unicode_width::UnicodeWidthStr;

use super::state::Line;
use crate::terminal::{self, RenderMode};

/// Layout switches fixed at construction.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormat {
    pub color_all: bool,
    pub suffix_auto_colon: bool,
    pub spinner_at_end: bool,
    pub hide_cursor: bool,
}

/// Formats lines for one render mode. Tracks the previous line's width so
/// dumb terminals can blank it out.
#[derive(Debug)]
pub struct Painter {
    mode: RenderMode,
    format: LineFormat,
    last_width: usize,
}

impl Painter {
    pub fn new(mode: RenderMode, format: LineFormat) -> Self {
        Self {
            mode,
            format,
            last_width: 0,
        }
    }

    /// Bytes for an animation or data-change repaint.
    pub fn update(&mut self, line: &Line) -> String {
        let mut out = String::new();
        match self.mode {
            RenderMode::Smart => {
                terminal::erase_line(&mut out);
                if self.format.hide_cursor {
                    terminal::hide_cursor(&mut out);
                }
                out.push_str(&compose(line, self.format, true, false));
            }
            RenderMode::Dumb => {
                terminal::blank_line(&mut out, self.last_width);
                let text = compose(line, self.format, false, false);
                // columns on screen, not bytes, so wide glyphs are fully blanked
                self.last_width = text.width();
                out.push_str(&text);
            }
            RenderMode::NotTty => out.push_str(&compose(line, self.format, false, true)),
        }
        out
    }

    /// Bytes for the final, newline-terminated stop line.
    pub fn finish(&mut self, line: &Line) -> String {
        let mut out = String::new();
        match self.mode {
            RenderMode::Smart => {
                terminal::erase_line(&mut out);
                if self.format.hide_cursor {
                    terminal::show_cursor(&mut out);
                }
                out.push_str(&compose(line, self.format, true, true));
            }
            RenderMode::Dumb => {
                terminal::blank_line(&mut out, self.last_width);
                self.last_width = 0;
                out.push_str(&compose(line, self.format, false, true));
            }
            RenderMode::NotTty => out.push_str(&compose(line, self.format, false, true)),
        }
        out
    }
}

/// True when `suffix: message` should get an automatic colon.
#[must_use]
pub fn wants_colon(suffix: &str, message: &str) -> bool {
    !suffix.trim().is_empty() && !message.is_empty() && message != "\n"
}

fn arrange(prefix: &str, glyph: &str, suffix: &str, message: &str, at_end: bool) -> String {
    if at_end {
        format!("{message}{prefix}{glyph}{suffix}")
    } else {
        format!("{prefix}{glyph}{suffix}{message}")
    }
}

/// Composes the visible text of a line, without any erase sequences.
///
/// A zero-width frame drops prefix and suffix and shows only the message;
/// with no message either, the line is empty and gets no newline.
#[must_use]
pub fn compose(line: &Line, format: LineFormat, styled: bool, newline: bool) -> String {
    let paint = |s: &str| {
        if styled {
            line.style.apply(s)
        } else {
            s.to_string()
        }
    };

    let mut out = if line.frame.width() == 0 {
        if line.message.is_empty() {
            return String::new();
        }
        if format.color_all {
            paint(&line.message)
        } else {
            line.message.clone()
        }
    } else {
        let glyph = line.frame.padded(line.max_width);
        let suffix = if format.suffix_auto_colon
            && !format.spinner_at_end
            && wants_colon(&line.suffix, &line.message)
        {
            format!("{}: ", line.suffix)
        } else {
            line.suffix.clone()
        };

        if format.color_all {
            paint(&arrange(
                &line.prefix,
                &glyph,
                &suffix,
                &line.message,
                format.spinner_at_end,
            ))
        } else {
            arrange(
                &line.prefix,
                &paint(&glyph),
                &suffix,
                &line.message,
                format.spinner_at_end,
            )
        }
    };

    if newline {
        out.push('\n');
    }
    out
}
