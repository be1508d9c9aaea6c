// src/color.rs
//! Named color styles and the opaque paint capability used by the line painter.

use std::fmt;
use std::sync::Arc;

use colored::{Color, ColoredString, Colorize};

use crate::error::{Result, SpinnerError};

/// Something that can wrap a rendered string in terminal styling.
pub trait Paint: Send + Sync {
    fn paint(&self, text: &str) -> String;
}

impl<F> Paint for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn paint(&self, text: &str) -> String {
        self(text)
    }
}

/// Cheaply clonable handle to a paint function. The default style is plain.
#[derive(Clone, Default)]
pub struct Style {
    inner: Option<Arc<dyn Paint>>,
}

impl Style {
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Wraps a caller-supplied paint function.
    #[must_use]
    pub fn custom(paint: impl Paint + 'static) -> Self {
        Self {
            inner: Some(Arc::new(paint)),
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.inner.is_none()
    }

    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match &self.inner {
            Some(p) => p.paint(text),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain() {
            f.write_str("Style(plain)")
        } else {
            f.write_str("Style(..)")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attribute {
    Fg(Color),
    Bg(Color),
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Conceal,
    CrossedOut,
}

impl Attribute {
    fn apply(self, s: ColoredString) -> ColoredString {
        match self {
            Self::Fg(c) => s.color(c),
            Self::Bg(c) => s.on_color(c),
            Self::Reset => s.clear(),
            Self::Bold => s.bold(),
            Self::Faint => s.dimmed(),
            Self::Italic => s.italic(),
            Self::Underline => s.underline(),
            Self::Blink => s.blink(),
            Self::Reverse => s.reversed(),
            Self::Conceal => s.hidden(),
            Self::CrossedOut => s.strikethrough(),
        }
    }
}

static NAMED: &[(&str, Attribute)] = &[
    // bare names are foreground colors
    ("black", Attribute::Fg(Color::Black)),
    ("red", Attribute::Fg(Color::Red)),
    ("green", Attribute::Fg(Color::Green)),
    ("yellow", Attribute::Fg(Color::Yellow)),
    ("blue", Attribute::Fg(Color::Blue)),
    ("magenta", Attribute::Fg(Color::Magenta)),
    ("cyan", Attribute::Fg(Color::Cyan)),
    ("white", Attribute::Fg(Color::White)),
    ("reset", Attribute::Reset),
    ("bold", Attribute::Bold),
    ("faint", Attribute::Faint),
    ("italic", Attribute::Italic),
    ("underline", Attribute::Underline),
    ("blinkslow", Attribute::Blink),
    // colored has a single blink style
    ("blinkrapid", Attribute::Blink),
    ("reversevideo", Attribute::Reverse),
    ("concealed", Attribute::Conceal),
    ("crossedout", Attribute::CrossedOut),
    ("fgBlack", Attribute::Fg(Color::Black)),
    ("fgRed", Attribute::Fg(Color::Red)),
    ("fgGreen", Attribute::Fg(Color::Green)),
    ("fgYellow", Attribute::Fg(Color::Yellow)),
    ("fgBlue", Attribute::Fg(Color::Blue)),
    ("fgMagenta", Attribute::Fg(Color::Magenta)),
    ("fgCyan", Attribute::Fg(Color::Cyan)),
    ("fgWhite", Attribute::Fg(Color::White)),
    ("fgHiBlack", Attribute::Fg(Color::BrightBlack)),
    ("fgHiRed", Attribute::Fg(Color::BrightRed)),
    ("fgHiGreen", Attribute::Fg(Color::BrightGreen)),
    ("fgHiYellow", Attribute::Fg(Color::BrightYellow)),
    ("fgHiBlue", Attribute::Fg(Color::BrightBlue)),
    ("fgHiMagenta", Attribute::Fg(Color::BrightMagenta)),
    ("fgHiCyan", Attribute::Fg(Color::BrightCyan)),
    ("fgHiWhite", Attribute::Fg(Color::BrightWhite)),
    ("bgBlack", Attribute::Bg(Color::Black)),
    ("bgRed", Attribute::Bg(Color::Red)),
    ("bgGreen", Attribute::Bg(Color::Green)),
    ("bgYellow", Attribute::Bg(Color::Yellow)),
    ("bgBlue", Attribute::Bg(Color::Blue)),
    ("bgMagenta", Attribute::Bg(Color::Magenta)),
    ("bgCyan", Attribute::Bg(Color::Cyan)),
    ("bgWhite", Attribute::Bg(Color::White)),
    ("bgHiBlack", Attribute::Bg(Color::BrightBlack)),
    ("bgHiRed", Attribute::Bg(Color::BrightRed)),
    ("bgHiGreen", Attribute::Bg(Color::BrightGreen)),
    ("bgHiYellow", Attribute::Bg(Color::BrightYellow)),
    ("bgHiBlue", Attribute::Bg(Color::BrightBlue)),
    ("bgHiMagenta", Attribute::Bg(Color::BrightMagenta)),
    ("bgHiCyan", Attribute::Bg(Color::BrightCyan)),
    ("bgHiWhite", Attribute::Bg(Color::BrightWhite)),
];

fn lookup(name: &str) -> Option<Attribute> {
    NAMED.iter().find(|(n, _)| *n == name).map(|(_, a)| *a)
}

/// Every color or attribute name accepted by [`build_style`].
pub fn valid_colors() -> impl Iterator<Item = &'static str> {
    NAMED.iter().map(|(n, _)| *n)
}

#[must_use]
pub fn is_valid_color(name: &str) -> bool {
    lookup(name).is_some()
}

struct Palette {
    attrs: Vec<Attribute>,
}

impl Paint for Palette {
    fn paint(&self, text: &str) -> String {
        self.attrs
            .iter()
            .fold(text.normal(), |s, a| a.apply(s))
            .to_string()
    }
}

/// Builds a style from color names. An empty list yields the plain style.
///
/// `role` names the style in the error (`"color"`, `"stop color"`, ...).
///
/// # Errors
/// Returns `InvalidColor` carrying the first unrecognized name verbatim.
pub fn build_style<S: AsRef<str>>(role: &'static str, names: &[S]) -> Result<Style> {
    if names.is_empty() {
        return Ok(Style::plain());
    }

    let attrs = names
        .iter()
        .map(|n| {
            let name = n.as_ref();
            lookup(name).ok_or_else(|| SpinnerError::InvalidColor {
                role,
                name: name.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Style::custom(Palette { attrs }))
}
