// src/config.rs
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::{Result, SpinnerError};
use crate::terminal::{StreamKind, TerminalMode};

/// Where rendered lines go. Only the spinner's render thread ever writes to it.
#[derive(Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
    /// Arbitrary sink; never detected as interactive.
    #[serde(skip)]
    Writer(Box<dyn Write + Send>),
}

impl Output {
    #[must_use]
    pub fn kind(&self) -> StreamKind {
        match self {
            Self::Stdout => StreamKind::Stdout,
            Self::Stderr => StreamKind::Stderr,
            Self::Writer(_) => StreamKind::Other,
        }
    }

    pub(crate) fn into_sink(self) -> Box<dyn Write + Send> {
        match self {
            Self::Stdout => Box::new(io::stdout()),
            Self::Stderr => Box::new(io::stderr()),
            Self::Writer(w) => w,
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Construction-time settings for a [`crate::Spinner`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How often the animation advances. Required (non-zero) when animating in a terminal.
    #[serde(deserialize_with = "millis", alias = "delay")]
    pub frequency: Duration,
    pub output: Output,
    /// Leave the cursor visible while animating.
    pub show_cursor: bool,
    /// Style the whole line instead of just the spinner glyph.
    pub color_all: bool,
    pub colors: Vec<String>,
    /// Animation frames; empty selects the default built-in set.
    pub char_set: Vec<String>,
    pub prefix: String,
    /// Printed right after the spinner; usually starts with a space.
    pub suffix: String,
    /// Append `": "` to a non-blank suffix whenever a message is shown.
    pub suffix_auto_colon: bool,
    pub message: String,
    pub stop_message: String,
    pub stop_character: String,
    pub stop_colors: Vec<String>,
    pub stop_fail_message: String,
    pub stop_fail_character: String,
    pub stop_fail_colors: Vec<String>,
    /// Render `<message><prefix><spinner><suffix>` instead of leading with the spinner.
    pub spinner_at_end: bool,
    pub terminal_mode: TerminalMode,
}

fn millis<'de, D>(de: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(de).map(Duration::from_millis)
}

impl Config {
    #[must_use]
    pub fn new(frequency: Duration) -> Self {
        Self {
            frequency,
            ..Self::default()
        }
    }

    /// Parses a TOML document. `frequency` is given in milliseconds.
    ///
    /// # Errors
    /// Returns `Toml` on malformed input or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Toml` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SpinnerError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.output = Output::Writer(Box::new(writer));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.frequency, Duration::ZERO);
        assert!(matches!(c.output, Output::Stdout));
        assert!(!c.show_cursor);
        assert_eq!(c.terminal_mode, TerminalMode::AUTOMATIC);
        assert!(c.char_set.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let c = Config::from_toml_str(
            r#"
frequency = 120
output = "stderr"
suffix = " uploading"
suffix_auto_colon = true
char_set = ["a", "b"]
stop_colors = ["fgGreen"]
terminal_mode = "FORCE_TTY | FORCE_DUMB"
"#,
        )
        .unwrap();
        assert_eq!(c.frequency, Duration::from_millis(120));
        assert!(matches!(c.output, Output::Stderr));
        assert_eq!(c.suffix, " uploading");
        assert!(c.suffix_auto_colon);
        assert_eq!(c.char_set, vec!["a", "b"]);
        assert_eq!(c.stop_colors, vec!["fgGreen"]);
        assert_eq!(
            c.terminal_mode,
            TerminalMode::FORCE_TTY | TerminalMode::FORCE_DUMB
        );
    }

    #[test]
    fn test_delay_alias() {
        let c = Config::from_toml_str("delay = 50").unwrap();
        assert_eq!(c.frequency, Duration::from_millis(50));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Config::from_toml_str("frequncy = 50"),
            Err(SpinnerError::Toml(_))
        ));
    }
}
