// src/terminal.rs
//! Terminal mode overrides, detection, and the raw control sequences the painter emits.

use std::fmt::Write as _;

use bitflags::bitflags;
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::{cursor, Command};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpinnerError};

bitflags! {
    /// Caller overrides for terminal detection. Empty means [`TerminalMode::AUTOMATIC`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TerminalMode: u8 {
        /// Detect everything from the environment. Cannot be combined.
        const AUTOMATIC = 1;
        /// Treat the output as an interactive terminal.
        const FORCE_TTY = 1 << 1;
        /// Treat the output as a log: one line per update, no escapes.
        const FORCE_NO_TTY = 1 << 2;
        /// Erase with spaces instead of escape sequences.
        const FORCE_DUMB = 1 << 3;
        /// Use ANSI escape sequences for erasure and cursor control.
        const FORCE_SMART = 1 << 4;
    }
}

impl Default for TerminalMode {
    fn default() -> Self {
        Self::AUTOMATIC
    }
}

impl TerminalMode {
    /// Rejects mutually exclusive flag combinations.
    ///
    /// # Errors
    /// Returns `TerminalMode` naming the conflict.
    pub fn validate(self) -> Result<()> {
        if self.contains(Self::AUTOMATIC) && self != Self::AUTOMATIC {
            return Err(SpinnerError::TerminalMode(
                "AUTOMATIC cannot be combined with other flags",
            ));
        }
        if self.contains(Self::FORCE_TTY | Self::FORCE_NO_TTY) {
            return Err(SpinnerError::TerminalMode(
                "cannot have both FORCE_TTY and FORCE_NO_TTY set",
            ));
        }
        if self.contains(Self::FORCE_DUMB | Self::FORCE_SMART) {
            return Err(SpinnerError::TerminalMode(
                "cannot have both FORCE_DUMB and FORCE_SMART set",
            ));
        }
        if self.contains(Self::FORCE_NO_TTY | Self::FORCE_SMART) {
            return Err(SpinnerError::TerminalMode(
                "FORCE_NO_TTY output never uses escape sequences, FORCE_SMART cannot apply",
            ));
        }
        Ok(())
    }

    /// Validates the flags and resolves them against the detected environment.
    ///
    /// # Errors
    /// Returns `TerminalMode` for conflicting flags.
    pub fn resolve(self, env: &DetectInputs) -> Result<RenderMode> {
        let mode = if self.is_empty() { Self::AUTOMATIC } else { self };
        mode.validate()?;

        let interactive = if mode.contains(Self::FORCE_TTY) {
            true
        } else if mode.contains(Self::FORCE_NO_TTY) {
            false
        } else {
            env.is_tty
        };

        if !interactive {
            return Ok(RenderMode::NotTty);
        }

        let smart = if mode.contains(Self::FORCE_SMART) {
            true
        } else if mode.contains(Self::FORCE_DUMB) {
            false
        } else {
            !env.dumb_term()
        };

        Ok(if smart {
            RenderMode::Smart
        } else {
            RenderMode::Dumb
        })
    }
}

/// How lines are written, fixed for the spinner's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Interactive terminal with ANSI escape support.
    Smart,
    /// Interactive terminal without escape support; erase by overwriting with spaces.
    Dumb,
    /// Not a terminal; every update is its own newline-terminated line.
    NotTty,
}

impl RenderMode {
    #[must_use]
    pub fn is_tty(self) -> bool {
        self != Self::NotTty
    }
}

/// Which standard stream a sink is, for detection purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
    /// A caller-supplied writer; never treated as interactive.
    Other,
}

/// Environment facts terminal detection depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectInputs {
    pub is_tty: bool,
    pub term: Option<String>,
}

impl DetectInputs {
    #[must_use]
    pub fn from_env(stream: StreamKind) -> Self {
        let is_tty = match stream {
            StreamKind::Stdout => std::io::stdout().is_tty(),
            StreamKind::Stderr => std::io::stderr().is_tty(),
            StreamKind::Other => false,
        };
        Self {
            is_tty,
            term: std::env::var("TERM").ok(),
        }
    }

    #[must_use]
    pub fn dumb_term(&self) -> bool {
        self.term.as_deref() == Some("dumb")
    }
}

fn framed(buf: &mut String, command: impl Command) {
    buf.push('\r');
    // writing into a String cannot fail
    let _ = command.write_ansi(buf);
    buf.push('\r');
}

/// Carriage return, clear to end of line, carriage return.
pub fn erase_line(buf: &mut String) {
    framed(buf, Clear(ClearType::UntilNewLine));
}

pub fn hide_cursor(buf: &mut String) {
    framed(buf, cursor::Hide);
}

pub fn show_cursor(buf: &mut String) {
    framed(buf, cursor::Show);
}

/// Overwrites `width` columns with spaces, for terminals without escape support.
pub fn blank_line(buf: &mut String, width: usize) {
    let _ = write!(buf, "\r{:width$}\r", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(is_tty: bool, term: Option<&str>) -> DetectInputs {
        DetectInputs {
            is_tty,
            term: term.map(String::from),
        }
    }

    #[test]
    fn test_escape_bytes() {
        let mut buf = String::new();
        erase_line(&mut buf);
        assert_eq!(buf, "\r\x1b[K\r");

        buf.clear();
        hide_cursor(&mut buf);
        assert_eq!(buf, "\r\x1b[?25l\r");

        buf.clear();
        show_cursor(&mut buf);
        assert_eq!(buf, "\r\x1b[?25h\r");

        buf.clear();
        blank_line(&mut buf, 3);
        assert_eq!(buf, "\r   \r");

        buf.clear();
        blank_line(&mut buf, 0);
        assert_eq!(buf, "\r\r");
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let bad = [
            TerminalMode::AUTOMATIC | TerminalMode::FORCE_TTY,
            TerminalMode::AUTOMATIC | TerminalMode::FORCE_DUMB,
            TerminalMode::FORCE_TTY | TerminalMode::FORCE_NO_TTY,
            TerminalMode::FORCE_DUMB | TerminalMode::FORCE_SMART,
            TerminalMode::FORCE_NO_TTY | TerminalMode::FORCE_SMART,
            TerminalMode::FORCE_TTY | TerminalMode::FORCE_NO_TTY | TerminalMode::FORCE_SMART,
        ];
        for mode in bad {
            let err = mode.resolve(&inputs(true, None)).unwrap_err();
            assert!(matches!(err, SpinnerError::TerminalMode(_)), "{mode:?}");
        }
    }

    #[test]
    fn test_every_combination_is_decided() {
        // exhaustively walk all 32 flag sets; each either resolves or names a conflict
        for bits in 0u8..32 {
            let mode = TerminalMode::from_bits_truncate(bits);
            let res = mode.resolve(&inputs(true, Some("xterm")));
            let conflicting = (mode.contains(TerminalMode::AUTOMATIC)
                && mode != TerminalMode::AUTOMATIC)
                || mode.contains(TerminalMode::FORCE_TTY | TerminalMode::FORCE_NO_TTY)
                || mode.contains(TerminalMode::FORCE_DUMB | TerminalMode::FORCE_SMART)
                || mode.contains(TerminalMode::FORCE_NO_TTY | TerminalMode::FORCE_SMART);
            assert_eq!(res.is_err(), conflicting, "{mode:?}");
        }
    }

    #[test]
    fn test_automatic_detection() {
        let auto = TerminalMode::AUTOMATIC;
        assert_eq!(auto.resolve(&inputs(true, Some("xterm"))).unwrap(), RenderMode::Smart);
        assert_eq!(auto.resolve(&inputs(true, Some("dumb"))).unwrap(), RenderMode::Dumb);
        assert_eq!(auto.resolve(&inputs(false, Some("xterm"))).unwrap(), RenderMode::NotTty);
        assert_eq!(TerminalMode::empty().resolve(&inputs(false, None)).unwrap(), RenderMode::NotTty);
    }

    #[test]
    fn test_forced_axes() {
        let not_tty = inputs(false, Some("dumb"));
        assert_eq!(
            (TerminalMode::FORCE_TTY | TerminalMode::FORCE_SMART).resolve(&not_tty).unwrap(),
            RenderMode::Smart
        );
        assert_eq!(TerminalMode::FORCE_TTY.resolve(&not_tty).unwrap(), RenderMode::Dumb);
        assert_eq!(
            TerminalMode::FORCE_DUMB.resolve(&inputs(true, None)).unwrap(),
            RenderMode::Dumb
        );
        assert_eq!(
            (TerminalMode::FORCE_NO_TTY | TerminalMode::FORCE_DUMB)
                .resolve(&inputs(true, None))
                .unwrap(),
            RenderMode::NotTty
        );
        assert_eq!(
            TerminalMode::FORCE_SMART.resolve(&inputs(false, Some("dumb"))).unwrap(),
            RenderMode::NotTty
        );
    }
}
