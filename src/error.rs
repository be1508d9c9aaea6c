// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpinnerError {
    #[error("failed to build {role} function: {name} is not a valid color")]
    InvalidColor { role: &'static str, name: String },

    #[error("failed to set character set: must provide at least one string")]
    EmptyCharSet,

    #[error("duration must be greater than 0")]
    InvalidFrequency,

    #[error("spinner Frequency duration must be greater than 0 when used within a TTY")]
    ZeroFrequency,

    #[error("spinner already running or shutting down")]
    AlreadyActive,

    #[error("spinner not running")]
    NotRunning,

    #[error("spinner not paused")]
    NotPaused,

    #[error("spinner not running or paused")]
    NotActive,

    #[error("invalid terminal mode: {0}")]
    TerminalMode(&'static str),

    #[error("failed to paint line: {0}")]
    Paint(#[source] std::io::Error),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SpinnerError>;

impl SpinnerError {
    /// True for errors caused by calling a lifecycle operation in the wrong state.
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Self::AlreadyActive | Self::NotRunning | Self::NotPaused | Self::NotActive
        )
    }
}
