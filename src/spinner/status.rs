// src/spinner/status.rs
//! Lifecycle status and its atomic cell.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Where a spinner is in its lifecycle. Decides which operations are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Stopped = 0,
    Starting = 1,
    Running = 2,
    Stopping = 3,
    Pausing = 4,
    Paused = 5,
    Unpausing = 6,
}

impl Status {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Stopped,
            1 => Self::Starting,
            2 => Self::Running,
            3 => Self::Stopping,
            4 => Self::Pausing,
            5 => Self::Paused,
            6 => Self::Unpausing,
            other => panic!("atomic invariant encountered: unknown status {other}"),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Pausing => "pausing",
            Self::Paused => "paused",
            Self::Unpausing => "unpausing",
        }
    }

    /// Running or paused: the render thread exists and can be stopped.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single writer at a time via compare-and-swap.
#[derive(Debug)]
pub(crate) struct AtomicStatus(AtomicU8);

impl AtomicStatus {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(Status::Stopped as u8))
    }

    pub(crate) fn load(&self) -> Status {
        Status::from_u8(self.0.load(Ordering::Acquire))
    }

    /// Attempts `from -> to`. False means another caller owns the state.
    pub(crate) fn transition(&self, from: Status, to: Status) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Completes a transition the caller already owns exclusively.
    ///
    /// # Panics
    /// If the status moved underneath the owner, the state machine is corrupt.
    pub(crate) fn finish(&self, from: Status, to: Status) {
        if !self.transition(from, to) {
            panic!(
                "atomic invariant encountered: expected {from} -> {to}, found {}",
                self.load()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_display() {
        let cases = [
            (Status::Stopped, "stopped"),
            (Status::Starting, "starting"),
            (Status::Running, "running"),
            (Status::Stopping, "stopping"),
            (Status::Pausing, "pausing"),
            (Status::Paused, "paused"),
            (Status::Unpausing, "unpausing"),
        ];
        for (status, want) in cases {
            assert_eq!(status.to_string(), want);
            assert_eq!(Status::from_u8(status as u8), status);
        }
    }

    #[test]
    fn test_transition_requires_exact_state() {
        let s = AtomicStatus::new();
        assert!(!s.transition(Status::Running, Status::Pausing));
        assert!(s.transition(Status::Stopped, Status::Starting));
        assert_eq!(s.load(), Status::Starting);
        s.finish(Status::Starting, Status::Running);
        assert_eq!(s.load(), Status::Running);
    }

    #[test]
    #[should_panic(expected = "atomic invariant encountered")]
    fn test_finish_panics_on_lost_ownership() {
        let s = AtomicStatus::new();
        s.finish(Status::Starting, Status::Running);
    }

    #[test]
    fn test_concurrent_transition_has_one_winner() {
        let s = Arc::new(AtomicStatus::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let s = Arc::clone(&s);
                thread::spawn(move || s.transition(Status::Stopped, Status::Starting))
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|w| *w)
            .count();
        assert_eq!(wins, 1);
    }
}
