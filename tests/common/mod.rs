// tests/common/mod.rs
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tickline::{Config, Spinner, TerminalMode};

/// In-memory sink the test keeps a handle to after the spinner takes ownership.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Always fails, like a closed pipe.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub const SMART: TerminalMode = TerminalMode::FORCE_TTY.union(TerminalMode::FORCE_SMART);
pub const DUMB: TerminalMode = TerminalMode::FORCE_TTY.union(TerminalMode::FORCE_DUMB);
pub const NO_TTY: TerminalMode = TerminalMode::FORCE_NO_TTY;

/// Long enough that only the immediate first tick happens during a test.
pub const SLOW: Duration = Duration::from_secs(30);

pub fn base(mode: TerminalMode) -> Config {
    Config {
        frequency: SLOW,
        char_set: vec!["y".into(), "z".into()],
        prefix: "a".into(),
        suffix: " ".into(),
        message: "msg".into(),
        show_cursor: true,
        terminal_mode: mode,
        ..Config::default()
    }
}

pub fn build(config: Config) -> (Spinner, SharedBuf) {
    let buf = SharedBuf::default();
    let spinner = Spinner::new(config.with_writer(buf.clone())).unwrap();
    (spinner, buf)
}

pub fn settle() {
    thread::sleep(Duration::from_millis(80));
}
