// src/spinner/render.rs
//! The render loop: one thread per running spinner, owning the output sink.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{trace, warn};

use super::handle::Outcome;
use super::mailbox::{Event, Mailbox};
use super::paint::Painter;
use super::safe_state::SharedState;
use crate::terminal::RenderMode;

pub struct RenderLoop {
    state: SharedState,
    mailbox: Arc<Mailbox>,
    painter: Painter,
    mode: RenderMode,
    sink: Box<dyn Write + Send>,
}

impl RenderLoop {
    pub fn new(
        state: SharedState,
        mailbox: Arc<Mailbox>,
        painter: Painter,
        mode: RenderMode,
        sink: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            state,
            mailbox,
            painter,
            mode,
            sink,
        }
    }

    /// Runs until cancelled or a write fails, then gives the sink back.
    pub fn run(mut self) -> Outcome {
        let error = self.drive().err();
        if let Some(e) = &error {
            warn!(error = %e, "spinner output failed; render loop exiting");
        }
        self.mailbox.mark_exited();
        Outcome {
            sink: self.sink,
            error,
        }
    }

    fn drive(&mut self) -> io::Result<()> {
        // without a terminal nothing animates; only data changes repaint
        let mut deadline = self.mode.is_tty().then(Instant::now);
        let mut last_tick: Option<Instant> = None;

        loop {
            match self.mailbox.next_event(deadline) {
                Event::Tick => {
                    let now = Instant::now();
                    last_tick = Some(now);
                    let (line, frequency) = self.state.modify(|s| (s.next_line(true), s.frequency));
                    let bytes = self.painter.update(&line);
                    self.write(&bytes)?;
                    deadline = schedule(now, frequency);
                }
                Event::Data => {
                    let advance = self.mode == RenderMode::NotTty;
                    let line = self.state.modify(|s| s.next_line(advance));
                    let bytes = self.painter.update(&line);
                    self.write(&bytes)?;
                }
                Event::Frequency(frequency) => {
                    let now = Instant::now();
                    deadline = match last_tick {
                        Some(at) if now.duration_since(at) < frequency => schedule(at, frequency),
                        _ => Some(now),
                    };
                    trace!(?frequency, "spinner frequency changed");
                }
                Event::Pause => {
                    self.mailbox.park();
                    let frequency = self.state.read(|s| s.frequency);
                    deadline = deadline.and_then(|_| schedule(Instant::now(), frequency));
                }
                Event::Cancel(resolution) => {
                    let line = self.state.read(|s| s.final_line(resolution));
                    let bytes = self.painter.finish(&line);
                    return self.write(&bytes);
                }
            }
        }
    }

    fn write(&mut self, bytes: &str) -> io::Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.sink.write_all(bytes.as_bytes())?;
        self.sink.flush()
    }
}

/// Next tick after `from`; a frequency too long to represent never fires.
fn schedule(from: Instant, frequency: Duration) -> Option<Instant> {
    from.checked_add(frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::FrameSet;
    use crate::spinner::mailbox::Resolution;
    use crate::spinner::paint::LineFormat;
    use crate::spinner::state::RenderState;
    use std::sync::Mutex;
    use std::thread;

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Write for Buf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn setup(frequency: Duration) -> (SharedState, Arc<Mailbox>) {
        let mut state = RenderState::new(frequency, FrameSet::new(&["y", "z"]).unwrap());
        state.message = "msg".into();
        (SharedState::new(state), Arc::new(Mailbox::default()))
    }

    #[test]
    fn test_smart_first_tick_is_immediate() {
        let (state, mailbox) = setup(Duration::from_secs(60));
        let buf = Buf::default();
        let render = RenderLoop::new(
            state,
            Arc::clone(&mailbox),
            Painter::new(RenderMode::Smart, LineFormat::default()),
            RenderMode::Smart,
            Box::new(buf.clone()),
        );
        let worker = thread::spawn(move || render.run());
        thread::sleep(Duration::from_millis(50));
        mailbox.cancel(Resolution::Success);
        let outcome = worker.join().unwrap();

        assert!(outcome.error.is_none());
        // the default stop line has no frame and no message, so only the erase is written
        assert_eq!(buf.contents(), "\r\x1b[K\rymsg\r\x1b[K\r");
    }

    #[test]
    fn test_not_tty_paints_only_on_data() {
        let (state, mailbox) = setup(Duration::MAX);
        let buf = Buf::default();
        let render = RenderLoop::new(
            state.clone(),
            Arc::clone(&mailbox),
            Painter::new(RenderMode::NotTty, LineFormat::default()),
            RenderMode::NotTty,
            Box::new(buf.clone()),
        );
        let worker = thread::spawn(move || render.run());
        thread::sleep(Duration::from_millis(30));
        assert_eq!(buf.contents(), "");

        mailbox.notify_data();
        thread::sleep(Duration::from_millis(30));
        mailbox.cancel(Resolution::Success);
        worker.join().unwrap();

        assert_eq!(buf.contents(), "ymsg\n");
        assert_eq!(state.read(|s| s.index()), 1);
    }

    #[test]
    fn test_frequency_change_keeps_last_tick() {
        let (state, mailbox) = setup(Duration::from_millis(400));
        let buf = Buf::default();
        let render = RenderLoop::new(
            state.clone(),
            Arc::clone(&mailbox),
            Painter::new(RenderMode::Smart, LineFormat::default()),
            RenderMode::Smart,
            Box::new(buf.clone()),
        );
        let start = Instant::now();
        let worker = thread::spawn(move || render.run());

        thread::sleep(Duration::from_millis(100));
        let shorter = Duration::from_millis(300);
        state.modify(|s| s.frequency = shorter);
        mailbox.notify_frequency(shorter);

        // not yet due: the next frame lands at first tick + 300ms
        thread::sleep(Duration::from_millis(160).saturating_sub(start.elapsed()));
        assert_eq!(buf.contents(), "\r\x1b[K\rymsg");

        thread::sleep(Duration::from_millis(350).saturating_sub(start.elapsed()));
        assert_eq!(buf.contents(), "\r\x1b[K\rymsg\r\x1b[K\rzmsg");

        mailbox.cancel(Resolution::Success);
        worker.join().unwrap();
    }

    #[test]
    fn test_write_failure_ends_loop() {
        let (state, mailbox) = setup(Duration::from_millis(5));
        let render = RenderLoop::new(
            state,
            Arc::clone(&mailbox),
            Painter::new(RenderMode::Smart, LineFormat::default()),
            RenderMode::Smart,
            Box::new(Broken),
        );
        let outcome = thread::spawn(move || render.run()).join().unwrap();

        assert_eq!(
            outcome.error.map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
        // handshakes no longer block once the loop is gone
        mailbox.request_pause();
    }

    #[test]
    fn test_schedule_saturates() {
        let now = Instant::now();
        assert_eq!(schedule(now, Duration::MAX), None);
        assert!(schedule(now, Duration::from_millis(1)).is_some());
    }
}
