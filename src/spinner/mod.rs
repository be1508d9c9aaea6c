// src/spinner/mod.rs
//! Single-line terminal spinner: lifecycle control surface.
//!
//! A [`Spinner`] is shared by reference between the threads that drive it.
//! Setters take `&self` and never block on rendering; `start`, `pause`,
//! `unpause` and the two stop variants are serialized by an atomic status
//! so that racing calls are rejected rather than interleaved.

mod handle;
mod mailbox;
mod paint;
mod render;
mod safe_state;
mod state;
mod status;

pub use mailbox::Resolution;
pub use status::Status;

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::charsets::{CHAR_SETS, DEFAULT_CHAR_SET};
use crate::color::build_style;
use crate::config::Config;
use crate::error::{Result, SpinnerError};
use crate::frames::{Frame, FrameSet};
use crate::terminal::{DetectInputs, RenderMode};

use handle::RenderHandle;
use mailbox::Mailbox;
use paint::{LineFormat, Painter};
use render::RenderLoop;
use safe_state::SharedState;
use state::RenderState;
use status::AtomicStatus;

type Sink = Box<dyn Write + Send>;

/// Live between `start` and the end of `stop`.
struct Session {
    mailbox: Arc<Mailbox>,
    handle: RenderHandle,
}

pub struct Spinner {
    status: AtomicStatus,
    state: SharedState,
    mode: RenderMode,
    format: LineFormat,
    /// Parked here while stopped; owned by the render thread while active.
    sink: Mutex<Option<Sink>>,
    session: Mutex<Option<Session>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Spinner {
    /// Builds a stopped spinner.
    ///
    /// # Errors
    /// Returns an error if a color name is unknown, the terminal mode flags
    /// conflict, or the frequency is zero while rendering to a terminal.
    pub fn new(config: Config) -> Result<Self> {
        let env = DetectInputs::from_env(config.output.kind());
        let mode = config.terminal_mode.resolve(&env)?;

        if mode.is_tty() && config.frequency.is_zero() {
            return Err(SpinnerError::ZeroFrequency);
        }

        let style = build_style("color", &config.colors)?;
        let stop_style = build_style("stop color", &config.stop_colors)?;
        let stop_fail_style = build_style("stop fail color", &config.stop_fail_colors)?;

        let frames = if config.char_set.is_empty() {
            FrameSet::new(CHAR_SETS[DEFAULT_CHAR_SET])?
        } else {
            FrameSet::new(&config.char_set)?
        };

        // nothing animates without a terminal; lines only follow data changes
        let frequency = if mode.is_tty() {
            config.frequency
        } else {
            Duration::MAX
        };

        let mut state = RenderState::new(frequency, frames);
        state.prefix = config.prefix;
        state.suffix = config.suffix;
        state.message = config.message;
        state.style = style;
        for (resolution, message, character, style) in [
            (
                Resolution::Success,
                config.stop_message,
                config.stop_character,
                stop_style,
            ),
            (
                Resolution::Failure,
                config.stop_fail_message,
                config.stop_fail_character,
                stop_fail_style,
            ),
        ] {
            let ending = state.ending_mut(resolution);
            ending.message = message;
            ending.style = style;
            state.set_ending_frame(resolution, Frame::new(character));
        }

        let format = LineFormat {
            color_all: config.color_all,
            suffix_auto_colon: config.suffix_auto_colon,
            spinner_at_end: config.spinner_at_end,
            hide_cursor: !config.show_cursor,
        };

        debug!(?mode, "spinner created");

        Ok(Self {
            status: AtomicStatus::new(),
            state: SharedState::new(state),
            mode,
            format,
            sink: Mutex::new(Some(config.output.into_sink())),
            session: Mutex::new(None),
        })
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status.load()
    }

    /// How lines are drawn, fixed at construction.
    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    /// Launches the render thread.
    ///
    /// # Errors
    /// Returns `AlreadyActive` unless stopped, or `ZeroFrequency` when a
    /// terminal spinner has no frequency.
    pub fn start(&self) -> Result<()> {
        if self.mode.is_tty() && self.state.read(|s| s.frequency.is_zero()) {
            return Err(SpinnerError::ZeroFrequency);
        }
        if !self.status.transition(Status::Stopped, Status::Starting) {
            return Err(SpinnerError::AlreadyActive);
        }

        let Some(sink) = lock(&self.sink).take() else {
            panic!("atomic invariant encountered: output sink missing while stopped");
        };

        let mailbox = Arc::new(Mailbox::default());
        self.state.modify(|s| s.attach(Arc::clone(&mailbox)));

        let render = RenderLoop::new(
            self.state.clone(),
            Arc::clone(&mailbox),
            Painter::new(self.mode, self.format),
            self.mode,
            sink,
        );
        let handle = RenderHandle::spawn(render);
        *lock(&self.session) = Some(Session { mailbox, handle });

        self.status.finish(Status::Starting, Status::Running);
        debug!(mode = ?self.mode, "spinner started");
        Ok(())
    }

    /// Suspends rendering. Returns once the render thread is parked.
    ///
    /// # Errors
    /// Returns `NotRunning` unless running.
    pub fn pause(&self) -> Result<()> {
        if !self.status.transition(Status::Running, Status::Pausing) {
            return Err(SpinnerError::NotRunning);
        }
        self.session_mailbox().request_pause();
        self.status.finish(Status::Pausing, Status::Paused);
        debug!("spinner paused");
        Ok(())
    }

    /// Resumes rendering. Returns once the render thread is running again.
    ///
    /// # Errors
    /// Returns `NotPaused` unless paused.
    pub fn unpause(&self) -> Result<()> {
        if !self.status.transition(Status::Paused, Status::Unpausing) {
            return Err(SpinnerError::NotPaused);
        }
        self.session_mailbox().resume();
        self.status.finish(Status::Unpausing, Status::Running);
        debug!("spinner unpaused");
        Ok(())
    }

    /// Stops with the stop character, message and colors.
    ///
    /// # Errors
    /// Returns `NotActive` unless running or paused, or `Paint` if the
    /// output failed while animating.
    pub fn stop(&self) -> Result<()> {
        self.resolve(Resolution::Success)
    }

    /// Stops with the stop-fail character, message and colors.
    ///
    /// # Errors
    /// Same as [`Spinner::stop`].
    pub fn stop_fail(&self) -> Result<()> {
        self.resolve(Resolution::Failure)
    }

    fn resolve(&self, resolution: Resolution) -> Result<()> {
        let was_paused = if self.status.transition(Status::Running, Status::Stopping) {
            false
        } else if self.status.transition(Status::Paused, Status::Stopping) {
            true
        } else {
            return Err(SpinnerError::NotActive);
        };

        let Some(session) = lock(&self.session).take() else {
            panic!("atomic invariant encountered: no render session while stopping");
        };

        // a parked loop has to be woken before it can see the cancellation
        session.mailbox.cancel(resolution);
        if was_paused {
            session.mailbox.resume();
        }
        let outcome = session.handle.join();

        self.state.modify(RenderState::detach);
        *lock(&self.sink) = Some(outcome.sink);

        self.status.finish(Status::Stopping, Status::Stopped);
        debug!(?resolution, "spinner stopped");

        match outcome.error {
            Some(e) => Err(SpinnerError::Paint(e)),
            None => Ok(()),
        }
    }

    fn session_mailbox(&self) -> Arc<Mailbox> {
        match lock(&self.session).as_ref() {
            Some(session) => Arc::clone(&session.mailbox),
            None => panic!("atomic invariant encountered: no render session while active"),
        }
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        self.state.modify(|s| {
            s.prefix = prefix;
            s.notify_data();
        });
    }

    pub fn set_suffix(&self, suffix: impl Into<String>) {
        let suffix = suffix.into();
        self.state.modify(|s| {
            s.suffix = suffix;
            s.notify_data();
        });
    }

    pub fn set_message(&self, message: impl Into<String>) {
        let message = message.into();
        self.state.modify(|s| {
            s.message = message;
            s.notify_data();
        });
    }

    pub fn set_stop_message(&self, message: impl Into<String>) {
        self.set_ending_message(Resolution::Success, message.into());
    }

    pub fn set_stop_fail_message(&self, message: impl Into<String>) {
        self.set_ending_message(Resolution::Failure, message.into());
    }

    fn set_ending_message(&self, resolution: Resolution, message: String) {
        self.state.modify(|s| {
            s.ending_mut(resolution).message = message;
            s.notify_data();
        });
    }

    pub fn set_stop_character(&self, character: impl Into<String>) {
        self.set_ending_frame(Resolution::Success, character.into());
    }

    pub fn set_stop_fail_character(&self, character: impl Into<String>) {
        self.set_ending_frame(Resolution::Failure, character.into());
    }

    fn set_ending_frame(&self, resolution: Resolution, character: String) {
        let frame = Frame::new(character);
        self.state.modify(|s| {
            s.set_ending_frame(resolution, frame);
            s.notify_data();
        });
    }

    /// # Errors
    /// Returns `InvalidColor` naming the first unknown color.
    pub fn set_colors<S: AsRef<str>>(&self, colors: &[S]) -> Result<()> {
        let style = build_style("color", colors)?;
        self.state.modify(|s| {
            s.style = style;
            s.notify_data();
        });
        Ok(())
    }

    /// # Errors
    /// Returns `InvalidColor` naming the first unknown color.
    pub fn set_stop_colors<S: AsRef<str>>(&self, colors: &[S]) -> Result<()> {
        self.set_ending_style(Resolution::Success, "stop color", colors)
    }

    /// # Errors
    /// Returns `InvalidColor` naming the first unknown color.
    pub fn set_stop_fail_colors<S: AsRef<str>>(&self, colors: &[S]) -> Result<()> {
        self.set_ending_style(Resolution::Failure, "stop fail color", colors)
    }

    fn set_ending_style<S: AsRef<str>>(
        &self,
        resolution: Resolution,
        role: &'static str,
        colors: &[S],
    ) -> Result<()> {
        let style = build_style(role, colors)?;
        self.state.modify(|s| {
            s.ending_mut(resolution).style = style;
            s.notify_data();
        });
        Ok(())
    }

    /// Changes the animation speed, rescheduling the next frame.
    /// Without a terminal there is no animation and the value is ignored.
    ///
    /// # Errors
    /// Returns `InvalidFrequency` for a zero duration.
    pub fn set_frequency(&self, frequency: Duration) -> Result<()> {
        if frequency.is_zero() {
            return Err(SpinnerError::InvalidFrequency);
        }
        if !self.mode.is_tty() {
            return Ok(());
        }
        self.state.modify(|s| {
            s.frequency = frequency;
            if let Some(m) = s.mailbox() {
                m.notify_frequency(frequency);
            }
        });
        Ok(())
    }

    /// Older name for [`Spinner::set_frequency`].
    ///
    /// # Errors
    /// Same as [`Spinner::set_frequency`].
    #[deprecated(note = "use `set_frequency`")]
    pub fn set_delay(&self, delay: Duration) -> Result<()> {
        self.set_frequency(delay)
    }

    /// Replaces the animation frames. Takes effect from the next tick, starting
    /// at the first frame.
    ///
    /// # Errors
    /// Returns `EmptyCharSet` for an empty list.
    pub fn set_char_set<S: AsRef<str>>(&self, chars: &[S]) -> Result<()> {
        let frames = FrameSet::new(chars)?;
        self.state.modify(|s| s.set_frames(frames));
        Ok(())
    }

    /// Runs the animation backwards from its first frame.
    pub fn reverse(&self) {
        self.state.modify(RenderState::reverse);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.status().is_active() {
            let _ = self.resolve(Resolution::Failure);
        }
    }
}
