// src/spinner/mailbox.rs
//! Coordination between control-surface callers and the render thread.
//!
//! One mailbox is created per `start()` and dropped on stop. Data and frequency
//! notifications coalesce: a pending one is replaced, never queued. Pause and
//! resume are handshakes; the caller blocks until the render thread answers
//! (or has exited).

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// How a spinner is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pause {
    #[default]
    Idle,
    Requested,
    Parked,
    Resuming,
}

#[derive(Debug, Default)]
struct Signals {
    cancel: Option<Resolution>,
    pause: Pause,
    frequency: Option<Duration>,
    data_changed: bool,
    exited: bool,
}

/// What woke the render thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Tick,
    Pause,
    Data,
    Frequency(Duration),
    Cancel(Resolution),
}

impl Signals {
    fn take_event(&mut self) -> Option<Event> {
        if let Some(r) = self.cancel.take() {
            return Some(Event::Cancel(r));
        }
        if self.pause == Pause::Requested {
            return Some(Event::Pause);
        }
        if let Some(d) = self.frequency.take() {
            return Some(Event::Frequency(d));
        }
        if std::mem::take(&mut self.data_changed) {
            return Some(Event::Data);
        }
        None
    }
}

#[derive(Debug, Default)]
pub(crate) struct Mailbox {
    signals: Mutex<Signals>,
    wake: Condvar,
}

impl Mailbox {
    fn lock(&self) -> MutexGuard<'_, Signals> {
        self.signals.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(&self, guard: MutexGuard<'a, Signals>) -> MutexGuard<'a, Signals> {
        self.wake.wait(guard).unwrap_or_else(PoisonError::into_inner)
    }

    /// Non-blocking; repeated calls before the render thread wakes collapse into one.
    pub(crate) fn notify_data(&self) {
        self.lock().data_changed = true;
        self.wake.notify_all();
    }

    /// Non-blocking; only the newest pending frequency is delivered.
    pub(crate) fn notify_frequency(&self, frequency: Duration) {
        self.lock().frequency = Some(frequency);
        self.wake.notify_all();
    }

    pub(crate) fn cancel(&self, resolution: Resolution) {
        self.lock().cancel = Some(resolution);
        self.wake.notify_all();
    }

    /// Blocks until the render thread has parked.
    pub(crate) fn request_pause(&self) {
        let mut s = self.lock();
        s.pause = Pause::Requested;
        self.wake.notify_all();
        while s.pause == Pause::Requested && !s.exited {
            s = self.wait(s);
        }
    }

    /// Blocks until the render thread acknowledges it is running again.
    pub(crate) fn resume(&self) {
        let mut s = self.lock();
        s.pause = Pause::Resuming;
        self.wake.notify_all();
        while s.pause == Pause::Resuming && !s.exited {
            s = self.wait(s);
        }
    }

    // ---- render thread side ----

    /// Waits for the next event. `deadline` of `None` means no timer is armed.
    pub(crate) fn next_event(&self, deadline: Option<Instant>) -> Event {
        let mut s = self.lock();
        loop {
            if let Some(event) = s.take_event() {
                return event;
            }
            match deadline {
                None => s = self.wait(s),
                Some(at) => {
                    let now = Instant::now();
                    if now >= at {
                        return Event::Tick;
                    }
                    s = match self.wake.wait_timeout(s, at - now) {
                        Ok((guard, _)) => guard,
                        Err(poisoned) => poisoned.into_inner().0,
                    };
                }
            }
        }
    }

    /// Answers a pause request and blocks until resumed.
    pub(crate) fn park(&self) {
        let mut s = self.lock();
        s.pause = Pause::Parked;
        self.wake.notify_all();
        while s.pause != Pause::Resuming {
            s = self.wait(s);
        }
        s.pause = Pause::Idle;
        self.wake.notify_all();
    }

    /// Releases every handshake waiter; called once the render thread is done.
    pub(crate) fn mark_exited(&self) {
        self.lock().exited = true;
        self.wake.notify_all();
    }

    #[cfg(test)]
    fn pending_data(&self) -> bool {
        self.lock().data_changed
    }
}
