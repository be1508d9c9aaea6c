// src/spinner/handle.rs
//! Thread management for the render loop.

use std::io::{self, Write};
use std::panic;
use std::thread;

use super::render::RenderLoop;

/// What the render thread hands back when it ends.
pub struct Outcome {
    pub sink: Box<dyn Write + Send>,
    pub error: Option<io::Error>,
}

/// Owns the render thread between `start` and `stop`.
pub struct RenderHandle {
    handle: thread::JoinHandle<Outcome>,
}

impl RenderHandle {
    #[must_use]
    pub fn spawn(render: RenderLoop) -> Self {
        let handle = thread::spawn(move || render.run());
        Self { handle }
    }

    /// Waits for the loop to finish. A panic on the render thread is re-raised here.
    pub fn join(self) -> Outcome {
        match self.handle.join() {
            Ok(outcome) => outcome,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}
