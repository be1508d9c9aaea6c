// src/spinner/safe_state.rs
//! Thread-safe wrapper for render state.

use super::state::RenderState;
use std::sync::{Arc, Mutex, PoisonError};

/// The single lock every setter and the render thread go through.
/// Callers never see a half-applied update: all fields are read in one critical section.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Mutex<RenderState>>,
}

impl SharedState {
    #[must_use]
    pub fn new(state: RenderState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Access the state with a closure. A poisoned lock is recovered, since
    /// every mutation leaves the state consistent.
    pub fn modify<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut RenderState) -> R,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&RenderState) -> R,
    {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }
}
