//! Cooperative cancellation
//!
//! A fresh [`CancellationToken`] is created for every run. The UI side keeps a
//! clone and calls [`CancellationToken::request_stop`]; the driver side sees it
//! through the emitter's checkpoints and unwinds with [`Halted`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for one run. Once set it stays set.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stopped: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Marker returned by a suspend point once the run has been asked to stop.
///
/// Not an error: a halted run ends in `RunState::Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halted;

/// Result of anything that may pass through a suspend point
pub type Step<T = ()> = Result<T, Halted>;
