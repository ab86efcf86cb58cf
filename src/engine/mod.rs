//! Algorithm stepping engine
//!
//! This module provides everything between "the user pressed start" and "a
//! step record reached the renderer":
//! - [`record`]: step records and search outcomes
//! - [`pacing`]: speed-to-delay mapping and the injectable [`pacing::Clock`]
//! - [`cancel`]: cancellation token and the [`cancel::Halted`] marker
//! - [`board`]: canonical array plus transient display state
//! - [`emitter`]: the suspend point drivers go through, and observers
//! - [`controller`]: run lifecycle and the single-active-run rule
//! - [`errors`]: engine error types
//!
//! # Execution Model
//!
//! A run is one driver executing on its own worker thread. The driver only
//! yields at emitter calls; each call publishes a record, sleeps for the
//! current pacing delay and checks for a stop request on both sides of the
//! sleep. Records from one run are delivered strictly in emission order.

pub mod board;
pub mod cancel;
pub mod constants;
pub mod controller;
pub mod emitter;
pub mod errors;
pub mod pacing;
pub mod record;

pub use board::{Board, BoardView};
pub use cancel::{CancellationToken, Halted, Step};
pub use controller::{RunController, RunState, StartOutcome};
pub use emitter::{ChannelObserver, EngineEvent, NullObserver, Slot, StepEmitter, StepObserver};
pub use errors::EngineError;
pub use pacing::{Clock, NoDelayClock, Pacing, SystemClock};
pub use record::{SearchOutcome, StepRecord, StepRole};
