//! Run controller
//!
//! The controller owns the canonical [`Board`], the shared [`Pacing`] handle
//! and at most one in-flight run. A run executes its driver on a dedicated
//! worker thread; the controller keeps the run's [`CancellationToken`] and
//! join handle so it can stop it and wait for it to unwind.
//!
//! # Single active run
//!
//! - [`RunController::start`] while a run is `Running` only requests a stop.
//! - Otherwise it first joins the previous worker, so a new driver never
//!   starts before the old one has returned.
//! - [`RunController::reset`] stops and joins before touching the array.
//!
//! # Run states
//!
//! `Idle → Running → Completed | Cancelled | Failed`. A terminal state turns
//! back into `Idle` when it is acknowledged (the next `start`) or on reset.

use super::board::Board;
use super::cancel::{CancellationToken, Halted};
use super::emitter::{StepEmitter, StepObserver};
use super::errors::EngineError;
use super::pacing::{Clock, Pacing};
use super::record::SearchOutcome;
use crate::algorithms::{self, parse_target, AlgorithmId};
use crate::config::EngineConfig;
use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// Lifecycle of the controller's current run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    /// Carries the search outcome for searching algorithms
    Completed(Option<SearchOutcome>),
    Cancelled,
    Failed(String),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Completed(_) | RunState::Cancelled | RunState::Failed(_)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunState::Idle => "IDLE",
            RunState::Running => "RUNNING",
            RunState::Completed(_) => "DONE",
            RunState::Cancelled => "STOPPED",
            RunState::Failed(_) => "FAILED",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Completed(Some(outcome)) => write!(f, "completed ({})", outcome),
            RunState::Completed(None) => write!(f, "completed"),
            RunState::Failed(message) => write!(f, "failed: {}", message),
            other => f.write_str(&other.label().to_lowercase()),
        }
    }
}

/// What a call to [`RunController::start`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A run was already in flight; it has been asked to stop instead
    StopRequested,
}

struct ActiveRun {
    algorithm: AlgorithmId,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct RunController {
    config: EngineConfig,
    board: Board,
    pacing: Pacing,
    clock: Arc<dyn Clock>,
    observer: Arc<dyn StepObserver>,
    state: Arc<Mutex<RunState>>,
    active: Option<ActiveRun>,
    rng: SmallRng,
}

impl RunController {
    /// Create a controller with a freshly generated array
    pub fn new(
        config: EngineConfig,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn StepObserver>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let array = generate_array(&mut rng, &config);
        Ok(Self::assemble(config, array, rng, clock, observer))
    }

    /// Create a controller over a caller-supplied array
    pub fn with_array(
        config: EngineConfig,
        array: Vec<u32>,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn StepObserver>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self::assemble(config, array, rng, clock, observer))
    }

    fn assemble(
        config: EngineConfig,
        array: Vec<u32>,
        rng: SmallRng,
        clock: Arc<dyn Clock>,
        observer: Arc<dyn StepObserver>,
    ) -> Self {
        RunController {
            pacing: Pacing::new(config.speed),
            board: Board::new(array),
            config,
            clock,
            observer,
            state: Arc::new(Mutex::new(RunState::Idle)),
            active: None,
            rng,
        }
    }

    // ========== Run control ==========

    /// Start `algorithm` over the current array, or stop the run in flight.
    ///
    /// Searching algorithms need a numeric `search_value`; anything else is
    /// rejected with [`EngineError::InvalidInput`] before any step is emitted
    /// and the state stays `Idle`.
    pub fn start(
        &mut self,
        algorithm: AlgorithmId,
        search_value: Option<&str>,
    ) -> Result<StartOutcome, EngineError> {
        if self.is_running() {
            self.stop();
            return Ok(StartOutcome::StopRequested);
        }

        self.join_active();
        self.acknowledge();

        let target = if algorithm.is_search() {
            match parse_target(search_value.unwrap_or_default()) {
                Ok(target) => Some(target),
                Err(err) => {
                    warn!(algorithm = %algorithm, input = ?search_value, "rejected search value");
                    self.board.set_message(err.to_string());
                    return Err(err);
                }
            }
        } else {
            None
        };

        let token = CancellationToken::new();
        let mut steps = StepEmitter::new(
            self.board.array(),
            self.board.clone(),
            self.pacing.clone(),
            Arc::clone(&self.clock),
            token.clone(),
            Arc::clone(&self.observer),
        );

        self.board.begin_run(opening_message(algorithm, target));
        // Set before spawning so a fast worker can't finish "before" it started
        *self.state.lock() = RunState::Running;

        let worker_token = token.clone();
        let board = self.board.clone();
        let state = Arc::clone(&self.state);
        let observer = Arc::clone(&self.observer);

        let spawned = thread::Builder::new()
            .name(format!("sortty-{}", algorithm.slug()))
            .spawn(move || {
                let final_state = execute(algorithm, &mut steps, target, &worker_token);
                info!(
                    algorithm = %algorithm,
                    steps = steps.emitted(),
                    state = %final_state,
                    "run finished"
                );

                board.conclude(closing_message(&final_state));
                *state.lock() = final_state.clone();
                observer.on_finish(&final_state);
            });

        match spawned {
            Ok(handle) => {
                info!(algorithm = %algorithm, target = ?target, speed = self.pacing.speed(), "run started");
                self.active = Some(ActiveRun {
                    algorithm,
                    token,
                    handle,
                });
                Ok(StartOutcome::Started)
            }
            Err(err) => {
                *self.state.lock() = RunState::Idle;
                Err(EngineError::Spawn(err))
            }
        }
    }

    /// Ask the in-flight run (if any) to stop at its next suspend point
    pub fn stop(&self) {
        if let Some(active) = &self.active {
            if !active.token.is_stopped() {
                debug!(algorithm = %active.algorithm, "stop requested");
            }
            active.token.request_stop();
        }
    }

    /// Block until the current run (if any) has returned, then report its state
    pub fn wait(&mut self) -> RunState {
        self.join_active();
        self.state()
    }

    /// Stop any run, generate a new array and clear all display state
    pub fn reset(&mut self) {
        self.stop();
        self.join_active();

        let array = generate_array(&mut self.rng, &self.config);
        self.board.reset(array);
        *self.state.lock() = RunState::Idle;
        info!(length = self.config.array_length, "array regenerated");
    }

    /// Turn a terminal state back into `Idle`
    pub fn acknowledge(&self) {
        let mut state = self.state.lock();
        if state.is_terminal() {
            *state = RunState::Idle;
        }
    }

    fn join_active(&mut self) {
        if let Some(active) = self.active.take() {
            if active.handle.join().is_err() {
                // The driver itself is guarded; this is a panic in an observer
                let mut state = self.state.lock();
                if state.is_running() {
                    *state = RunState::Failed("run worker panicked".to_string());
                }
            }
        }
    }

    // ========== Accessors ==========

    pub fn set_speed(&self, speed: u8) {
        self.pacing.set_speed(speed);
        debug!(speed = self.pacing.speed(), "speed changed");
    }

    pub fn speed(&self) -> u8 {
        self.pacing.speed()
    }

    /// Cloneable pacing handle, e.g. for changing the speed from an observer
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn state(&self) -> RunState {
        self.state.lock().clone()
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().is_running()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn array(&self) -> Vec<u32> {
        self.board.array()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        self.stop();
        self.join_active();
    }
}

/// Fresh array of `config.array_length` values drawn uniformly from the
/// configured inclusive range
pub fn generate_array(rng: &mut impl Rng, config: &EngineConfig) -> Vec<u32> {
    (0..config.array_length)
        .map(|_| rng.random_range(config.min_value..=config.max_value))
        .collect()
}

/// Run the driver, converting a stop or a panic into a terminal state
fn execute(
    algorithm: AlgorithmId,
    steps: &mut StepEmitter,
    target: Option<i64>,
    token: &CancellationToken,
) -> RunState {
    match catch_unwind(AssertUnwindSafe(|| algorithms::run(algorithm, steps, target))) {
        // A stop that arrived after the last suspend point still counts
        Ok(Ok(_)) if token.is_stopped() => RunState::Cancelled,
        Ok(Ok(outcome)) => RunState::Completed(outcome),
        Ok(Err(Halted)) => RunState::Cancelled,
        Err(payload) => {
            let message = panic_message(payload);
            warn!(algorithm = %algorithm, "driver panicked: {}", message);
            RunState::Failed(message)
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return (*msg).to_string();
    }
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    "non-string panic payload".to_string()
}

fn opening_message(algorithm: AlgorithmId, target: Option<i64>) -> String {
    match target {
        Some(target) => format!("Searching for {} using {}", target, algorithm.name()),
        None => format!("Running {}", algorithm.name()),
    }
}

fn closing_message(state: &RunState) -> Option<String> {
    match state {
        RunState::Completed(None) => Some("Sorting completed!".to_string()),
        // Keep the driver's found / not found message
        RunState::Completed(Some(_)) => None,
        RunState::Cancelled => Some("Visualization stopped".to_string()),
        RunState::Failed(message) => Some(format!("Run failed: {}", message)),
        RunState::Idle | RunState::Running => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generate_array_respects_config() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = EngineConfig::default();
        for _ in 0..50 {
            let array = generate_array(&mut rng, &config);
            assert_eq!(array.len(), 20);
            assert!(array.iter().all(|v| (10..=309).contains(v)));
        }
    }

    #[test]
    fn test_generate_array_covers_both_ends() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = EngineConfig {
            array_length: 2000,
            min_value: 1,
            max_value: 3,
            ..EngineConfig::default()
        };
        let array = generate_array(&mut rng, &config);
        assert!(array.contains(&1));
        assert!(array.contains(&3));
    }

    #[test]
    fn test_panic_message_extraction() {
        let caught = catch_unwind(|| panic!("boom {}", 1)).unwrap_err();
        assert_eq!(panic_message(caught), "boom 1");
    }

    #[test]
    fn test_closing_messages() {
        assert_eq!(
            closing_message(&RunState::Completed(None)).as_deref(),
            Some("Sorting completed!")
        );
        assert_eq!(
            closing_message(&RunState::Completed(Some(SearchOutcome::NotFound))),
            None
        );
        assert_eq!(RunState::Cancelled.to_string(), "stopped");
    }
}
