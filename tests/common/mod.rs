// Shared harness for the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use sortty::algorithms::{self, AlgorithmId};
use sortty::engine::{
    Board, CancellationToken, Clock, NoDelayClock, Pacing, SearchOutcome, Step, StepEmitter,
    StepObserver, StepRecord, StepRole,
};
use std::sync::Arc;
use std::time::Duration;

/// Observer that keeps every record and the array it was published with
#[derive(Default)]
pub struct Recorder {
    pub steps: Mutex<Vec<(StepRecord, Vec<u32>)>>,
}

impl Recorder {
    pub fn records(&self) -> Vec<StepRecord> {
        self.steps.lock().iter().map(|(r, _)| r.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.steps.lock().len()
    }
}

impl StepObserver for Recorder {
    fn on_step(&self, record: &StepRecord, array: &[u32]) {
        self.steps.lock().push((record.clone(), array.to_vec()));
    }
}

/// Clock that records every requested delay without waiting
#[derive(Default)]
pub struct RecordingClock {
    pub delays: Mutex<Vec<Duration>>,
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) {
        self.delays.lock().push(duration);
    }
}

/// Everything a driver produced when run to completion without delays
pub struct Trace {
    pub records: Vec<StepRecord>,
    pub snapshots: Vec<Vec<u32>>,
    pub array: Vec<u32>,
    pub origins: Vec<usize>,
    pub board: Vec<u32>,
    pub outcome: Option<SearchOutcome>,
}

impl Trace {
    /// All indices marked sorted, ascending
    pub fn sorted_marks(&self) -> Vec<usize> {
        let mut marks: Vec<usize> = self
            .records
            .iter()
            .filter(|r| r.role == StepRole::Sorted)
            .flat_map(|r| r.indices.iter().copied())
            .collect();
        marks.sort_unstable();
        marks.dedup();
        marks
    }
}

pub fn drive(algorithm: AlgorithmId, array: Vec<u32>, target: Option<i64>) -> Trace {
    let recorder = Arc::new(Recorder::default());
    let board = Board::new(array.clone());
    let mut steps = StepEmitter::new(
        array,
        board.clone(),
        Pacing::default(),
        Arc::new(NoDelayClock),
        CancellationToken::new(),
        recorder.clone(),
    );
    let outcome = algorithms::run(algorithm, &mut steps, target).expect("run was never stopped");

    let steps_seen = std::mem::take(&mut *recorder.steps.lock());
    let (records, snapshots) = steps_seen.into_iter().unzip();
    Trace {
        records,
        snapshots,
        array: steps.values(),
        origins: steps.origins(),
        board: board.array(),
        outcome,
    }
}

pub fn is_sorted(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

pub fn sorted_copy(values: &[u32]) -> Vec<u32> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

/// Observer that requests a stop from inside the `stop_at`-th record
pub struct StopAt {
    token: CancellationToken,
    stop_at: usize,
    pub records: Mutex<Vec<StepRecord>>,
}

impl StepObserver for StopAt {
    fn on_step(&self, record: &StepRecord, _array: &[u32]) {
        let mut records = self.records.lock();
        records.push(record.clone());
        if records.len() == self.stop_at {
            self.token.request_stop();
        }
    }
}

/// What a driver left behind after being stopped
pub struct Halt {
    pub result: Step<Option<SearchOutcome>>,
    pub records: Vec<StepRecord>,
    pub board: Vec<u32>,
}

/// Run `algorithm`, requesting a stop on record `stop_at` (0 stops before the first)
pub fn drive_until_stopped(
    algorithm: AlgorithmId,
    array: Vec<u32>,
    target: Option<i64>,
    stop_at: usize,
) -> Halt {
    let token = CancellationToken::new();
    if stop_at == 0 {
        token.request_stop();
    }
    let observer = Arc::new(StopAt {
        token: token.clone(),
        stop_at,
        records: Mutex::new(Vec::new()),
    });
    let board = Board::new(array.clone());
    let mut steps = StepEmitter::new(
        array,
        board.clone(),
        Pacing::default(),
        Arc::new(NoDelayClock),
        token,
        observer.clone(),
    );

    let result = algorithms::run(algorithm, &mut steps, target);
    let records = std::mem::take(&mut *observer.records.lock());
    Halt {
        result,
        records,
        board: board.array(),
    }
}
