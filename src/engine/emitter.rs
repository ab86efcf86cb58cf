//! Step emitter: the suspend point every driver goes through
//!
//! The emitter owns the driver's working array. Drivers read and mutate it
//! through [`StepEmitter::value`], [`StepEmitter::swap`], [`StepEmitter::set`]
//! and friends, and report progress with [`StepEmitter::emit`]. Each emission:
//!
//! 1. checks the cancellation token,
//! 2. attaches an array snapshot if the array changed since the last record,
//! 3. folds the record into the [`Board`] and hands it to the observer,
//! 4. suspends for the delay the [`Pacing`] handle reports *now*,
//! 5. checks the cancellation token again.
//!
//! Recursive drivers pass the same `&mut StepEmitter` down the call stack, so
//! nested emissions share one token, one pacing handle and one observer.
//!
//! Every element also carries the index it started at ([`Slot::origin`]),
//! which makes element identity (and therefore stability) observable.

use super::board::Board;
use super::cancel::{CancellationToken, Halted, Step};
use super::controller::RunState;
use super::pacing::{Clock, Pacing};
use super::record::StepRecord;
use crossbeam_channel::{Receiver, Sender};
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// One element of the working array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub value: u32,
    /// Position of this element in the array the run started from
    pub origin: usize,
}

/// Receiver of engine output, called on the run's worker thread
pub trait StepObserver: Send + Sync {
    /// Called once per record, in emission order, before the run suspends
    fn on_step(&self, record: &StepRecord, array: &[u32]);

    /// Called once when the run reaches a terminal state
    fn on_finish(&self, _state: &RunState) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&self, _record: &StepRecord, _array: &[u32]) {}
}

/// Engine output forwarded across threads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Step { record: StepRecord, array: Vec<u32> },
    Finished(RunState),
}

/// Observer that forwards every notification into a channel
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<EngineEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<EngineEvent>) -> Self {
        ChannelObserver { tx }
    }

    /// Create an observer together with the receiving end
    pub fn channel() -> (Self, Receiver<EngineEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl StepObserver for ChannelObserver {
    fn on_step(&self, record: &StepRecord, array: &[u32]) {
        // A dropped receiver just means nobody is watching anymore
        let _ = self.tx.send(EngineEvent::Step {
            record: record.clone(),
            array: array.to_vec(),
        });
    }

    fn on_finish(&self, state: &RunState) {
        let _ = self.tx.send(EngineEvent::Finished(state.clone()));
    }
}

/// Instrumented working array handed to a driver
pub struct StepEmitter {
    slots: Vec<Slot>,
    dirty: bool,
    emitted: usize,
    board: Board,
    pacing: Pacing,
    clock: Arc<dyn Clock>,
    cancel: CancellationToken,
    observer: Arc<dyn StepObserver>,
}

impl StepEmitter {
    pub fn new(
        array: Vec<u32>,
        board: Board,
        pacing: Pacing,
        clock: Arc<dyn Clock>,
        cancel: CancellationToken,
        observer: Arc<dyn StepObserver>,
    ) -> Self {
        let slots = array
            .into_iter()
            .enumerate()
            .map(|(origin, value)| Slot { value, origin })
            .collect();

        StepEmitter {
            slots,
            dirty: false,
            emitted: 0,
            board,
            pacing,
            clock,
            cancel,
            observer,
        }
    }

    // ========== Working array access ==========

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn value(&self, index: usize) -> u32 {
        self.slots[index].value
    }

    pub fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }

    /// Copy of a contiguous run of slots (merge buffers)
    pub fn slots(&self, range: RangeInclusive<usize>) -> Vec<Slot> {
        self.slots[range].to_vec()
    }

    pub fn set(&mut self, index: usize, slot: Slot) {
        self.slots[index] = slot;
        self.dirty = true;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.dirty = true;
    }

    /// Replace the working array with its stably sorted copy
    pub fn sort_in_place(&mut self) {
        self.slots.sort_by_key(|slot| slot.value);
        self.dirty = true;
    }

    pub fn values(&self) -> Vec<u32> {
        self.slots.iter().map(|slot| slot.value).collect()
    }

    pub fn origins(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.origin).collect()
    }

    /// Number of records published so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    // ========== Suspend points ==========

    /// Fail with [`Halted`] if a stop was requested
    pub fn checkpoint(&self) -> Step {
        if self.cancel.is_stopped() {
            Err(Halted)
        } else {
            Ok(())
        }
    }

    /// Publish `record`, then suspend for the current pacing delay
    pub fn emit(&mut self, record: StepRecord) -> Step {
        self.checkpoint()?;
        self.publish(record);
        // Read after publishing so an observer's speed change applies right away
        self.clock.sleep(self.pacing.current_delay());
        self.checkpoint()
    }

    /// Publish `record`, then suspend for a fixed delay regardless of speed
    pub fn emit_for(&mut self, record: StepRecord, delay: Duration) -> Step {
        self.checkpoint()?;
        self.publish(record);
        self.clock.sleep(delay);
        self.checkpoint()
    }

    fn publish(&mut self, mut record: StepRecord) {
        if self.dirty && record.array_snapshot.is_none() {
            record.array_snapshot = Some(self.values());
        }
        self.dirty = false;

        self.board.apply(&record);
        let array = self.values();
        self.observer.on_step(&record, &array);
        self.emitted += 1;

        trace!(
            step = self.emitted,
            role = record.role.label(),
            indices = ?record.indices,
            "{}",
            record.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pacing::NoDelayClock;
    use crate::engine::record::StepRole;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Collect {
        records: Mutex<Vec<StepRecord>>,
    }

    impl StepObserver for Collect {
        fn on_step(&self, record: &StepRecord, _array: &[u32]) {
            self.records.lock().push(record.clone());
        }
    }

    fn emitter(array: Vec<u32>, observer: Arc<dyn StepObserver>) -> (StepEmitter, CancellationToken) {
        let token = CancellationToken::new();
        let steps = StepEmitter::new(
            array,
            Board::default(),
            Pacing::default(),
            Arc::new(NoDelayClock),
            token.clone(),
            observer,
        );
        (steps, token)
    }

    #[test]
    fn test_snapshot_only_after_mutation() {
        let observer = Arc::new(Collect::default());
        let (mut steps, _) = emitter(vec![2, 1], observer.clone());

        steps.emit(StepRecord::comparing(vec![0, 1], "cmp")).unwrap();
        steps.swap(0, 1);
        steps
            .emit(StepRecord::new(StepRole::Swapped, vec![0, 1], "swap"))
            .unwrap();
        steps.emit(StepRecord::sorted(vec![0, 1], "done")).unwrap();

        let records = observer.records.lock();
        assert_eq!(records[0].array_snapshot, None);
        assert_eq!(records[1].array_snapshot, Some(vec![1, 2]));
        assert_eq!(records[2].array_snapshot, None);
        assert_eq!(steps.origins(), vec![1, 0]);
    }

    #[test]
    fn test_stopped_emitter_publishes_nothing() {
        let observer = Arc::new(Collect::default());
        let (mut steps, token) = emitter(vec![1], observer.clone());

        token.request_stop();
        assert_eq!(steps.emit(StepRecord::sorted(vec![0], "x")), Err(Halted));
        assert_eq!(steps.emitted(), 0);
        assert!(observer.records.lock().is_empty());
    }

    #[test]
    fn test_stop_during_suspend_halts_after_publishing() {
        struct StopOnFirst(CancellationToken);
        impl StepObserver for StopOnFirst {
            fn on_step(&self, _record: &StepRecord, _array: &[u32]) {
                self.0.request_stop();
            }
        }

        let token = CancellationToken::new();
        let mut steps = StepEmitter::new(
            vec![1, 2],
            Board::default(),
            Pacing::default(),
            Arc::new(NoDelayClock),
            token.clone(),
            Arc::new(StopOnFirst(token.clone())),
        );

        assert_eq!(steps.emit(StepRecord::comparing(vec![0, 1], "cmp")), Err(Halted));
        assert_eq!(steps.emitted(), 1);
    }
}
