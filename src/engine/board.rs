//! The board: canonical array plus transient display state
//!
//! The board is the run context owned by the [`RunController`]. The active
//! driver's emitter is the only writer while a run is in flight; the renderer
//! reads it through [`Board::snapshot`], which hands back an owned copy so a
//! frame is never drawn from a half-applied step.
//!
//! The canonical array always equals the snapshot carried by the most recent
//! published record (or the generated array when no run has mutated it).
//!
//! [`RunController`]: super::controller::RunController

use super::record::{SearchOutcome, StepRecord, StepRole};
use parking_lot::RwLock;
use std::sync::Arc;

/// Point-in-time copy of everything a renderer needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub array: Vec<u32>,
    /// Indices touched by the most recent step
    pub comparing: Vec<usize>,
    /// Indices marked sorted, in marking order
    pub sorted: Vec<usize>,
    pub search_result: Option<SearchOutcome>,
    pub message: String,
}

impl BoardView {
    /// Sorted indices in ascending order
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = self.sorted.clone();
        indices.sort_unstable();
        indices
    }
}

/// Shared handle onto the run context
#[derive(Debug, Clone, Default)]
pub struct Board {
    inner: Arc<RwLock<BoardView>>,
}

impl Board {
    pub fn new(array: Vec<u32>) -> Self {
        Board {
            inner: Arc::new(RwLock::new(BoardView {
                array,
                ..BoardView::default()
            })),
        }
    }

    /// Copy-on-read view of the board
    pub fn snapshot(&self) -> BoardView {
        self.inner.read().clone()
    }

    /// Copy of the canonical array
    pub fn array(&self) -> Vec<u32> {
        self.inner.read().array.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn message(&self) -> String {
        self.inner.read().message.clone()
    }

    /// Fold one step into the board
    pub(crate) fn apply(&self, record: &StepRecord) {
        let mut view = self.inner.write();

        if let Some(array) = &record.array_snapshot {
            view.array.clone_from(array);
        }

        match record.role {
            StepRole::Sorted => {
                for &index in &record.indices {
                    if !view.sorted.contains(&index) {
                        view.sorted.push(index);
                    }
                }
            }
            StepRole::Found => {
                view.comparing.clone_from(&record.indices);
                view.search_result = record.indices.first().copied().map(SearchOutcome::Found);
            }
            StepRole::NotFound => {
                view.comparing.clear();
                view.search_result = Some(SearchOutcome::NotFound);
            }
            role if role.highlights() => {
                view.comparing.clone_from(&record.indices);
            }
            _ => {}
        }

        if !record.message.is_empty() {
            view.message.clone_from(&record.message);
        }
    }

    pub(crate) fn set_message(&self, message: impl Into<String>) {
        self.inner.write().message = message.into();
    }

    /// Clear highlights left over from a previous run
    pub(crate) fn begin_run(&self, message: impl Into<String>) {
        let mut view = self.inner.write();
        view.comparing.clear();
        view.sorted.clear();
        view.search_result = None;
        view.message = message.into();
    }

    /// Drop the active highlight at the end of a run, optionally replacing the message
    pub(crate) fn conclude(&self, message: Option<String>) {
        let mut view = self.inner.write();
        view.comparing.clear();
        if let Some(message) = message {
            view.message = message;
        }
    }

    /// Install a new array and forget all transient state
    pub(crate) fn reset(&self, array: Vec<u32>) {
        *self.inner.write() = BoardView {
            array,
            ..BoardView::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_snapshot_replaces_array() {
        let board = Board::new(vec![3, 1, 2]);
        let record = StepRecord::new(StepRole::Swapped, vec![0, 1], "Swapped")
            .with_snapshot(vec![1, 3, 2]);
        board.apply(&record);

        let view = board.snapshot();
        assert_eq!(view.array, vec![1, 3, 2]);
        assert_eq!(view.comparing, vec![0, 1]);
        assert_eq!(view.message, "Swapped");
    }

    #[test]
    fn test_sorted_marks_do_not_repeat() {
        let board = Board::new(vec![1, 2]);
        board.apply(&StepRecord::sorted(vec![1], "a"));
        board.apply(&StepRecord::sorted(vec![1, 0], "b"));
        assert_eq!(board.snapshot().sorted, vec![1, 0]);
        assert_eq!(board.snapshot().sorted_indices(), vec![0, 1]);
    }

    #[test]
    fn test_search_roles_set_result() {
        let board = Board::new(vec![5, 6]);
        board.apply(&StepRecord::new(StepRole::Found, vec![1], "Found 6 at position 1!"));
        assert_eq!(board.snapshot().search_result, Some(SearchOutcome::Found(1)));

        board.apply(&StepRecord::new(StepRole::NotFound, Vec::new(), "7 not found"));
        let view = board.snapshot();
        assert_eq!(view.search_result, Some(SearchOutcome::NotFound));
        assert!(view.comparing.is_empty());
    }

    #[test]
    fn test_reset_clears_transient_state() {
        let board = Board::new(vec![2, 1]);
        board.apply(&StepRecord::sorted(vec![0], "done"));
        board.reset(vec![9, 8, 7]);

        let view = board.snapshot();
        assert_eq!(view.array, vec![9, 8, 7]);
        assert!(view.sorted.is_empty());
        assert!(view.message.is_empty());
    }
}
