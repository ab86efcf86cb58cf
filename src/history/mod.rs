// Step history for the log pane and headless summaries

use crate::engine::record::StepRecord;
use std::collections::VecDeque;

/// A step record together with its position in the run
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// 1-based step number within the run
    pub step: usize,
    pub record: StepRecord,
}

impl HistoryEntry {
    /// Estimate the memory usage of this entry in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<usize>() + self.record.estimated_size()
    }
}

/// Rolling log of the most recent step records.
///
/// Bounded by an estimated memory budget rather than a record count, since a
/// record with an array snapshot is much larger than one without. When a new
/// entry does not fit, the oldest entries are evicted first; the newest entry
/// is always kept.
#[derive(Debug)]
pub struct StepHistory {
    entries: VecDeque<HistoryEntry>,
    max_memory: usize,
    current_memory: usize,
    total_seen: usize,
}

impl StepHistory {
    pub fn new(max_memory: usize) -> Self {
        StepHistory {
            entries: VecDeque::new(),
            max_memory,
            current_memory: 0,
            total_seen: 0,
        }
    }

    /// Add a record to the history
    pub fn push(&mut self, record: StepRecord) {
        self.total_seen += 1;
        let entry = HistoryEntry {
            step: self.total_seen,
            record,
        };
        let size = entry.estimated_size();

        while !self.entries.is_empty() && self.current_memory + size > self.max_memory {
            if let Some(evicted) = self.entries.pop_front() {
                self.current_memory -= evicted.estimated_size();
            }
        }

        self.current_memory += size;
        self.entries.push_back(entry);
    }

    /// Forget everything (new run or new array)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_memory = 0;
        self.total_seen = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Number of entries currently retained
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records pushed since the last clear, evicted or not
    pub fn total_seen(&self) -> usize {
        self.total_seen
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl Default for StepHistory {
    fn default() -> Self {
        // Plenty for several thousand records of a 20-element array
        Self::new(1024 * 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::record::StepRecord;

    fn record(i: usize) -> StepRecord {
        StepRecord::comparing(vec![i, i + 1], format!("step {}", i))
    }

    #[test]
    fn test_numbers_steps_from_one() {
        let mut history = StepHistory::default();
        history.push(record(0));
        history.push(record(1));
        let steps: Vec<usize> = history.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![1, 2]);
    }

    #[test]
    fn test_evicts_oldest_over_budget() {
        let one = HistoryEntry {
            step: 1,
            record: record(0),
        }
        .estimated_size();
        let mut history = StepHistory::new(one * 3);

        for i in 0..10 {
            history.push(record(i));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.total_seen(), 10);
        assert_eq!(history.iter().next().map(|e| e.step), Some(8));
        assert!(history.memory_usage() <= history.memory_limit());
    }

    #[test]
    fn test_oversized_entry_is_still_kept() {
        let mut history = StepHistory::new(1);
        history.push(record(0).with_snapshot(vec![0; 100]));
        history.push(record(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|e| e.step), Some(2));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut history = StepHistory::default();
        for i in 0..5 {
            history.push(record(i));
        }
        assert_eq!(history.last().map(|e| e.step), Some(5));
        assert!(history.memory_usage() > 0);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.total_seen(), 0);
        assert_eq!(history.memory_usage(), 0);
    }
}
