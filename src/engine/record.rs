//! Step records emitted by the algorithm drivers
//!
//! A [`StepRecord`] describes one comparison, mutation, or milestone of a run.
//! Records are delivered in emission order and are never merged or dropped;
//! a record carries an array snapshot whenever the working array changed
//! since the previous record.

use std::fmt;

/// What a step record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRole {
    Comparing,
    Swapped,
    Inserted,
    Merged,
    Partitioned,
    Checked,
    Sorted,
    Found,
    NotFound,
}

impl StepRole {
    /// Short kebab-case label, used by the step log and headless output
    pub fn label(self) -> &'static str {
        match self {
            StepRole::Comparing => "comparing",
            StepRole::Swapped => "swapped",
            StepRole::Inserted => "inserted",
            StepRole::Merged => "merged",
            StepRole::Partitioned => "partitioned",
            StepRole::Checked => "checked",
            StepRole::Sorted => "sorted",
            StepRole::Found => "found",
            StepRole::NotFound => "not-found",
        }
    }

    /// Whether the record's indices should be highlighted as "active"
    pub fn highlights(self) -> bool {
        !matches!(self, StepRole::Sorted | StepRole::NotFound)
    }
}

impl fmt::Display for StepRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a searching run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    pub fn index(self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(index),
            SearchOutcome::NotFound => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(index) => write!(f, "found at position {}", index),
            SearchOutcome::NotFound => write!(f, "not found"),
        }
    }
}

/// One observable step of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub role: StepRole,
    pub indices: Vec<usize>,
    pub message: String,
    pub array_snapshot: Option<Vec<u32>>,
}

impl StepRecord {
    pub fn new(role: StepRole, indices: impl Into<Vec<usize>>, message: impl Into<String>) -> Self {
        StepRecord {
            role,
            indices: indices.into(),
            message: message.into(),
            array_snapshot: None,
        }
    }

    pub fn comparing(indices: impl Into<Vec<usize>>, message: impl Into<String>) -> Self {
        Self::new(StepRole::Comparing, indices, message)
    }

    pub fn sorted(indices: impl Into<Vec<usize>>, message: impl Into<String>) -> Self {
        Self::new(StepRole::Sorted, indices, message)
    }

    /// Attach a copy of the array as it looks after this step
    pub fn with_snapshot(mut self, array: Vec<u32>) -> Self {
        self.array_snapshot = Some(array);
        self
    }

    /// Rough heap footprint in bytes, used to bound the step history
    pub fn estimated_size(&self) -> usize {
        let snapshot = self
            .array_snapshot
            .as_ref()
            .map_or(0, |a| a.len() * std::mem::size_of::<u32>());
        std::mem::size_of::<Self>()
            + self.indices.len() * std::mem::size_of::<usize>()
            + self.message.len()
            + snapshot
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<11} {:?} {}", self.role.label(), self.indices, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_kebab_case() {
        assert_eq!(StepRole::NotFound.label(), "not-found");
        assert_eq!(StepRole::Partitioned.to_string(), "partitioned");
    }

    #[test]
    fn test_snapshot_counts_toward_size() {
        let plain = StepRecord::comparing(vec![0, 1], "Comparing");
        let with_array = plain.clone().with_snapshot(vec![1, 2, 3, 4]);
        assert_eq!(
            with_array.estimated_size() - plain.estimated_size(),
            4 * std::mem::size_of::<u32>()
        );
    }

    #[test]
    fn test_search_outcome_index() {
        assert_eq!(SearchOutcome::Found(3).index(), Some(3));
        assert_eq!(SearchOutcome::NotFound.index(), None);
    }
}
