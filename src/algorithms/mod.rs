//! Instrumented algorithm drivers
//!
//! Each driver is a plain function over a [`StepEmitter`]: it reads and
//! mutates the working array through the emitter and reports every comparison
//! and mutation as a step record. A driver returns `Err(Halted)` as soon as
//! any suspend point reports a stop request.
//!
//! - Sorting: [`bubble`], [`selection`], [`insertion`], [`merge`], [`quick`]
//! - Searching: [`linear`], [`binary`]
//!
//! [`catalog`] holds the static reference data shown next to the bars.

pub mod binary;
pub mod bubble;
pub mod catalog;
pub mod insertion;
pub mod linear;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::errors::EngineError;
use crate::engine::record::SearchOutcome;
use std::fmt;
use std::str::FromStr;

/// Sorting rearranges the array; searching looks for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Sorting,
    Searching,
}

/// The seven selectable algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 7] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
    ];

    /// Kebab-case identifier, as accepted on the command line
    pub fn slug(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
        }
    }

    pub fn name(self) -> &'static str {
        catalog::entry(self).name
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            AlgorithmId::LinearSearch | AlgorithmId::BinarySearch => AlgorithmKind::Searching,
            _ => AlgorithmKind::Sorting,
        }
    }

    pub fn is_search(self) -> bool {
        self.kind() == AlgorithmKind::Searching
    }

    /// Next algorithm in menu order (wraps around)
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order (wraps around)
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for AlgorithmId {
    fn default() -> Self {
        AlgorithmId::BubbleSort
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AlgorithmId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownAlgorithm(wanted.to_string()))
    }
}

/// Run the driver for `algorithm` over the emitter's working array.
///
/// Searching drivers require `target`; sorting drivers ignore it and always
/// return `Ok(None)`.
pub fn run(
    algorithm: AlgorithmId,
    steps: &mut StepEmitter,
    target: Option<i64>,
) -> Step<Option<SearchOutcome>> {
    match (algorithm, target) {
        (AlgorithmId::BubbleSort, _) => bubble::sort(steps).map(|()| None),
        (AlgorithmId::SelectionSort, _) => selection::sort(steps).map(|()| None),
        (AlgorithmId::InsertionSort, _) => insertion::sort(steps).map(|()| None),
        (AlgorithmId::MergeSort, _) => merge::sort(steps).map(|()| None),
        (AlgorithmId::QuickSort, _) => quick::sort(steps).map(|()| None),
        (AlgorithmId::LinearSearch, Some(target)) => linear::search(steps, target).map(Some),
        (AlgorithmId::BinarySearch, Some(target)) => binary::search(steps, target).map(Some),
        // The controller validates the target before a search run starts
        (AlgorithmId::LinearSearch | AlgorithmId::BinarySearch, None) => {
            Ok(Some(SearchOutcome::NotFound))
        }
    }
}

/// Parse a search value the forgiving way a browser number field does:
/// skip leading whitespace, take an optional sign and the leading digits,
/// ignore whatever follows.
pub fn parse_target(input: &str) -> Result<i64, EngineError> {
    let invalid = || EngineError::InvalidInput {
        input: input.to_string(),
    };

    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(invalid());
    }

    let magnitude: i64 = rest[..digits_end].parse().map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Shared by the search drivers: compare an element against an `i64` target
pub(crate) fn equals_target(value: u32, target: i64) -> bool {
    i64::from(value) == target
}
