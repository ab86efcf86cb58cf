// Integration tests for the searching drivers

mod common;

use common::{drive, drive_until_stopped, is_sorted, sorted_copy};
use proptest::prelude::*;
use sortty::algorithms::AlgorithmId;
use sortty::engine::{Halted, SearchOutcome, StepRole};

fn arrays() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(10u32..=60, 0..30)
}

proptest! {
    #[test]
    fn linear_search_finds_first_occurrence(array in arrays(), target in 0i64..=70) {
        let expected = array.iter().position(|&v| i64::from(v) == target);
        let trace = drive(AlgorithmId::LinearSearch, array.clone(), Some(target));

        match expected {
            Some(i) => {
                prop_assert_eq!(trace.outcome, Some(SearchOutcome::Found(i)));
                // One check per visited position, then the hit
                let checks = trace.records.iter().filter(|r| r.role == StepRole::Checked).count();
                prop_assert_eq!(checks, i + 1);
                let last = trace.records.last().expect("found emits a record");
                prop_assert_eq!(last.role, StepRole::Found);
                prop_assert_eq!(&last.indices, &vec![i]);
            }
            None => {
                prop_assert_eq!(trace.outcome, Some(SearchOutcome::NotFound));
                prop_assert_eq!(trace.records.len(), array.len() + 1);
                let last = trace.records.last().expect("not found emits a record");
                prop_assert_eq!(last.role, StepRole::NotFound);
                prop_assert!(last.indices.is_empty());
            }
        }

        // Linear search never reorders the array
        prop_assert_eq!(trace.array, array);
    }

    #[test]
    fn binary_search_reports_positions_in_the_sorted_array(
        array in arrays(),
        target in 0i64..=70,
    ) {
        let trace = drive(AlgorithmId::BinarySearch, array.clone(), Some(target));

        prop_assert!(is_sorted(&trace.array));
        prop_assert_eq!(&trace.array, &sorted_copy(&array));

        let present = array.iter().any(|&v| i64::from(v) == target);
        match trace.outcome {
            Some(SearchOutcome::Found(i)) => {
                prop_assert!(present);
                prop_assert_eq!(i64::from(trace.array[i]), target);
            }
            Some(SearchOutcome::NotFound) => prop_assert!(!present),
            None => prop_assert!(false, "search returned no outcome"),
        }
    }

    #[test]
    fn binary_search_window_always_contains_mid(array in arrays(), target in 0i64..=70) {
        let trace = drive(AlgorithmId::BinarySearch, array, Some(target));
        for record in trace.records.iter().filter(|r| r.role == StepRole::Comparing) {
            let (low, mid, high) = (record.indices[0], record.indices[1], record.indices[2]);
            prop_assert!(low <= mid && mid <= high);
        }
    }
}

#[test]
fn test_binary_search_starts_with_presort() {
    let trace = drive(AlgorithmId::BinarySearch, vec![50, 20, 40, 10], Some(40));
    let first = &trace.records[0];
    assert_eq!(first.role, StepRole::Sorted);
    assert!(first.indices.is_empty());
    assert_eq!(first.message, "Array sorted for Binary Search");
    assert_eq!(first.array_snapshot, Some(vec![10, 20, 40, 50]));
    assert_eq!(trace.outcome, Some(SearchOutcome::Found(2)));
}

#[test]
fn test_binary_search_direction_messages() {
    let trace = drive(AlgorithmId::BinarySearch, vec![10, 20, 30, 40, 50], Some(45));
    let checks: Vec<&str> = trace
        .records
        .iter()
        .filter(|r| r.role == StepRole::Checked)
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(
        checks,
        vec![
            "30 < 45, searching right half",
            "40 < 45, searching right half",
            "50 > 45, searching left half",
        ]
    );
    assert_eq!(trace.outcome, Some(SearchOutcome::NotFound));
    assert_eq!(
        trace.records.last().map(|r| r.message.as_str()),
        Some("45 not found in the array")
    );
}

#[test]
fn test_searching_an_empty_array() {
    for algorithm in [AlgorithmId::LinearSearch, AlgorithmId::BinarySearch] {
        let trace = drive(algorithm, Vec::new(), Some(7));
        assert_eq!(trace.outcome, Some(SearchOutcome::NotFound));
        assert_eq!(trace.records.last().map(|r| r.role), Some(StepRole::NotFound));
    }
}

#[test]
fn test_negative_target_is_never_found() {
    let trace = drive(AlgorithmId::LinearSearch, vec![10, 11, 12], Some(-10));
    assert_eq!(trace.outcome, Some(SearchOutcome::NotFound));
    assert_eq!(trace.records.len(), 4);
}

#[test]
fn test_linear_search_messages() {
    let trace = drive(AlgorithmId::LinearSearch, vec![15, 25], Some(25));
    let messages: Vec<&str> = trace.records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Checking element at position 0: 15",
            "Checking element at position 1: 25",
            "Found 25 at position 1!",
        ]
    );
}

#[test]
fn test_binary_search_stopped_before_presort_keeps_board() {
    let original = vec![50, 20, 40, 10];
    let halt = drive_until_stopped(AlgorithmId::BinarySearch, original.clone(), Some(40), 0);
    assert_eq!(halt.result, Err(Halted));
    assert!(halt.records.is_empty());
    assert_eq!(halt.board, original);
}

#[test]
fn test_binary_search_stopped_after_presort_keeps_sorted_board() {
    let halt = drive_until_stopped(AlgorithmId::BinarySearch, vec![50, 20, 40, 10], Some(40), 1);
    assert_eq!(halt.result, Err(Halted));
    assert_eq!(halt.records.len(), 1);
    assert_eq!(halt.records[0].role, StepRole::Sorted);
    assert_eq!(halt.board, vec![10, 20, 40, 50]);
}
