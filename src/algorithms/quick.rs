// Quick sort (Lomuto partition)

use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{StepRecord, StepRole};

/// Quick sort with the last element of each range as pivot. Nothing is marked
/// sorted unless the whole recursion completes.
pub fn sort(steps: &mut StepEmitter) -> Step {
    let n = steps.len();
    if n > 1 {
        sort_range(steps, 0, n - 1)?;
    }

    steps.emit(StepRecord::sorted(
        (0..n).collect::<Vec<_>>(),
        "Quick sort complete",
    ))
}

fn sort_range(steps: &mut StepEmitter, low: usize, high: usize) -> Step {
    steps.checkpoint()?;

    if low < high {
        let pivot_index = partition(steps, low, high)?;
        if pivot_index > low {
            sort_range(steps, low, pivot_index - 1)?;
        }
        sort_range(steps, pivot_index + 1, high)?;
    }
    Ok(())
}

fn partition(steps: &mut StepEmitter, low: usize, high: usize) -> Step<usize> {
    let pivot = steps.value(high);

    steps.emit(StepRecord::new(
        StepRole::Partitioned,
        vec![low, high],
        format!("Partitioning around pivot: {}", pivot),
    ))?;

    // Next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        steps.emit(StepRecord::comparing(
            vec![j, high],
            format!("Comparing element at position {} with pivot {}", j, pivot),
        ))?;

        if steps.value(j) < pivot {
            steps.swap(store, j);
            let moved = steps.value(store);
            steps.emit(StepRecord::new(
                StepRole::Swapped,
                vec![store, j],
                format!("Moved {} before the pivot", moved),
            ))?;
            store += 1;
        }
    }

    steps.swap(store, high);
    steps.emit(StepRecord::new(
        StepRole::Partitioned,
        vec![store],
        format!("Placed pivot {} at position {}", pivot, store),
    ))?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::super::testing::drive;
    use crate::algorithms::AlgorithmId;
    use crate::engine::record::StepRole;

    #[test]
    fn test_compares_every_element_against_pivot() {
        let trace = drive(AlgorithmId::QuickSort, vec![3, 1, 2], None);
        let first_comparisons: Vec<Vec<usize>> = trace
            .records
            .iter()
            .filter(|r| r.role == StepRole::Comparing)
            .take(2)
            .map(|r| r.indices.clone())
            .collect();
        assert_eq!(first_comparisons, vec![vec![0, 2], vec![1, 2]]);
        assert_eq!(trace.array, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicates_and_sorted_input() {
        assert_eq!(
            drive(AlgorithmId::QuickSort, vec![5, 5, 5, 1], None).array,
            vec![1, 5, 5, 5]
        );
        assert_eq!(
            drive(AlgorithmId::QuickSort, vec![1, 2, 3, 4, 5], None).array,
            vec![1, 2, 3, 4, 5]
        );
    }
}
