// Bubble sort

use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{StepRecord, StepRole};

/// Adjacent compare-and-swap passes; each pass settles the largest remaining
/// element at the end of the unsorted prefix.
pub fn sort(steps: &mut StepEmitter) -> Step {
    let n = steps.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            steps.emit(StepRecord::comparing(
                vec![j, j + 1],
                format!("Comparing elements at positions {} and {}", j, j + 1),
            ))?;

            if steps.value(j) > steps.value(j + 1) {
                steps.swap(j, j + 1);
                steps.emit(StepRecord::new(
                    StepRole::Swapped,
                    vec![j, j + 1],
                    format!("Swapped elements at positions {} and {}", j, j + 1),
                ))?;
            }
        }

        let settled = n - i - 1;
        steps.emit(StepRecord::sorted(
            vec![settled],
            format!("Position {} is in its final place", settled),
        ))?;
    }

    if n > 0 {
        steps.emit(StepRecord::sorted(vec![0], "Position 0 is in its final place"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::drive;
    use crate::algorithms::AlgorithmId;
    use crate::engine::record::StepRole;

    #[test]
    fn test_three_elements_reversed() {
        let trace = drive(AlgorithmId::BubbleSort, vec![5, 3, 1], None);
        assert_eq!(trace.array, vec![1, 3, 5]);

        let roles: Vec<(StepRole, Vec<usize>)> = trace
            .records
            .iter()
            .map(|r| (r.role, r.indices.clone()))
            .collect();
        assert_eq!(
            roles,
            vec![
                (StepRole::Comparing, vec![0, 1]),
                (StepRole::Swapped, vec![0, 1]),
                (StepRole::Comparing, vec![1, 2]),
                (StepRole::Swapped, vec![1, 2]),
                (StepRole::Sorted, vec![2]),
                (StepRole::Comparing, vec![0, 1]),
                (StepRole::Swapped, vec![0, 1]),
                (StepRole::Sorted, vec![1]),
                (StepRole::Sorted, vec![0]),
            ]
        );
    }

    #[test]
    fn test_single_element_only_marks_zero() {
        let trace = drive(AlgorithmId::BubbleSort, vec![7], None);
        assert_eq!(trace.records.len(), 1);
        assert_eq!(trace.records[0].role, StepRole::Sorted);
        assert_eq!(trace.records[0].indices, vec![0]);
    }

    #[test]
    fn test_empty_emits_nothing() {
        let trace = drive(AlgorithmId::BubbleSort, Vec::new(), None);
        assert!(trace.records.is_empty());
    }
}
