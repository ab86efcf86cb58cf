// Selection sort

use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{StepRecord, StepRole};

/// For each position, scan the unsorted suffix for its minimum and swap it in.
pub fn sort(steps: &mut StepEmitter) -> Step {
    let n = steps.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        for j in i + 1..n {
            steps.emit(StepRecord::comparing(
                vec![min_idx, j],
                format!(
                    "Finding minimum element from position {}: comparing {} with {}",
                    i, min_idx, j
                ),
            ))?;

            if steps.value(j) < steps.value(min_idx) {
                min_idx = j;
            }
        }

        // Only move when the minimum is somewhere else
        if min_idx != i {
            steps.swap(i, min_idx);
            steps.emit(StepRecord::new(
                StepRole::Swapped,
                vec![i, min_idx],
                format!("Swapped minimum element to position {}", i),
            ))?;
        }

        steps.emit(StepRecord::sorted(
            vec![i],
            format!("Position {} is in its final place", i),
        ))?;
    }

    if n > 0 {
        steps.emit(StepRecord::sorted(
            vec![n - 1],
            format!("Position {} is in its final place", n - 1),
        ))?;
    }
    Ok(())
}
