// Merge sort

use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{StepRecord, StepRole};

/// Top-down merge sort. Indices are marked sorted once, after the outermost
/// call returns.
pub fn sort(steps: &mut StepEmitter) -> Step {
    let n = steps.len();
    if n > 0 {
        sort_range(steps, 0, n - 1)?;
    }

    steps.emit(StepRecord::sorted(
        (0..n).collect::<Vec<_>>(),
        "Merge sort complete",
    ))
}

fn sort_range(steps: &mut StepEmitter, left: usize, right: usize) -> Step {
    steps.checkpoint()?;

    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(steps, left, mid)?;
        sort_range(steps, mid + 1, right)?;
        merge(steps, left, mid, right)?;
    }
    Ok(())
}

/// Merge `[left, mid]` and `[mid + 1, right]`; ties take from the left run
fn merge(steps: &mut StepEmitter, left: usize, mid: usize, right: usize) -> Step {
    let left_run = steps.slots(left..=mid);
    let right_run = steps.slots(mid + 1..=right);

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        steps.emit(StepRecord::comparing(
            vec![left + i, mid + 1 + j],
            "Merging subarrays: comparing elements",
        ))?;

        if left_run[i].value <= right_run[j].value {
            steps.set(k, left_run[i]);
            i += 1;
        } else {
            steps.set(k, right_run[j]);
            j += 1;
        }
        k += 1;
    }

    for slot in left_run[i..].iter().chain(&right_run[j..]) {
        steps.set(k, *slot);
        steps.emit(StepRecord::new(
            StepRole::Merged,
            vec![k],
            format!("Copying remaining element {} to position {}", slot.value, k),
        ))?;
        k += 1;
    }
    Ok(())
}
