// Binary search over a sorted copy of the array

use super::equals_target;
use crate::engine::cancel::Step;
use crate::engine::constants::PRESORT_PAUSE_MS;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{SearchOutcome, StepRecord, StepRole};
use std::time::Duration;

/// Replace the array with its sorted copy (as a visible step), then halve the
/// interval `[low, high]` until the target is found or the interval is empty.
pub fn search(steps: &mut StepEmitter, target: i64) -> Step<SearchOutcome> {
    steps.sort_in_place();
    steps.emit_for(
        StepRecord::sorted(Vec::new(), "Array sorted for Binary Search"),
        Duration::from_millis(PRESORT_PAUSE_MS),
    )?;

    // Signed so `high` can drop below `low` when the search runs off the left end
    let mut low: isize = 0;
    let mut high: isize = steps.len() as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let (lo, mi, hi) = (low as usize, mid as usize, high as usize);
        let value = steps.value(mi);

        steps.emit(StepRecord::comparing(
            vec![lo, mi, hi],
            format!("Checking middle element at position {}: {}", mi, value),
        ))?;

        if equals_target(value, target) {
            steps.emit(StepRecord::new(
                StepRole::Found,
                vec![mi],
                format!("Found {} at position {}!", target, mi),
            ))?;
            return Ok(SearchOutcome::Found(mi));
        }

        let message = if i64::from(value) < target {
            low = mid + 1;
            format!("{} < {}, searching right half", value, target)
        } else {
            high = mid - 1;
            format!("{} > {}, searching left half", value, target)
        };
        steps.emit(StepRecord::new(StepRole::Checked, vec![mi], message))?;
    }

    steps.emit(StepRecord::new(
        StepRole::NotFound,
        Vec::new(),
        format!("{} not found in the array", target),
    ))?;
    Ok(SearchOutcome::NotFound)
}
