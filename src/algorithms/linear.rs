// Linear search

use super::equals_target;
use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{SearchOutcome, StepRecord, StepRole};

/// Check every position in order and stop at the first match.
pub fn search(steps: &mut StepEmitter, target: i64) -> Step<SearchOutcome> {
    for i in 0..steps.len() {
        let value = steps.value(i);
        steps.emit(StepRecord::new(
            StepRole::Checked,
            vec![i],
            format!("Checking element at position {}: {}", i, value),
        ))?;

        if equals_target(value, target) {
            steps.emit(StepRecord::new(
                StepRole::Found,
                vec![i],
                format!("Found {} at position {}!", target, i),
            ))?;
            return Ok(SearchOutcome::Found(i));
        }
    }

    steps.emit(StepRecord::new(
        StepRole::NotFound,
        Vec::new(),
        format!("{} not found in the array", target),
    ))?;
    Ok(SearchOutcome::NotFound)
}
