// Insertion sort

use crate::engine::cancel::Step;
use crate::engine::emitter::StepEmitter;
use crate::engine::record::{StepRecord, StepRole};

/// Grow a sorted prefix one element at a time, shifting larger elements right.
pub fn sort(steps: &mut StepEmitter) -> Step {
    let n = steps.len();
    if n == 0 {
        return Ok(());
    }

    steps.emit(StepRecord::sorted(
        vec![0],
        "Position 0 starts the sorted portion",
    ))?;

    for i in 1..n {
        let key = steps.slot(i);
        let mut j = i;

        // `j` is the hole the key would drop into
        while j > 0 && steps.value(j - 1) > key.value {
            steps.emit(StepRecord::comparing(
                vec![j - 1, j],
                format!(
                    "Inserting element {} into sorted portion: shifting position {}",
                    key.value,
                    j - 1
                ),
            ))?;

            let shifted = steps.slot(j - 1);
            steps.set(j, shifted);
            j -= 1;
        }

        steps.set(j, key);
        steps.emit(StepRecord::new(
            StepRole::Inserted,
            vec![j],
            format!("Inserted element {} at position {}", key.value, j),
        ))?;
        steps.emit(StepRecord::sorted(
            vec![i],
            format!("Positions 0 to {} are sorted", i),
        ))?;
    }
    Ok(())
}
