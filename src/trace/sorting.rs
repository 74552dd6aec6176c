// Bubble sort trace generator
// One step per adjacent comparison, snapshot taken after any swap

use crate::trace::types::{AlgorithmKind, Step, StepAux, Trace, Value};

pub const PHASE_SORTING: u8 = 1;
pub const PHASE_RESULT: u8 = 2;

/// Generate the complete bubble-sort trace for an input array
///
/// Standard bubble sort with early exit: each pass bubbles the largest
/// remaining value to the end, and a pass with no swaps terminates the
/// run. The cursor points at the left element of the compared pair.
pub fn generate_sorting_trace(values: &[Value]) -> Trace {
    let mut trace = Trace::new(AlgorithmKind::BubbleSort);
    let mut working = values.to_vec();
    let mut swap_count: u32 = 0;

    trace.steps.push(Step {
        phase: PHASE_SORTING,
        snapshot: working.clone(),
        cursor: None,
        aux: StepAux::Boundary,
        description: "Phase 1: Bubbling larger values toward the end of the array.".to_string(),
    });

    let n = working.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped_this_pass = false;

        for i in 0..n - 1 - pass {
            let swapped = working[i] > working[i + 1];
            let description = if swapped {
                working.swap(i, i + 1);
                swap_count += 1;
                swapped_this_pass = true;
                format!(
                    "{} > {}. Swapping positions {} and {}.",
                    working[i + 1],
                    working[i],
                    i,
                    i + 1
                )
            } else {
                format!(
                    "{} <= {}. Already in order.",
                    working[i],
                    working[i + 1]
                )
            };

            trace.steps.push(Step {
                phase: PHASE_SORTING,
                snapshot: working.clone(),
                cursor: Some(i),
                aux: StepAux::Compare {
                    left: i,
                    right: i + 1,
                    swapped,
                },
                description,
            });
        }

        if !swapped_this_pass {
            break;
        }
    }

    trace.steps.push(Step {
        phase: PHASE_RESULT,
        snapshot: working,
        cursor: None,
        aux: StepAux::Sorted { swap_count },
        description: format!("Array is sorted after {} swaps.", swap_count),
    });

    trace
}
