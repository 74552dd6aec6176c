// Boyer-Moore majority voting trace generator
// Re-expresses the O(n)/O(1) voting algorithm as an ordered step list

use crate::trace::types::{AlgorithmKind, Step, StepAux, Trace, Value};

/// Phase tags for the majority-vote trace
pub const PHASE_CANDIDATE: u8 = 1;
pub const PHASE_VERIFY: u8 = 2;
pub const PHASE_RESULT: u8 = 3;

/// Generate the complete majority-vote trace for an input array
///
/// Algorithm:
/// 1. Candidate search: count 0 picks a new candidate; a match increments
///    the count, a mismatch cancels one vote
/// 2. Verification: count actual occurrences of the final candidate
/// 3. Result: strict majority test (occurrences > n/2)
///
/// The trace always contains `2 * n + 3` steps: a boundary step per phase
/// transition, one step per element in phases 1 and 2, and one result
/// step. Empty input still produces both boundaries and a negative
/// result.
pub fn generate_majority_trace(values: &[Value]) -> Trace {
    let mut trace = Trace::new(AlgorithmKind::MajorityVote);

    let mut candidate: Option<Value> = None;
    let mut count: u32 = 0;

    trace.steps.push(Step {
        phase: PHASE_CANDIDATE,
        snapshot: values.to_vec(),
        cursor: None,
        aux: StepAux::Vote { candidate, count },
        description: "Phase 1: Finding a potential candidate using the voting mechanism."
            .to_string(),
    });

    for (i, &num) in values.iter().enumerate() {
        let description = if count == 0 {
            candidate = Some(num);
            count = 1;
            format!("Count is 0. New candidate picked: {}.", num)
        } else if candidate == Some(num) {
            count += 1;
            format!("{} matches candidate. Count increments to {}.", num, count)
        } else {
            count -= 1;
            format!(
                "{} differs from candidate. One 'vote' canceled. Count: {}.",
                num, count
            )
        };

        trace.steps.push(Step {
            phase: PHASE_CANDIDATE,
            snapshot: values.to_vec(),
            cursor: Some(i),
            aux: StepAux::Vote { candidate, count },
            description,
        });
    }

    let final_candidate = candidate;
    let mut occurrences: u32 = 0;

    let verify_intro = match final_candidate {
        Some(c) => format!("Phase 2: Verifying if {} is truly the majority (> N/2).", c),
        None => "Phase 2: No candidate emerged; verification will find nothing.".to_string(),
    };

    trace.steps.push(Step {
        phase: PHASE_VERIFY,
        snapshot: values.to_vec(),
        cursor: None,
        aux: StepAux::Verify {
            candidate: final_candidate,
            occurrences,
        },
        description: verify_intro,
    });

    for (i, &num) in values.iter().enumerate() {
        let is_match = final_candidate == Some(num);
        if is_match {
            occurrences += 1;
        }

        let description = if is_match {
            format!(
                "Found candidate {}. Total occurrences: {}.",
                num, occurrences
            )
        } else {
            format!("Skipping {}. Does not match candidate.", num)
        };

        trace.steps.push(Step {
            phase: PHASE_VERIFY,
            snapshot: values.to_vec(),
            cursor: Some(i),
            aux: StepAux::Verify {
                candidate: final_candidate,
                occurrences,
            },
            description,
        });
    }

    // Strict majority: occurrences must exceed half the input length
    let majority = (occurrences as usize) * 2 > values.len();

    let description = match (final_candidate, majority) {
        (Some(c), true) => format!(
            "Success! {} appeared {} times (> {}).",
            c,
            occurrences,
            values.len() / 2
        ),
        (Some(c), false) => format!("Failed. {} is not a majority element.", c),
        (None, _) => "Failed. No majority element exists.".to_string(),
    };

    trace.steps.push(Step {
        phase: PHASE_RESULT,
        snapshot: values.to_vec(),
        cursor: None,
        aux: StepAux::Outcome {
            candidate: final_candidate,
            occurrences,
            majority,
        },
        description,
    });

    trace
}
