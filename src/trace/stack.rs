// Bounded stack trace generator
// Narrates every attempted push/pop, including refused ones

use serde::{Deserialize, Serialize};

use crate::trace::types::{AlgorithmKind, StackOp, StackOutcome, Step, StepAux, Trace, Value};

/// All stack steps share a single phase
pub const PHASE_OPERATIONS: u8 = 1;

/// Configuration for stack trace generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackTraceConfig {
    /// Maximum number of elements the stack will accept
    pub capacity: usize,
}

impl Default for StackTraceConfig {
    fn default() -> Self {
        StackTraceConfig { capacity: 10 }
    }
}

/// Generate one step per requested operation
///
/// A pop on an empty stack records an underflow step and a push at
/// capacity records an overflow step; both leave the stack unchanged.
/// The snapshot in each step is the stack state after the operation,
/// bottom first.
pub fn generate_stack_trace(ops: &[StackOp], config: &StackTraceConfig) -> Trace {
    let mut trace = Trace::new(AlgorithmKind::StackOps);
    let mut stack: Vec<Value> = Vec::new();

    for &op in ops {
        let (outcome, description) = match op {
            StackOp::Push { value } => {
                if stack.len() >= config.capacity {
                    (
                        StackOutcome::Overflow,
                        "Stack Overflow! Maximum size reached.".to_string(),
                    )
                } else {
                    stack.push(value);
                    (
                        StackOutcome::Pushed { value },
                        format!("Pushed {}.", value),
                    )
                }
            }
            StackOp::Pop => match stack.pop() {
                Some(value) => (
                    StackOutcome::Popped { value },
                    format!("Popped {}.", value),
                ),
                None => (
                    StackOutcome::Underflow,
                    "Stack Underflow! Stack is empty.".to_string(),
                ),
            },
        };

        // Cursor tracks the stack top in the post-operation snapshot
        let cursor = stack.len().checked_sub(1);

        trace.steps.push(Step {
            phase: PHASE_OPERATIONS,
            snapshot: stack.clone(),
            cursor,
            aux: StepAux::StackOp { op, outcome },
            description,
        });
    }

    trace
}
