// Trace data model
// Defines steps, algorithm-specific step payloads, and the trace container

use serde::{Deserialize, Serialize};

/// Element type animated by the visualizer
/// The generators only compare and order values; everything else is opaque
pub type Value = i64;

/// Supported algorithms
/// One trace generator exists per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Boyer-Moore majority voting over an integer array
    MajorityVote,

    /// Bounded stack driven by a push/pop operation sequence
    StackOps,

    /// Bubble sort with per-comparison steps
    BubbleSort,
}

impl AlgorithmKind {
    /// Convert from string representation (for serialization)
    /// Accepts both PascalCase and snake_case for backwards compatibility
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "MajorityVote" | "majority_vote" | "majority" => Some(AlgorithmKind::MajorityVote),
            "StackOps" | "stack_ops" | "stack" => Some(AlgorithmKind::StackOps),
            "BubbleSort" | "bubble_sort" | "sort" => Some(AlgorithmKind::BubbleSort),
            _ => None,
        }
    }

    /// Convert to string representation (PascalCase for TypeScript compatibility)
    pub fn to_string(&self) -> &'static str {
        match self {
            AlgorithmKind::MajorityVote => "MajorityVote",
            AlgorithmKind::StackOps => "StackOps",
            AlgorithmKind::BubbleSort => "BubbleSort",
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmKind::MajorityVote => "Boyer-Moore Voting",
            AlgorithmKind::StackOps => "Stack Push/Pop",
            AlgorithmKind::BubbleSort => "Bubble Sort",
        }
    }
}

/// A single stack operation requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StackOp {
    Push { value: Value },
    Pop,
}

/// What actually happened when a stack operation was applied
/// Failed operations are recorded here, never raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StackOutcome {
    /// Value accepted onto the stack
    Pushed { value: Value },

    /// Top value removed from the stack
    Popped { value: Value },

    /// Push refused: the stack was already at capacity
    Overflow,

    /// Pop refused: the stack was empty
    Underflow,
}

impl StackOutcome {
    /// True for overflow/underflow outcomes
    pub fn is_fault(&self) -> bool {
        matches!(self, StackOutcome::Overflow | StackOutcome::Underflow)
    }
}

/// Algorithm-specific scalars needed to render a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepAux {
    /// Phase boundary marker carrying no scalars
    Boundary,

    /// Majority-vote candidate search state
    Vote {
        candidate: Option<Value>,
        count: u32,
    },

    /// Majority-vote verification state
    /// `occurrences` is the running count of candidate sightings
    Verify {
        candidate: Option<Value>,
        occurrences: u32,
    },

    /// Majority-vote final result
    Outcome {
        candidate: Option<Value>,
        occurrences: u32,
        majority: bool,
    },

    /// One applied (or refused) stack operation
    StackOp {
        op: StackOp,
        outcome: StackOutcome,
    },

    /// One adjacent comparison of a sorting pass
    Compare {
        left: usize,
        right: usize,
        swapped: bool,
    },

    /// Sorting finished
    Sorted { swap_count: u32 },
}

/// One immutable snapshot of algorithm progress
///
/// Steps are fully self-describing: the snapshot is an owned copy of the
/// data structure at that instant, so every step can be inspected after
/// the run without chasing shared mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Ordered stage tag (1-based) partitioning the trace into phases
    pub phase: u8,

    /// Full data-structure state at this instant (owned copy)
    pub snapshot: Vec<Value>,

    /// Index into the snapshot currently being examined
    /// None marks phase boundaries and result steps
    pub cursor: Option<usize>,

    /// Algorithm-specific scalars for this step
    pub aux: StepAux,

    /// Human-readable explanation of what just happened
    pub description: String,
}

/// The complete ordered step list for one algorithm run
///
/// Append-only during generation; never mutated once returned. For a
/// given input the trace is fully deterministic, descriptions included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub algorithm: AlgorithmKind,
    pub steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace for an algorithm
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Trace {
            algorithm,
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Last step of the trace (the terminal state of the run)
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_kind_round_trip() {
        for kind in [
            AlgorithmKind::MajorityVote,
            AlgorithmKind::StackOps,
            AlgorithmKind::BubbleSort,
        ] {
            assert_eq!(AlgorithmKind::from_string(kind.to_string()), Some(kind));
        }

        assert_eq!(AlgorithmKind::from_string("majority"), Some(AlgorithmKind::MajorityVote));
        assert_eq!(AlgorithmKind::from_string("unknown"), None);
    }

    #[test]
    fn test_stack_outcome_faults() {
        assert!(StackOutcome::Overflow.is_fault());
        assert!(StackOutcome::Underflow.is_fault());
        assert!(!StackOutcome::Pushed { value: 1 }.is_fault());
        assert!(!StackOutcome::Popped { value: 1 }.is_fault());
    }

    #[test]
    fn test_trace_accessors() {
        let mut trace = Trace::new(AlgorithmKind::MajorityVote);
        assert!(trace.is_empty());
        assert!(trace.get(0).is_none());

        trace.steps.push(Step {
            phase: 1,
            snapshot: vec![1, 2],
            cursor: None,
            aux: StepAux::Boundary,
            description: "start".to_string(),
        });

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.get(0), trace.last());
    }

    #[test]
    fn test_step_serialization_shape() {
        let step = Step {
            phase: 1,
            snapshot: vec![2, 2, 1],
            cursor: Some(0),
            aux: StepAux::Vote {
                candidate: Some(2),
                count: 1,
            },
            description: "Count is 0. New candidate picked: 2.".to_string(),
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["aux"]["kind"], "vote");
        assert_eq!(json["aux"]["candidate"], 2);
        assert_eq!(json["cursor"], 0);

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }
}
