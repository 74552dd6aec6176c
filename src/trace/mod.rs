// Trace generation module
// Pure generators that turn an algorithm run into an ordered step list

pub mod export;
pub mod majority;
pub mod sorting;
pub mod stack;
pub mod types;

pub use export::{read_trace_file, TraceExportError, TraceWriter};
pub use majority::generate_majority_trace;
pub use sorting::generate_sorting_trace;
pub use stack::{generate_stack_trace, StackTraceConfig};
pub use types::{AlgorithmKind, StackOp, StackOutcome, Step, StepAux, Trace, Value};
