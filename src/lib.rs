// Algolens - Algorithm Visualizer Trace Engine
// Module declarations

pub mod input;
pub mod listings;
pub mod playback;
pub mod session;
pub mod trace;

pub use playback::{PlaybackController, PlaybackDriver, PlaybackStatus};
pub use session::{PlaybackFrame, SessionRegistry, SessionSummary};
pub use trace::{AlgorithmKind, StackOp, Step, StepAux, Trace, Value};
