// Playback module
// Timed, pausable replay of generated traces

pub mod controller;
pub mod driver;

pub use controller::{PlaybackController, PlaybackStatus, DEFAULT_INTERVAL};
pub use driver::PlaybackDriver;
