// Playback controller
// Replays a generated trace one step at a time under external control

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::trace::types::{Step, Trace};

/// Default tick interval, matching the visualizer's default speed slider
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(600);

/// Playback status for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

impl PlaybackStatus {
    pub fn to_string(&self) -> String {
        match self {
            PlaybackStatus::Idle => "idle".to_string(),
            PlaybackStatus::Running => "running".to_string(),
            PlaybackStatus::Paused => "paused".to_string(),
            PlaybackStatus::Completed => "completed".to_string(),
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "idle" => PlaybackStatus::Idle,
            "running" => PlaybackStatus::Running,
            "paused" => PlaybackStatus::Paused,
            "completed" => PlaybackStatus::Completed,
            _ => PlaybackStatus::Idle,
        }
    }
}

/// Timed replay state machine over an immutable trace
///
/// The controller never fails: control calls from the wrong state are
/// ignored, matching what a UI-driven consumer expects from repeated
/// button presses. Only `tick` advances the position, and only while
/// `Running`; once the final step is reached the session completes and
/// that step stays current until `reset`.
#[derive(Debug)]
pub struct PlaybackController {
    trace: Option<Arc<Trace>>,
    /// Index of the current step; None before the first step is shown
    position: Option<usize>,
    status: PlaybackStatus,
    interval: Duration,
}

impl Default for PlaybackController {
    fn default() -> Self {
        PlaybackController::new(DEFAULT_INTERVAL)
    }
}

impl PlaybackController {
    pub fn new(interval: Duration) -> Self {
        PlaybackController {
            trace: None,
            position: None,
            status: PlaybackStatus::Idle,
            // A zero period would make the tick loop spin
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Attach a trace and begin playback at its first step
    ///
    /// An empty trace is legal and completes immediately with no active
    /// step. Starting over an existing session replaces it.
    pub fn start(&mut self, trace: Arc<Trace>) {
        if trace.is_empty() {
            self.trace = Some(trace);
            self.position = None;
            self.status = PlaybackStatus::Completed;
            return;
        }

        self.trace = Some(trace);
        self.position = Some(0);
        self.status = PlaybackStatus::Running;
    }

    /// Advance one step; only meaningful while `Running`
    ///
    /// Returns true if the position moved. The final step is never
    /// advanced past: the tick that would pass it sets `Completed`
    /// instead, and the step stays current.
    pub fn tick(&mut self) -> bool {
        if self.status != PlaybackStatus::Running {
            return false;
        }

        let len = self.trace.as_ref().map(|t| t.len()).unwrap_or(0);
        let current = match self.position {
            Some(p) => p,
            None => return false,
        };

        if current + 1 < len {
            self.position = Some(current + 1);
            true
        } else {
            self.status = PlaybackStatus::Completed;
            false
        }
    }

    /// Suspend ticking, retaining the current position
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Running {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Resume ticking from the retained position
    pub fn resume(&mut self) {
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Running;
        }
    }

    /// Jump to an arbitrary step, clamping into range
    ///
    /// Legal whenever a non-empty trace is attached; ignored otherwise.
    /// Seeking keeps the run/pause state, except that reopening a
    /// completed session lands in `Paused` so the consumer decides when
    /// to resume.
    pub fn seek(&mut self, index: usize) {
        let len = match self.trace.as_ref() {
            Some(trace) if !trace.is_empty() => trace.len(),
            _ => return,
        };

        let clamped = index.min(len - 1);
        self.position = Some(clamped);
        if self.status == PlaybackStatus::Completed && clamped + 1 < len {
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Drop the trace and return to `Idle`
    pub fn reset(&mut self) {
        self.trace = None;
        self.position = None;
        self.status = PlaybackStatus::Idle;
    }

    /// Change the tick interval; affects only future ticks
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// The step currently on display, if any
    pub fn current_step(&self) -> Option<&Step> {
        let trace = self.trace.as_ref()?;
        trace.get(self.position?)
    }

    /// The attached trace, if any
    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    /// Fraction of steps consumed, for progress displays
    pub fn progress(&self) -> f32 {
        let len = self.trace.as_ref().map(|t| t.len()).unwrap_or(0);
        if len == 0 {
            return 0.0;
        }
        match self.position {
            Some(p) => (p + 1) as f32 / len as f32,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::majority::generate_majority_trace;
    use crate::trace::types::AlgorithmKind;

    fn five_step_trace() -> Arc<Trace> {
        // [1] produces exactly 5 steps: two boundaries, two element
        // steps, one result
        Arc::new(generate_majority_trace(&[1]))
    }

    fn assert_invariant(controller: &PlaybackController) {
        let len = controller.trace().map(|t| t.len()).unwrap_or(0);
        if let Some(p) = controller.position() {
            assert!(p < len.max(1));
        }
        if controller.status() == PlaybackStatus::Completed {
            if len == 0 {
                assert_eq!(controller.position(), None);
            } else {
                assert_eq!(controller.position(), Some(len - 1));
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = PlaybackController::default();
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.position(), None);
        assert!(controller.current_step().is_none());
        assert_eq!(controller.interval(), DEFAULT_INTERVAL);
    }

    #[test]
    fn test_start_activates_first_step() {
        let mut controller = PlaybackController::default();
        controller.start(five_step_trace());

        assert_eq!(controller.status(), PlaybackStatus::Running);
        assert_eq!(controller.position(), Some(0));
        assert!(controller.current_step().is_some());
        assert_invariant(&controller);
    }

    #[test]
    fn test_ticks_advance_and_complete() {
        let mut controller = PlaybackController::default();
        let trace = five_step_trace();
        controller.start(trace.clone());

        for expected in 1..trace.len() {
            assert!(controller.tick());
            assert_eq!(controller.position(), Some(expected));
            assert_eq!(controller.status(), PlaybackStatus::Running);
            assert_invariant(&controller);
        }

        // The tick that would pass the final step completes instead
        assert!(!controller.tick());
        assert_eq!(controller.status(), PlaybackStatus::Completed);

        // The final step stays current indefinitely
        assert!(!controller.tick());
        assert_eq!(controller.position(), Some(trace.len() - 1));
        assert_eq!(controller.current_step(), trace.last());
        assert_invariant(&controller);
    }

    #[test]
    fn test_pause_retains_position() {
        let mut controller = PlaybackController::default();
        controller.start(five_step_trace());

        controller.tick();
        assert_eq!(controller.position(), Some(1));

        controller.pause();
        assert_eq!(controller.status(), PlaybackStatus::Paused);

        // Ticks while paused are ignored
        for _ in 0..5 {
            assert!(!controller.tick());
        }
        assert_eq!(controller.position(), Some(1));

        controller.resume();
        assert_eq!(controller.status(), PlaybackStatus::Running);
        controller.tick();
        assert_eq!(controller.position(), Some(2));
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut controller = PlaybackController::default();

        // Nothing attached yet
        controller.pause();
        controller.resume();
        assert!(!controller.tick());
        assert_eq!(controller.status(), PlaybackStatus::Idle);

        controller.start(five_step_trace());
        controller.resume(); // not paused
        assert_eq!(controller.status(), PlaybackStatus::Running);

        controller.pause();
        controller.pause(); // already paused
        assert_eq!(controller.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut controller = PlaybackController::default();
        controller.start(five_step_trace());
        controller.tick();
        controller.pause();

        controller.reset();
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.position(), None);
        assert!(controller.trace().is_none());
        assert!(controller.current_step().is_none());
        assert_invariant(&controller);
    }

    #[test]
    fn test_seek_clamps_and_reopens() {
        let mut controller = PlaybackController::default();

        // No trace attached: ignored
        controller.seek(3);
        assert_eq!(controller.position(), None);

        let trace = five_step_trace();
        controller.start(trace.clone());

        controller.seek(3);
        assert_eq!(controller.position(), Some(3));
        assert_eq!(controller.status(), PlaybackStatus::Running);

        // Out of range clamps to the final step
        controller.seek(99);
        assert_eq!(controller.position(), Some(trace.len() - 1));

        // Rewinding a completed session parks it paused
        while controller.tick() {}
        assert_eq!(controller.status(), PlaybackStatus::Completed);
        controller.seek(0);
        assert_eq!(controller.position(), Some(0));
        assert_eq!(controller.status(), PlaybackStatus::Paused);

        controller.resume();
        controller.tick();
        assert_eq!(controller.position(), Some(1));
    }

    #[test]
    fn test_empty_trace_completes_immediately() {
        let mut controller = PlaybackController::default();
        controller.start(Arc::new(Trace::new(AlgorithmKind::StackOps)));

        assert_eq!(controller.status(), PlaybackStatus::Completed);
        assert_eq!(controller.position(), None);
        assert!(controller.current_step().is_none());
        assert!(!controller.tick());
        assert_invariant(&controller);
    }

    #[test]
    fn test_set_interval_any_time() {
        let mut controller = PlaybackController::default();
        controller.set_interval(Duration::from_millis(50));
        assert_eq!(controller.interval(), Duration::from_millis(50));

        controller.start(five_step_trace());
        controller.set_interval(Duration::from_millis(1500));
        assert_eq!(controller.interval(), Duration::from_millis(1500));

        // Zero is clamped rather than accepted
        controller.set_interval(Duration::ZERO);
        assert_eq!(controller.interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_restart_replaces_session() {
        let mut controller = PlaybackController::default();
        controller.start(five_step_trace());
        controller.tick();
        controller.tick();

        controller.start(Arc::new(generate_majority_trace(&[3, 3, 3])));
        assert_eq!(controller.position(), Some(0));
        assert_eq!(controller.status(), PlaybackStatus::Running);
        assert_eq!(controller.trace().unwrap().len(), 9);
    }

    #[test]
    fn test_progress() {
        let mut controller = PlaybackController::default();
        assert_eq!(controller.progress(), 0.0);

        let trace = five_step_trace();
        controller.start(trace.clone());
        assert!((controller.progress() - 0.2).abs() < f32::EPSILON);

        while controller.tick() {}
        assert!((controller.progress() - 1.0).abs() < f32::EPSILON);
    }
}
