// Session registry
// In-memory bookkeeping for live visualizer sessions

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::playback::controller::{PlaybackController, PlaybackStatus};
use crate::playback::driver::PlaybackDriver;
use crate::trace::types::{AlgorithmKind, Step, Trace};

/// Session record for listings and status displays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub algorithm: AlgorithmKind,
    pub step_count: usize,
    pub status: PlaybackStatus,
    pub position: Option<usize>,
}

/// Owned snapshot of the current playback state for a polling renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackFrame {
    pub status: PlaybackStatus,
    pub position: Option<usize>,
    pub step: Option<Step>,
    pub progress: f32,
}

/// One live session: a trace under timed playback
struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    algorithm: AlgorithmKind,
    controller: Arc<Mutex<PlaybackController>>,
    driver: PlaybackDriver,
    step_count: usize,
}

/// Registry of live visualizer sessions
///
/// Each consumer (one per visualizer page) gets its own session id; all
/// control flows through the registry so that drivers are stopped
/// whenever their session goes away.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        SessionRegistry {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start playback of a trace in a new session
    ///
    /// Must be called within a tokio runtime; the session's tick driver
    /// is spawned immediately.
    pub fn create(&self, trace: Trace, interval: Duration) -> Uuid {
        let id = Uuid::new_v4();
        let algorithm = trace.algorithm;
        let step_count = trace.len();

        let mut controller = PlaybackController::new(interval);
        controller.start(Arc::new(trace));
        let controller = Arc::new(Mutex::new(controller));
        let driver = PlaybackDriver::spawn(Arc::clone(&controller));

        let session = Session {
            id,
            created_at: Utc::now(),
            algorithm,
            controller,
            driver,
            step_count,
        };

        log::info!(
            "Started {} session {} with {} steps",
            algorithm.display_name(),
            id,
            step_count
        );

        self.sessions.lock().unwrap().insert(id, session);
        id
    }

    /// Summaries of all sessions, newest first
    pub fn list(&self) -> Vec<SessionSummary> {
        let sessions = self.sessions.lock().unwrap();
        let mut summaries: Vec<SessionSummary> =
            sessions.values().map(|s| self.summarize(s)).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        summaries
    }

    /// Summary of one session
    pub fn summary(&self, id: &Uuid) -> Option<SessionSummary> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(id).map(|s| self.summarize(s))
    }

    fn summarize(&self, session: &Session) -> SessionSummary {
        let controller = session.controller.lock().unwrap();
        SessionSummary {
            id: session.id,
            created_at: session.created_at,
            algorithm: session.algorithm,
            step_count: session.step_count,
            status: controller.status(),
            position: controller.position(),
        }
    }

    /// Current step and status for a polling renderer
    pub fn current_frame(&self, id: &Uuid) -> Option<PlaybackFrame> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id)?;
        let controller = session.controller.lock().unwrap();

        Some(PlaybackFrame {
            status: controller.status(),
            position: controller.position(),
            step: controller.current_step().cloned(),
            progress: controller.progress(),
        })
    }

    /// Suspend a running session; false if the id is unknown
    pub fn pause(&self, id: &Uuid) -> bool {
        self.with_controller(id, |c| c.pause())
    }

    /// Resume a paused session; false if the id is unknown
    pub fn resume(&self, id: &Uuid) -> bool {
        self.with_controller(id, |c| c.resume())
    }

    /// Change a session's tick interval; false if the id is unknown
    pub fn set_interval(&self, id: &Uuid, interval: Duration) -> bool {
        self.with_controller(id, |c| c.set_interval(interval))
    }

    /// Jump a session to an arbitrary step; false if the id is unknown
    pub fn seek(&self, id: &Uuid, index: usize) -> bool {
        self.with_controller(id, |c| c.seek(index))
    }

    /// Reset a session to idle
    ///
    /// The driver is stopped first so the pending tick can never fire
    /// after the reset.
    pub fn reset(&self, id: &Uuid) -> bool {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(id) {
            Some(session) => {
                session.driver.stop();
                session.controller.lock().unwrap().reset();
                true
            }
            None => false,
        }
    }

    /// Stop and discard a session
    pub fn remove(&self, id: &Uuid) -> bool {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.remove(id) {
            Some(session) => {
                session.driver.stop();
                log::info!("Removed session {}", id);
                true
            }
            None => false,
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_controller<F>(&self, id: &Uuid, f: F) -> bool
    where
        F: FnOnce(&mut PlaybackController),
    {
        let sessions = self.sessions.lock().unwrap();
        match sessions.get(id) {
            Some(session) => {
                f(&mut session.controller.lock().unwrap());
                true
            }
            None => false,
        }
    }
}
