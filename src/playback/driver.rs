// Playback tick driver
// A cancellable scheduled-tick task that advances a shared controller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::playback::controller::{PlaybackController, PlaybackStatus};

/// Periodic ticker for a shared playback controller
///
/// The driver owns the only task that calls `tick`; external control
/// calls (`pause`, `resume`, `reset`, `set_interval`) go through the same
/// mutex, so exactly one mutator touches position/status at a time. The
/// task re-reads the interval before every sleep, which is how interval
/// changes take effect on the next tick and never retroactively.
pub struct PlaybackDriver {
    controller: Arc<Mutex<PlaybackController>>,
    stop_signal: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PlaybackDriver {
    /// Spawn the ticker task
    ///
    /// The task exits on its own once the controller completes; spawn a
    /// new driver to replay after a reset.
    pub fn spawn(controller: Arc<Mutex<PlaybackController>>) -> Self {
        let stop_signal = Arc::new(AtomicBool::new(false));
        let task = tokio::spawn(run_ticker(
            Arc::clone(&controller),
            Arc::clone(&stop_signal),
        ));

        PlaybackDriver {
            controller,
            stop_signal,
            task,
        }
    }

    /// The shared controller, for control calls and polling
    pub fn controller(&self) -> &Arc<Mutex<PlaybackController>> {
        &self.controller
    }

    /// Cancel the ticker immediately
    ///
    /// Invalidates the pending tick before anything else, so no tick can
    /// fire after this call returns.
    pub fn stop(&self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        self.task.abort();
    }

    /// True once the ticker task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

async fn run_ticker(controller: Arc<Mutex<PlaybackController>>, stop_signal: Arc<AtomicBool>) {
    loop {
        let interval = {
            let ctl = controller.lock().unwrap();
            if ctl.status() == PlaybackStatus::Completed {
                log::debug!("playback completed, ticker exiting");
                break;
            }
            ctl.interval()
        };

        tokio::time::sleep(interval).await;

        if stop_signal.load(Ordering::SeqCst) {
            break;
        }

        controller.lock().unwrap().tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::majority::generate_majority_trace;
    use crate::trace::types::Trace;
    use std::time::Duration;

    fn running_controller(trace: Trace, interval_ms: u64) -> Arc<Mutex<PlaybackController>> {
        let mut controller = PlaybackController::new(Duration::from_millis(interval_ms));
        controller.start(Arc::new(trace));
        Arc::new(Mutex::new(controller))
    }

    async fn wait_until_finished(driver: &PlaybackDriver, timeout_ms: u64) {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);
        while !driver.is_finished() {
            assert!(
                tokio::time::Instant::now() < deadline,
                "driver did not finish in time"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_driver_plays_to_completion() {
        let trace = generate_majority_trace(&[1]); // 5 steps
        let controller = running_controller(trace, 10);

        let driver = PlaybackDriver::spawn(Arc::clone(&controller));
        wait_until_finished(&driver, 2000).await;

        let ctl = controller.lock().unwrap();
        assert_eq!(ctl.status(), PlaybackStatus::Completed);
        assert_eq!(ctl.position(), Some(4));
    }

    #[tokio::test]
    async fn test_stop_prevents_further_ticks() {
        let trace = generate_majority_trace(&[1, 2, 3]);
        let controller = running_controller(trace, 50);

        let driver = PlaybackDriver::spawn(Arc::clone(&controller));
        driver.stop();

        tokio::time::sleep(Duration::from_millis(200)).await;

        let ctl = controller.lock().unwrap();
        assert_eq!(ctl.position(), Some(0));
        assert_eq!(ctl.status(), PlaybackStatus::Running);
        assert!(driver.is_finished());
    }

    #[tokio::test]
    async fn test_pause_freezes_position_under_running_ticker() {
        let trace = generate_majority_trace(&(0..20).collect::<Vec<_>>());
        let controller = running_controller(trace, 10);

        let driver = PlaybackDriver::spawn(Arc::clone(&controller));
        tokio::time::sleep(Duration::from_millis(50)).await;

        let frozen = {
            let mut ctl = controller.lock().unwrap();
            ctl.pause();
            ctl.position()
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(controller.lock().unwrap().position(), frozen);

        controller.lock().unwrap().resume();
        wait_until_finished(&driver, 3000).await;
        assert_eq!(
            controller.lock().unwrap().status(),
            PlaybackStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_empty_trace_ticker_exits() {
        let controller = running_controller(
            Trace::new(crate::trace::types::AlgorithmKind::BubbleSort),
            10,
        );
        let driver = PlaybackDriver::spawn(Arc::clone(&controller));
        wait_until_finished(&driver, 1000).await;

        assert_eq!(
            controller.lock().unwrap().status(),
            PlaybackStatus::Completed
        );
    }
}
