//! Hidden admin-entry gesture.
//!
//! Three rapid activations of the site logo open the admin route; a
//! 2-second silence resets the count. This is a UI affordance, not an
//! access control; the admin surface still requires a session.
//!
//! The detector is a small state machine: each activation cancels the
//! pending reset timer, and either fires (at the threshold) or re-arms
//! the timer. The owning view must call [`GestureDetector::dispose`]
//! on teardown (also done on drop) so a late timer never touches a
//! dead view.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use bikeversa_core::constants::{GESTURE_THRESHOLD, GESTURE_WINDOW_MS};

#[derive(Debug)]
struct Inner {
    count: u32,
    /// Bumped on every activation and on dispose; a waking timer only
    /// resets the count if its round is still the current one.
    round: u64,
    pending: Option<JoinHandle<()>>,
}

/// Counts rapid activations and reports when the threshold is hit.
#[derive(Debug)]
pub struct GestureDetector {
    inner: Arc<Mutex<Inner>>,
    threshold: u32,
    window: Duration,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureDetector {
    /// Detector with the site's threshold (3) and window (2000 ms).
    pub fn new() -> Self {
        Self::with_config(GESTURE_THRESHOLD, Duration::from_millis(GESTURE_WINDOW_MS))
    }

    pub fn with_config(threshold: u32, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                count: 0,
                round: 0,
                pending: None,
            })),
            threshold,
            window,
        }
    }

    /// Register one activation.
    ///
    /// Returns `true` when this activation reached the threshold; the
    /// caller performs the bound action (navigate to the admin
    /// route). The count is back at zero afterwards, so a fourth
    /// click starts a fresh round.
    ///
    /// Must be called from within a tokio runtime (the reset timer is
    /// a spawned task).
    pub fn activate(&self) -> bool {
        let mut inner = lock(&self.inner);
        if let Some(timer) = inner.pending.take() {
            timer.abort();
        }
        inner.round += 1;

        inner.count += 1;
        if inner.count >= self.threshold {
            inner.count = 0;
            tracing::debug!("admin gesture fired");
            return true;
        }

        let round = inner.round;
        let window = self.window;
        let shared = Arc::clone(&self.inner);
        inner.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut inner = lock(&shared);
            if inner.round == round {
                inner.count = 0;
                inner.pending = None;
            }
        }));

        false
    }

    /// Current activation count (0 when idle).
    pub fn count(&self) -> u32 {
        lock(&self.inner).count
    }

    /// Cancel any pending reset timer and return to idle.
    ///
    /// Required on view teardown; harmless to call repeatedly.
    pub fn dispose(&self) {
        let mut inner = lock(&self.inner);
        if let Some(timer) = inner.pending.take() {
            timer.abort();
        }
        inner.round += 1;
        inner.count = 0;
    }
}

impl Drop for GestureDetector {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn lock(inner: &Arc<Mutex<Inner>>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Duration};

    #[tokio::test(start_paused = true)]
    async fn three_rapid_activations_fire_once() {
        let gesture = GestureDetector::new();
        assert!(!gesture.activate());
        assert!(!gesture.activate());
        assert!(gesture.activate());
        assert_eq!(gesture.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn silence_resets_the_count_without_firing() {
        let gesture = GestureDetector::new();
        assert!(!gesture.activate());
        assert!(!gesture.activate());
        assert_eq!(gesture.count(), 2);

        sleep(Duration::from_millis(2100)).await;
        assert_eq!(gesture.count(), 0);

        // The next round needs a full three again.
        assert!(!gesture.activate());
        assert!(!gesture.activate());
        assert!(gesture.activate());
    }

    #[tokio::test(start_paused = true)]
    async fn each_activation_rearms_the_window() {
        let gesture = GestureDetector::new();
        assert!(!gesture.activate());
        sleep(Duration::from_millis(1500)).await;
        assert!(!gesture.activate());
        sleep(Duration::from_millis(1500)).await;
        // 3 s after the first click, but each gap stayed inside the
        // window, so this one fires.
        assert!(gesture.activate());
    }

    #[tokio::test(start_paused = true)]
    async fn fourth_activation_starts_a_fresh_round() {
        let gesture = GestureDetector::new();
        gesture.activate();
        gesture.activate();
        assert!(gesture.activate());

        assert!(!gesture.activate());
        assert_eq!(gesture.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_cancels_the_pending_timer() {
        let gesture = GestureDetector::new();
        gesture.activate();
        gesture.activate();
        gesture.dispose();
        assert_eq!(gesture.count(), 0);

        // A timer surviving dispose would reset a later round midway.
        assert!(!gesture.activate());
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(gesture.count(), 1);
        assert!(!gesture.activate());
        assert!(gesture.activate());
    }
}
