//! Idle and retry waits.
//!
//! Both waits block the polling loop for a fixed duration while a spinner
//! turns on stdout. The idle spinner turns clockwise and the retry spinner
//! counter-clockwise, so the two can be told apart at a glance.

use std::time::Duration;

use console::Term;
use tokio::time::{Instant, sleep_until};
use tracing::info;

/// Time between spinner frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(500);

// ============================================================================
// Indicator
// ============================================================================

/// Spinner style shown during a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Used after a successful cycle.
    Clockwise,
    /// Used after a failed or rejected cycle.
    CounterClockwise,
}

impl Indicator {
    /// Returns the animation frames in display order.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Clockwise => &["|", "/", "-", "\\"],
            Self::CounterClockwise => &["\\", "-", "/", "|"],
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Farthest deadline a wait is allowed to reach, about thirty years.
const MAX_WAIT: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// Executes waits between polling cycles.
#[derive(Debug, Clone)]
pub struct Scheduler {
    animate: bool,
    term: Term,
}

impl Scheduler {
    /// Creates a scheduler. With `animate` off, waits are silent sleeps.
    pub fn new(animate: bool) -> Self {
        Self {
            animate,
            term: Term::stdout(),
        }
    }

    /// Waits after a successful cycle.
    pub async fn idle(&self, interval: Duration) {
        info!("next run at {}", clock_after(interval));
        self.wait(interval, Indicator::Clockwise).await;
    }

    /// Waits after a failed or rejected cycle.
    pub async fn retry_idle(&self, retry_delay: Duration) {
        info!("retry at {}", clock_after(retry_delay));
        self.wait(retry_delay, Indicator::CounterClockwise).await;
    }

    /// Sleeps for `duration`, drawing `indicator` if animation is enabled.
    pub async fn wait(&self, duration: Duration, indicator: Indicator) {
        let deadline = deadline_after(Instant::now(), duration);

        if !self.animate {
            sleep_until(deadline).await;
            return;
        }

        let mut frames = indicator.frames().iter().cycle();
        while Instant::now() < deadline {
            let Some(frame) = frames.next() else { break };
            self.draw(frame);
            sleep_until((Instant::now() + FRAME_INTERVAL).min(deadline)).await;
        }
        self.draw(" ");
    }

    /// Writes one character and steps back over it.
    fn draw(&self, frame: &str) {
        // A broken stdout must not stop the wait.
        let _ = self
            .term
            .write_str(frame)
            .and_then(|()| self.term.move_cursor_left(1))
            .and_then(|()| self.term.flush());
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Returns `start + duration`, capped at [`MAX_WAIT`] from `start`.
pub fn deadline_after(start: Instant, duration: Duration) -> Instant {
    start
        .checked_add(duration.min(MAX_WAIT))
        .unwrap_or(start)
}

/// Wall-clock time `after` from now, as `HH:MM:SS`.
///
/// Offsets beyond the calendar range render as `--:--:--`.
pub fn clock_after(after: Duration) -> String {
    chrono::Duration::from_std(after)
        .ok()
        .and_then(|offset| chrono::Local::now().checked_add_signed(offset))
        .map_or_else(
            || "--:--:--".to_string(),
            |at| at.format("%H:%M:%S").to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators_rotate_in_opposite_directions() {
        let cw = Indicator::Clockwise.frames();
        let mut ccw = Indicator::CounterClockwise.frames().to_vec();
        ccw.reverse();
        assert_eq!(cw, ccw.as_slice());
        assert_ne!(cw[0], Indicator::CounterClockwise.frames()[0]);
    }

    #[tokio::test]
    async fn test_wait_honours_duration() {
        let scheduler = Scheduler::new(false);
        let start = Instant::now();
        scheduler.wait(Duration::from_millis(50), Indicator::Clockwise).await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_animated_wait_ends_at_deadline() {
        let scheduler = Scheduler::new(true);
        let start = Instant::now();
        scheduler
            .retry_idle(Duration::from_millis(120))
            .await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(120));
        assert!(elapsed < FRAME_INTERVAL);
    }

    #[test]
    fn test_huge_durations_do_not_overflow() {
        let start = Instant::now();
        let deadline = deadline_after(start, Duration::from_secs(u64::MAX));
        assert_eq!(deadline, start + MAX_WAIT);
        assert_eq!(deadline_after(start, Duration::from_secs(5)), start + Duration::from_secs(5));

        assert_eq!(clock_after(Duration::from_secs(u64::MAX)), "--:--:--");
        assert_eq!(clock_after(Duration::MAX), "--:--:--");
    }

    #[tokio::test]
    async fn test_huge_interval_wait_can_be_dropped() {
        let scheduler = Scheduler::new(false);
        let wait = scheduler.idle(Duration::from_secs(u64::MAX));
        let timed_out = tokio::time::timeout(Duration::from_millis(20), wait).await;
        assert!(timed_out.is_err());
    }

    #[test]
    fn test_clock_after_format() {
        let clock = clock_after(Duration::from_secs(60));
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);
    }
}
