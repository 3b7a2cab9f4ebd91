//! Repeating fall timer
//!
//! A delay-then-fire cycle driven by the host loop: the loop passes the
//! current time to [`FallTimer::poll`], which reports whether a fire is due.
//! Nothing runs in the background, so a stopped timer cannot deliver a
//! late fire.

use std::time::{Duration, Instant};

/// Default delay between automatic downward moves
pub const DEFAULT_FALL_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct FallTimer {
    interval: Duration,
    /// Next fire time; None while stopped
    deadline: Option<Instant>,
}

impl Default for FallTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FALL_INTERVAL)
    }
}

impl FallTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the delay; applies from the next scheduled fire
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start (or restart) with a fresh full delay from `now`
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Cancel any pending fire. Stopping twice is a no-op.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Returns true if a fire is due at `now`, and schedules the next one
    ///
    /// At most one fire is reported per call; a late poll does not queue
    /// up missed fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_stopped_timer_never_fires() {
        let now = Instant::now();
        let mut timer = FallTimer::default();
        assert!(!timer.is_running());
        assert!(!timer.poll(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_after_interval() {
        let now = Instant::now();
        let mut timer = FallTimer::new(100 * MS);
        timer.start(now);
        assert!(!timer.poll(now + 99 * MS));
        assert!(timer.poll(now + 100 * MS));
        // next delay starts from the fire
        assert!(!timer.poll(now + 150 * MS));
        assert!(timer.poll(now + 200 * MS));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let now = Instant::now();
        let mut timer = FallTimer::new(100 * MS);
        timer.start(now);
        assert!(timer.poll(now + 1000 * MS));
        assert!(!timer.poll(now + 1000 * MS));
    }

    #[test]
    fn test_stop_is_idempotent_and_final() {
        let now = Instant::now();
        let mut timer = FallTimer::new(100 * MS);
        timer.start(now);
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll(now + 500 * MS));
    }

    #[test]
    fn test_restart_uses_fresh_delay() {
        let now = Instant::now();
        let mut timer = FallTimer::new(100 * MS);
        timer.start(now);
        timer.stop();
        // resumed 90ms later: the old deadline (100ms) must not carry over
        timer.start(now + 90 * MS);
        assert!(!timer.poll(now + 150 * MS));
        assert!(timer.poll(now + 190 * MS));
    }

    #[test]
    fn test_interval_change_applies_to_next_delay() {
        let now = Instant::now();
        let mut timer = FallTimer::new(100 * MS);
        timer.start(now);
        timer.set_interval(300 * MS);
        assert!(timer.poll(now + 100 * MS));
        assert!(!timer.poll(now + 300 * MS));
        assert!(timer.poll(now + 400 * MS));
        assert_eq!(timer.interval(), 300 * MS);
    }
}
