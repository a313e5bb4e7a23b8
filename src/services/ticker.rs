//! Start/stop lifecycle for periodic polling
//!
//! The timer screen polls the monitor about once a second while it is
//! visible. `PollTimer` is the hook pair the screen calls when it becomes
//! active (`start`) and inactive (`stop`); recomputation is idempotent so a
//! skipped or repeated poll is harmless.

use std::time::{Duration, Instant};

/// Tracks whether a poll is due
#[derive(Debug, Clone)]
pub struct PollTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Begin polling; the first poll is due immediately
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now);
        }
    }

    /// Suspend polling
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true if a poll should happen now, and schedules the next one
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for PollTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_due() {
        let mut timer = PollTimer::default();
        let now = Instant::now();
        assert!(!timer.is_running());
        assert!(!timer.poll_due(now));
        assert!(!timer.poll_due(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_start_is_due_immediately_then_waits() {
        let mut timer = PollTimer::new(Duration::from_secs(1));
        let now = Instant::now();
        timer.start(now);

        assert!(timer.poll_due(now));
        assert!(!timer.poll_due(now + Duration::from_millis(500)));
        assert!(timer.poll_due(now + Duration::from_millis(1000)));
    }

    #[test]
    fn test_stop_then_resume() {
        let mut timer = PollTimer::new(Duration::from_secs(1));
        let now = Instant::now();
        timer.start(now);
        assert!(timer.poll_due(now));

        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll_due(now + Duration::from_secs(5)));

        let later = now + Duration::from_secs(6);
        timer.start(later);
        assert!(timer.poll_due(later));
    }

    #[test]
    fn test_start_twice_keeps_schedule() {
        let mut timer = PollTimer::new(Duration::from_secs(1));
        let now = Instant::now();
        timer.start(now);
        assert!(timer.poll_due(now));

        timer.start(now + Duration::from_millis(100));
        assert!(!timer.poll_due(now + Duration::from_millis(200)));
    }
}
