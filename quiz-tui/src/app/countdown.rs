//! Wall-clock source for the session tick
//!
//! The session expects exactly one `Tick` per elapsed second while it is
//! active. The event loop polls far more often than that, so this keeps
//! track of how many whole seconds have passed since the session started
//! and how many of them were already reported.

use std::time::Instant;

use libquiz::Status;

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    started_at: Option<Instant>,
    emitted: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting from `now`
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.emitted = 0;
    }

    pub fn cancel(&mut self) {
        self.started_at = None;
        self.emitted = 0;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Seconds elapsed since the last call that have not been reported yet
    pub fn due(&mut self, now: Instant) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started_at).as_secs();
        let due = elapsed.saturating_sub(self.emitted);
        self.emitted = elapsed.max(self.emitted);
        due
    }

    /// Follow the session status: run while active, stop otherwise
    ///
    /// Starting is idempotent, so calling this on every loop pass is fine.
    pub fn sync(&mut self, status: Status, now: Instant) {
        match (status, self.is_running()) {
            (Status::Active, false) => self.start(now),
            (Status::Active, true) => {}
            (_, true) => self.cancel(),
            (_, false) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_idle_countdown_reports_nothing() {
        let mut countdown = Countdown::new();
        assert!(!countdown.is_running());
        assert_eq!(countdown.due(Instant::now()), 0);
    }

    #[test]
    fn test_reports_each_second_once() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new();
        countdown.start(t0);

        assert_eq!(countdown.due(t0 + Duration::from_millis(400)), 0);
        assert_eq!(countdown.due(t0 + Duration::from_millis(1100)), 1);
        assert_eq!(countdown.due(t0 + Duration::from_millis(1900)), 0);
        assert_eq!(countdown.due(t0 + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new();
        countdown.start(t0);

        assert_eq!(countdown.due(t0 + Duration::from_millis(3500)), 3);
        assert_eq!(countdown.due(t0 + Duration::from_millis(3600)), 0);
    }

    #[test]
    fn test_sync_follows_status() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new();

        countdown.sync(Status::Ready, t0);
        assert!(!countdown.is_running());

        countdown.sync(Status::Active, t0);
        assert!(countdown.is_running());

        // Still active later: keeps the original start
        countdown.sync(Status::Active, t0 + Duration::from_secs(5));
        assert_eq!(countdown.due(t0 + Duration::from_secs(5)), 5);

        countdown.sync(Status::Finished, t0 + Duration::from_secs(6));
        assert!(!countdown.is_running());
        assert_eq!(countdown.due(t0 + Duration::from_secs(10)), 0);
    }
}
