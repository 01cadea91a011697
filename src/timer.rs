use std::time::{Duration, Instant};

use crate::game::TickSchedule;

/// Single-deadline tick timer owned by the runtime loop.
///
/// Holding exactly one deadline means re-arming after a restart replaces the
/// old chain instead of running a second one next to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a controller schedule relative to `now`.
    pub fn apply(&mut self, schedule: TickSchedule, now: Instant) {
        match schedule {
            TickSchedule::Unchanged => {}
            TickSchedule::After(delay) => self.deadline = Some(now + delay),
            TickSchedule::Halt => self.deadline = None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending tick, zero when overdue, `None` when idle.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes the pending tick if it is due.
    ///
    /// The timer is disarmed afterwards; the controller's next schedule
    /// re-arms it.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::game::TickSchedule;

    use super::TickTimer;

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = TickTimer::new();
        let now = Instant::now();

        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(now), None);
        assert!(!timer.fire_if_due(now + Duration::from_secs(10)));
    }

    #[test]
    fn fires_once_when_due() {
        let mut timer = TickTimer::new();
        let now = Instant::now();
        timer.apply(TickSchedule::After(Duration::from_millis(100)), now);

        assert!(!timer.fire_if_due(now + Duration::from_millis(99)));
        assert_eq!(
            timer.remaining(now + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert!(timer.fire_if_due(now + Duration::from_millis(100)));
        assert!(!timer.fire_if_due(now + Duration::from_millis(200)));
    }

    #[test]
    fn rearming_replaces_pending_tick() {
        let mut timer = TickTimer::new();
        let now = Instant::now();
        timer.apply(TickSchedule::After(Duration::from_millis(100)), now);

        let restart = now + Duration::from_millis(50);
        timer.apply(TickSchedule::After(Duration::ZERO), restart);

        assert!(timer.fire_if_due(restart));
        assert!(!timer.fire_if_due(now + Duration::from_millis(100)));
    }

    #[test]
    fn halt_cancels_and_unchanged_keeps() {
        let mut timer = TickTimer::new();
        let now = Instant::now();
        timer.apply(TickSchedule::After(Duration::from_millis(100)), now);

        timer.apply(TickSchedule::Unchanged, now);
        assert!(timer.is_armed());

        timer.apply(TickSchedule::Halt, now);
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(now + Duration::from_secs(1)));
    }
}
