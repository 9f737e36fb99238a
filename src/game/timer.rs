//! Elapsed-time tick schedule
//!
//! The round clock is refreshed once per second while a round is active. The schedule is
//! a single optional deadline, so there is never more than one pending tick, and every
//! arm is matched by exactly one teardown.

use std::time::{Duration, Instant};

/// Cadence of the elapsed-time refresh
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Recurring one-second deadline tied to the active round
#[derive(Debug, Default, Clone)]
pub struct TickSchedule {
    next_due: Option<Instant>,
    arms: u64,
    teardowns: u64,
}

impl TickSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking from `now`; no-op if already armed
    pub fn arm(&mut self, now: Instant) -> bool {
        if self.next_due.is_some() {
            return false;
        }
        self.next_due = Some(now + TICK_INTERVAL);
        self.arms += 1;
        true
    }

    /// Tear the schedule down; no-op if not armed
    pub fn cancel(&mut self) -> bool {
        if self.next_due.take().is_some() {
            self.teardowns += 1;
            true
        } else {
            false
        }
    }

    /// Consume a due tick and schedule the next one
    ///
    /// Missed ticks collapse into one: after a long stall the next deadline is the first
    /// interval boundary after `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let behind = now.duration_since(due).as_nanos() % TICK_INTERVAL.as_nanos();
        let behind = Duration::from_nanos(u64::try_from(behind).unwrap_or(0));
        self.next_due = Some(now + (TICK_INTERVAL - behind));
        true
    }

    /// Time until the next tick, `None` when not armed
    #[must_use]
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of times the schedule has been started
    #[inline]
    #[must_use]
    pub const fn arms(&self) -> u64 {
        self.arms
    }

    /// Number of times the schedule has been torn down
    #[inline]
    #[must_use]
    pub const fn teardowns(&self) -> u64 {
        self.teardowns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_once() {
        let now = Instant::now();
        let mut schedule = TickSchedule::new();
        assert!(schedule.arm(now));
        assert!(!schedule.arm(now));
        assert_eq!(schedule.arms(), 1);
        assert_eq!(schedule.time_until(now), Some(TICK_INTERVAL));
    }

    #[test]
    fn cancel_matches_arm() {
        let now = Instant::now();
        let mut schedule = TickSchedule::new();
        assert!(!schedule.cancel());

        schedule.arm(now);
        assert!(schedule.cancel());
        assert!(!schedule.cancel());
        assert_eq!(schedule.arms(), schedule.teardowns());
        assert_eq!(schedule.time_until(now), None);
    }

    #[test]
    fn fire_only_when_due() {
        let now = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(now);

        assert!(!schedule.fire(now + Duration::from_millis(999)));
        assert!(schedule.fire(now + TICK_INTERVAL));
        assert_eq!(
            schedule.time_until(now + TICK_INTERVAL),
            Some(TICK_INTERVAL)
        );
    }

    #[test]
    fn missed_ticks_collapse() {
        let now = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(now);

        let late = now + Duration::from_millis(5_500);
        assert!(schedule.fire(late));
        assert!(!schedule.fire(late));
        assert_eq!(schedule.time_until(late), Some(Duration::from_millis(500)));
    }

    #[test]
    fn day_long_stall_lands_on_next_boundary() {
        let now = Instant::now();
        let mut schedule = TickSchedule::new();
        schedule.arm(now);

        let late = now + Duration::from_secs(86_400) + Duration::from_millis(250);
        assert!(schedule.fire(late));
        assert!(!schedule.fire(late));
        assert_eq!(schedule.time_until(late), Some(Duration::from_millis(750)));
    }

    #[test]
    fn unarmed_never_fires() {
        let mut schedule = TickSchedule::new();
        assert!(!schedule.fire(Instant::now() + Duration::from_secs(10)));
    }
}
