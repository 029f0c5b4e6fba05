//! Game clock thresholds and elapsed-time predicates.

use chrono::{DateTime, Duration, Utc};

use crate::ports::clock_port::ClockPort;

/// Tracks game time and answers the elapsed-time questions the economic
/// effects depend on. Every read of "now" goes through the injected clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeManager {
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    game_duration: Duration,
    bonus_disable_after: Duration,
    rent_reduction_start_after: Duration,
    tax_increase_start_after: Duration,
}

impl TimeManager {
    pub fn new(fast_mode: bool, start_time: DateTime<Utc>) -> Self {
        if fast_mode {
            Self {
                start_time,
                end_time: None,
                game_duration: Duration::minutes(31),
                bonus_disable_after: Duration::minutes(31),
                rent_reduction_start_after: Duration::minutes(41),
                tax_increase_start_after: Duration::minutes(41),
            }
        } else {
            Self {
                start_time,
                end_time: None,
                game_duration: Duration::minutes(46),
                bonus_disable_after: Duration::minutes(46),
                rent_reduction_start_after: Duration::minutes(61),
                tax_increase_start_after: Duration::minutes(61),
            }
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn elapsed(&self, clock: &dyn ClockPort) -> Duration {
        clock.now() - self.start_time
    }

    /// Pass-start bonuses are granted only while this holds.
    pub fn is_bonus_active(&self, clock: &dyn ClockPort) -> bool {
        self.elapsed(clock) < self.bonus_disable_after
    }

    /// Scheduled rent reductions run only once this opens.
    pub fn is_rent_reduction_active(&self, clock: &dyn ClockPort) -> bool {
        self.elapsed(clock) >= self.rent_reduction_start_after
    }

    /// Tax escalation fires only once this opens.
    pub fn is_tax_increase_active(&self, clock: &dyn ClockPort) -> bool {
        self.elapsed(clock) >= self.tax_increase_start_after
    }

    pub fn is_time_up(&self, clock: &dyn ClockPort) -> bool {
        self.elapsed(clock) >= self.game_duration
    }

    pub fn is_game_over(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn end(&mut self, now: DateTime<Utc>) {
        self.end_time = Some(now);
    }
}
