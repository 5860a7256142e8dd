use std::fmt;

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub deadline_ms: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub fn new(deadline_ms: u64) -> Self {
        Self { deadline_ms }
    }

    /// A countdown ending `duration_ms` after `now`.
    pub fn starting_at(now: u64, duration_ms: u64) -> Self {
        Self::new(now.saturating_add(duration_ms))
    }

    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.deadline_ms
    }

    /// Remaining time, rounded down to whole seconds; zero once expired.
    pub fn remaining(&self, now: u64) -> CountdownParts {
        let left = self.deadline_ms.saturating_sub(now);
        CountdownParts {
            days: left / DAY_MS,
            hours: (left % DAY_MS) / HOUR_MS,
            minutes: (left % HOUR_MS) / MINUTE_MS,
            seconds: (left % MINUTE_MS) / SECOND_MS,
        }
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_remaining_time() {
        let countdown = Countdown::new(DAY_MS + 2 * HOUR_MS + 3 * MINUTE_MS + 4 * SECOND_MS + 999);
        let parts = countdown.remaining(0);
        assert_eq!(
            parts,
            CountdownParts {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 4
            }
        );
        assert_eq!(parts.to_string(), "01:02:03:04");
    }

    #[test]
    fn clamps_to_zero_after_deadline() {
        let countdown = Countdown::starting_at(10_000, 5_000);
        assert!(!countdown.is_expired(14_999));
        assert!(countdown.is_expired(15_000));
        assert_eq!(countdown.remaining(20_000), CountdownParts::default());
        assert_eq!(countdown.remaining(20_000).to_string(), "00:00:00:00");
    }
}
