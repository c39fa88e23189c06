//! Countdown snapshot computation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::target::parse_target;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// One countdown reading: the remaining time decomposed into display units.
///
/// Snapshots are recomputed from scratch on every tick and replaced, never
/// mutated, so a delayed tick can only make the display update late, not
/// drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub expired: bool,
}

impl CountdownSnapshot {
    /// The reading for a countdown that has already ended: all zeroes.
    pub fn expired() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            expired: true,
        }
    }

    /// Compute the remaining time from `now` until `target`.
    ///
    /// A target at or before `now` is expired (non-strict comparison). The
    /// millisecond difference is decomposed by successive integer division,
    /// truncating at every stage; nothing rounds up.
    pub fn at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = (target - now).num_milliseconds();
        if diff <= 0 {
            return Self::expired();
        }

        Self {
            days: (diff / MS_PER_DAY) as u64,
            hours: (diff % MS_PER_DAY / MS_PER_HOUR) as u64,
            minutes: (diff % MS_PER_HOUR / MS_PER_MINUTE) as u64,
            seconds: (diff % MS_PER_MINUTE / MS_PER_SECOND) as u64,
            expired: false,
        }
    }

    /// Compute against a raw target string.
    ///
    /// Strings that do not parse behave exactly like targets that have
    /// already passed; the caller decides whether that deserves a log line.
    pub fn at_str(raw_target: &str, now: DateTime<Utc>) -> Self {
        match parse_target(raw_target) {
            Some(target) => Self::at(target, now),
            None => Self::expired(),
        }
    }

    /// Remaining whole seconds represented by this reading.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

impl std::fmt::Display for CountdownSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.expired {
            write!(f, "expired")
        } else {
            write!(
                f,
                "{}d {:02}:{:02}:{:02}",
                self.days, self.hours, self.minutes, self.seconds
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn decomposes_one_of_each_unit() {
        // 1d 1h 1m 1.001s truncates to whole seconds
        let target = now() + Duration::milliseconds(90_061_001);
        let snapshot = CountdownSnapshot::at(target, now());
        assert_eq!(
            snapshot,
            CountdownSnapshot {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
                expired: false,
            }
        );
    }

    #[test]
    fn target_equal_to_now_is_expired() {
        assert_eq!(CountdownSnapshot::at(now(), now()), CountdownSnapshot::expired());
    }

    #[test]
    fn past_target_is_expired_and_zeroed() {
        let snapshot = CountdownSnapshot::at(now() - Duration::days(3), now());
        assert!(snapshot.expired);
        assert_eq!(snapshot.total_seconds(), 0);
    }

    #[test]
    fn units_sum_to_floored_seconds() {
        for diff_ms in [1, 999, 1_000, 59_999, 61_001, 3_599_999, 86_400_000, 123_456_789] {
            let target = now() + Duration::milliseconds(diff_ms);
            let snapshot = CountdownSnapshot::at(target, now());
            assert!(!snapshot.expired);
            assert_eq!(
                snapshot.total_seconds(),
                (diff_ms / 1000) as u64,
                "diff_ms = {}",
                diff_ms
            );
        }
    }

    #[test]
    fn recomputation_is_idempotent() {
        let target = now() + Duration::milliseconds(4_567_890);
        assert_eq!(
            CountdownSnapshot::at(target, now()),
            CountdownSnapshot::at(target, now())
        );
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        let target = now() + Duration::milliseconds(999);
        let snapshot = CountdownSnapshot::at(target, now());
        assert!(!snapshot.expired);
        assert_eq!(snapshot.total_seconds(), 0);
    }

    #[test]
    fn unparseable_target_string_reads_as_expired() {
        assert_eq!(
            CountdownSnapshot::at_str("definitely not a date", now()),
            CountdownSnapshot::expired()
        );
        assert_eq!(CountdownSnapshot::at_str("", now()), CountdownSnapshot::expired());
    }

    #[test]
    fn raw_string_target_matches_parsed_target() {
        let snapshot = CountdownSnapshot::at_str("2026-01-02T03:04:05", now());
        assert_eq!(
            snapshot,
            CountdownSnapshot {
                days: 1,
                hours: 3,
                minutes: 4,
                seconds: 5,
                expired: false,
            }
        );
    }

    #[test]
    fn display_formats_reading() {
        let target = now() + Duration::milliseconds(90_061_001);
        let snapshot = CountdownSnapshot::at(target, now());
        assert_eq!(snapshot.to_string(), "1d 01:01:01");
        assert_eq!(CountdownSnapshot::expired().to_string(), "expired");
    }
}
