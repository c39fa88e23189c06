//! Display units of a countdown card

use super::CountdownSnapshot;

/// One of the four time units a card can show, largest first.
///
/// The single-letter keys double as query-parameter names and element-id
/// fragments in generated markup, so they are part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// All units in display order.
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// Single-letter wire key (`d`, `h`, `m`, `s`).
    pub fn key(&self) -> &'static str {
        match self {
            TimeUnit::Days => "d",
            TimeUnit::Hours => "h",
            TimeUnit::Minutes => "m",
            TimeUnit::Seconds => "s",
        }
    }

    /// Label rendered under the digits. Fixed text, part of the embed output.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Days => "天",
            TimeUnit::Hours => "時",
            TimeUnit::Minutes => "分",
            TimeUnit::Seconds => "秒",
        }
    }

    /// This unit's value in a snapshot.
    pub fn value_in(&self, snapshot: &CountdownSnapshot) -> u64 {
        match self {
            TimeUnit::Days => snapshot.days,
            TimeUnit::Hours => snapshot.hours,
            TimeUnit::Minutes => snapshot.minutes,
            TimeUnit::Seconds => snapshot.seconds,
        }
    }
}
