//! The countdown card description

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::countdown::{parse_target, CountdownSnapshot, TimeUnit};
use crate::style::{SizeId, ThemeId};

/// Text shown once a countdown ends, unless the card overrides it. Part of
/// the embed wire format.
pub const DEFAULT_EXPIRED_TEXT: &str = "活動已結束";

/// Title of the demo card a freshly started server ticks.
pub const DEFAULT_TITLE: &str = "早鳥優惠倒數";

/// Complete description of one countdown card.
///
/// The target stays the raw string it arrived with: generated snippets embed
/// it verbatim so host browsers apply their own `new Date(...)` reading,
/// while this server resolves it to an absolute instant via
/// [`parse_target`]. Fields left out of a JSON body take the same defaults
/// the query contract applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub title: String,
    pub target: String,
    pub expired_text: String,
    pub theme: ThemeId,
    pub size: SizeId,
    pub show_days: bool,
    pub show_hours: bool,
    pub show_minutes: bool,
    pub show_seconds: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            target: String::new(),
            expired_text: DEFAULT_EXPIRED_TEXT.to_string(),
            theme: ThemeId::default(),
            size: SizeId::default(),
            show_days: true,
            show_hours: true,
            show_minutes: true,
            show_seconds: true,
        }
    }
}

impl CardConfig {
    /// The card a fresh server starts with: one week out, end of day.
    pub fn demo(now: DateTime<Utc>) -> Self {
        let day = (now + Duration::days(7)).date_naive();
        Self {
            title: DEFAULT_TITLE.to_string(),
            target: format!("{}T23:59", day.format("%Y-%m-%d")),
            ..Self::default()
        }
    }

    /// Whether this card shows the given unit.
    pub fn shows(&self, unit: TimeUnit) -> bool {
        match unit {
            TimeUnit::Days => self.show_days,
            TimeUnit::Hours => self.show_hours,
            TimeUnit::Minutes => self.show_minutes,
            TimeUnit::Seconds => self.show_seconds,
        }
    }

    /// Units this card shows, largest first.
    pub fn visible_units(&self) -> Vec<TimeUnit> {
        TimeUnit::ALL
            .into_iter()
            .filter(|unit| self.shows(*unit))
            .collect()
    }

    /// The target as an absolute instant, if it parses.
    pub fn target_instant(&self) -> Option<DateTime<Utc>> {
        parse_target(&self.target)
    }

    /// This card's reading at `now`.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> CountdownSnapshot {
        CountdownSnapshot::at_str(&self.target, now)
    }
}
