//! The reference-form query contract
//!
//! Wire boundary of `GET /embed` and its SSE mirror. Published embeds carry
//! these exact parameter names and defaults in their frame URLs, so the
//! contract stays fixed: `date`, `title`, `expired`, `theme`, `size`, and
//! the four visibility flags `d`, `h`, `m`, `s` where only the literal
//! string `"0"` hides a unit.

use serde::{Deserialize, Serialize};

use crate::card::{CardConfig, DEFAULT_EXPIRED_TEXT};
use crate::style::{SizeId, ThemeId};

/// Raw query parameters of the embed endpoint.
///
/// Every field is optional on the way in; [`EmbedQuery::into_config`]
/// applies the documented defaults. On the way out every key is emitted so
/// generated frame URLs are fully explicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedQuery {
    pub date: Option<String>,
    pub title: Option<String>,
    pub expired: Option<String>,
    pub theme: Option<String>,
    pub size: Option<String>,
    pub d: Option<String>,
    pub h: Option<String>,
    pub m: Option<String>,
    pub s: Option<String>,
}

/// Only the literal `"0"` hides a unit; absence and every other value show it.
fn shows(flag: &Option<String>) -> bool {
    flag.as_deref() != Some("0")
}

fn flag(value: bool) -> Option<String> {
    Some(if value { "1" } else { "0" }.to_string())
}

impl EmbedQuery {
    /// Resolve the raw parameters into a card, applying wire defaults.
    pub fn into_config(self) -> CardConfig {
        CardConfig {
            title: self.title.unwrap_or_default(),
            target: self.date.unwrap_or_default(),
            expired_text: self
                .expired
                .unwrap_or_else(|| DEFAULT_EXPIRED_TEXT.to_string()),
            theme: ThemeId::from_param(self.theme.as_deref().unwrap_or("")),
            size: SizeId::from_param(self.size.as_deref().unwrap_or("")),
            show_days: shows(&self.d),
            show_hours: shows(&self.h),
            show_minutes: shows(&self.m),
            show_seconds: shows(&self.s),
        }
    }

    /// Serialize a card back onto the wire, every key explicit.
    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            date: Some(config.target.clone()),
            title: Some(config.title.clone()),
            expired: Some(config.expired_text.clone()),
            theme: Some(config.theme.as_str().to_string()),
            size: Some(config.size.as_str().to_string()),
            d: flag(config.show_days),
            h: flag(config.show_hours),
            m: flag(config.show_minutes),
            s: flag(config.show_seconds),
        }
    }

    /// Percent-encoded query string for an embed URL.
    ///
    /// Uses the same codec axum's `Query` extractor parses with, so whatever
    /// this emits comes back unchanged.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(self).expect("embed query is flat key-value data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> EmbedQuery {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn empty_query_resolves_to_defaults() {
        let config = parse("").into_config();
        assert_eq!(config.title, "");
        assert_eq!(config.target, "");
        assert_eq!(config.expired_text, DEFAULT_EXPIRED_TEXT);
        assert_eq!(config.theme, ThemeId::Orange);
        assert_eq!(config.size, SizeId::Md);
        assert!(config.show_days && config.show_hours && config.show_minutes && config.show_seconds);
    }

    #[test]
    fn only_literal_zero_hides_a_unit() {
        let config = parse("d=0&h=1&m=yes&s=").into_config();
        assert!(!config.show_days);
        assert!(config.show_hours);
        assert!(config.show_minutes);
        assert!(config.show_seconds);
    }

    #[test]
    fn unknown_theme_and_size_fall_back() {
        let config = parse("theme=xyz&size=huge").into_config();
        assert_eq!(config.theme, ThemeId::Orange);
        assert_eq!(config.size, SizeId::Md);
    }

    #[test]
    fn full_query_parses() {
        let config = parse(
            "date=2026-12-31T23%3A59&title=New+Year&expired=Done&theme=pink&size=lg&d=1&h=1&m=0&s=0",
        )
        .into_config();
        assert_eq!(config.target, "2026-12-31T23:59");
        assert_eq!(config.title, "New Year");
        assert_eq!(config.expired_text, "Done");
        assert_eq!(config.theme, ThemeId::Pink);
        assert_eq!(config.size, SizeId::Lg);
        assert!(config.show_days && config.show_hours);
        assert!(!config.show_minutes && !config.show_seconds);
    }

    #[test]
    fn serialization_emits_every_key() {
        let query = EmbedQuery::from_config(&CardConfig::default()).to_query_string();
        for key in ["date=", "title=", "expired=", "theme=", "size=", "d=", "h=", "m=", "s="] {
            assert!(query.contains(key), "missing {} in {}", key, query);
        }
    }

    #[test]
    fn round_trips_every_theme_size_and_visibility_combination() {
        for theme in ThemeId::ALL {
            for size in SizeId::ALL {
                for bits in 0..16u8 {
                    let original = CardConfig {
                        title: "Early-bird sale 50% off".to_string(),
                        target: "2026-12-31T23:59".to_string(),
                        expired_text: "活動已結束".to_string(),
                        theme,
                        size,
                        show_days: bits & 1 != 0,
                        show_hours: bits & 2 != 0,
                        show_minutes: bits & 4 != 0,
                        show_seconds: bits & 8 != 0,
                    };
                    let wire = EmbedQuery::from_config(&original).to_query_string();
                    let reparsed = parse(&wire).into_config();
                    assert_eq!(reparsed, original, "wire: {}", wire);
                }
            }
        }
    }

    #[test]
    fn round_trip_preserves_snapshot_sequence() {
        use chrono::TimeZone;

        let original = CardConfig {
            target: "2026-12-31T23:59".to_string(),
            ..CardConfig::default()
        };
        let wire = EmbedQuery::from_config(&original).to_query_string();
        let reparsed = parse(&wire).into_config();

        let now = chrono::Utc.with_ymd_and_hms(2026, 12, 30, 0, 0, 0).unwrap();
        assert_eq!(original.snapshot_at(now), reparsed.snapshot_at(now));
    }
}
