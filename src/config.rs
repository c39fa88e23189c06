//! Configuration and CLI argument handling

use chrono::{DateTime, Utc};
use clap::Parser;

use crate::card::CardConfig;
use crate::style::{SizeId, ThemeId};

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "countdown-card")]
#[command(about = "A self-hosted countdown widget server with embeddable snippet generation")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8787")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Public base URL placed in generated snippets, e.g. https://cards.example.com
    #[arg(long)]
    pub public_url: Option<String>,

    /// Title of the served card
    #[arg(short, long)]
    pub title: Option<String>,

    /// Target date of the served card, e.g. 2026-12-31T23:59
    #[arg(short, long)]
    pub date: Option<String>,

    /// Text shown once the countdown ends
    #[arg(long)]
    pub expired_text: Option<String>,

    /// Theme of the served card
    #[arg(long, default_value = "orange")]
    pub theme: String,

    /// Size of the served card
    #[arg(long, default_value = "md")]
    pub size: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL generated snippets and iframe tags point at
    ///
    /// Falls back to the bind address, with the wildcard host swapped for
    /// localhost so pasted snippets stay clickable.
    pub fn public_base_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let host = if self.host == "0.0.0.0" {
                    "localhost"
                } else {
                    &self.host
                };
                format!("http://{}:{}", host, self.port)
            }
        }
    }

    /// The card the server starts ticking, demo defaults overridden by flags
    pub fn demo_card(&self, now: DateTime<Utc>) -> CardConfig {
        let mut card = CardConfig::demo(now);
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(date) = &self.date {
            card.target = date.clone();
        }
        if let Some(expired_text) = &self.expired_text {
            card.expired_text = expired_text.clone();
        }
        card.theme = ThemeId::from_param(&self.theme);
        card.size = SizeId::from_param(&self.size);
        card
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::DEFAULT_TITLE;

    #[test]
    fn defaults_bind_every_interface_on_8787() {
        let config = Config::try_parse_from(["countdown-card"]).unwrap();
        assert_eq!(config.port, 8787);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.address(), "0.0.0.0:8787");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn wildcard_host_becomes_localhost_in_the_public_url() {
        let config = Config::try_parse_from(["countdown-card"]).unwrap();
        assert_eq!(config.public_base_url(), "http://localhost:8787");
    }

    #[test]
    fn explicit_public_url_loses_its_trailing_slash() {
        let config = Config::try_parse_from([
            "countdown-card",
            "--public-url",
            "https://cards.example.com/",
        ])
        .unwrap();
        assert_eq!(config.public_base_url(), "https://cards.example.com");
    }

    #[test]
    fn card_flags_override_the_demo_card() {
        let config = Config::try_parse_from([
            "countdown-card",
            "--title",
            "Launch",
            "--date",
            "2026-12-31T23:59",
            "--theme",
            "dark",
            "--size",
            "lg",
        ])
        .unwrap();
        let card = config.demo_card(Utc::now());
        assert_eq!(card.title, "Launch");
        assert_eq!(card.target, "2026-12-31T23:59");
        assert_eq!(card.theme, ThemeId::Dark);
        assert_eq!(card.size, SizeId::Lg);
    }

    #[test]
    fn demo_card_keeps_its_defaults_without_flags() {
        let config = Config::try_parse_from(["countdown-card"]).unwrap();
        let card = config.demo_card(Utc::now());
        assert_eq!(card.title, DEFAULT_TITLE);
        assert!(card.target.ends_with("T23:59"));
        assert_eq!(card.theme, ThemeId::Orange);
    }

    #[test]
    fn verbose_raises_the_log_level() {
        let config = Config::try_parse_from(["countdown-card", "-v"]).unwrap();
        assert_eq!(config.log_level(), "debug");
    }
}
