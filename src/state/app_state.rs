//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::card::CardConfig;
use crate::countdown::CountdownSnapshot;

/// Main application state shared by the API handlers and the ticker task
#[derive(Debug)]
pub struct AppState {
    /// The card currently being ticked and served as the demo
    pub card: Arc<Mutex<CardConfig>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Base URL generated snippets point at
    pub public_url: String,
    /// Last card replacement tracking
    pub last_update: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for card replacement notifications
    pub card_change_tx: broadcast::Sender<CardConfig>,
    /// Channel for per-second snapshot updates
    pub snapshot_tx: watch::Sender<CountdownSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<CountdownSnapshot>,
}

impl AppState {
    /// Create a new AppState ticking the given card
    pub fn new(port: u16, host: String, public_url: String, card: CardConfig) -> Self {
        let (card_change_tx, _) = broadcast::channel(16);
        let (snapshot_tx, snapshot_rx) = watch::channel(card.snapshot_at(Utc::now()));

        Self {
            card: Arc::new(Mutex::new(card)),
            start_time: Instant::now(),
            port,
            host,
            public_url,
            last_update: Arc::new(Mutex::new(None)),
            card_change_tx,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Get the current card configuration
    pub fn card(&self) -> Result<CardConfig, String> {
        self.card
            .lock()
            .map(|card| card.clone())
            .map_err(|e| format!("Failed to lock card config: {}", e))
    }

    /// Replace the card and notify the ticker
    ///
    /// Unparseable targets are accepted and logged; the card then renders
    /// as already expired until it is corrected.
    pub fn set_card(&self, card: CardConfig) -> Result<CardConfig, String> {
        if !card.target.is_empty() && card.target_instant().is_none() {
            warn!(
                "Card target '{}' does not parse; the card will render as expired",
                card.target
            );
        }

        let mut current = self
            .card
            .lock()
            .map_err(|e| format!("Failed to lock card config: {}", e))?;
        *current = card;
        let new_card = current.clone();
        drop(current);

        if let Ok(mut last_update) = self.last_update.lock() {
            *last_update = Some(Utc::now());
        }

        info!(
            "Card replaced: '{}' targeting '{}'",
            new_card.title, new_card.target
        );

        // Notify the ticker so it restarts its interval on the new card
        if let Err(e) = self.card_change_tx.send(new_card.clone()) {
            warn!("Failed to send card change notification: {}", e);
        }

        Ok(new_card)
    }

    /// Most recent snapshot published by the ticker
    pub fn latest_snapshot(&self) -> CountdownSnapshot {
        *self.snapshot_tx.borrow()
    }

    /// Publish a fresh snapshot to all watchers
    pub fn publish_snapshot(&self, snapshot: CountdownSnapshot) {
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to send snapshot update: {}", e);
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// When the card was last replaced, if ever
    pub fn get_last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update.lock().ok().and_then(|t| *t)
    }
}
