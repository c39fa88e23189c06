//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::card::CardConfig;
use crate::countdown::CountdownSnapshot;
use crate::embed::EmbedForm;

/// API response structure for card update endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub card: CardConfig,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, card: CardConfig) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            card,
        }
    }

    /// Create an updated response
    pub fn updated(message: String, card: CardConfig) -> Self {
        Self::new("updated".to_string(), message, card)
    }
}

/// Generated embed code for one card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetResponse {
    pub form: EmbedForm,
    pub snippet: String,
    /// Suggested frame height, present for the iframe form only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

impl SnippetResponse {
    /// Create a new snippet response
    pub fn new(form: EmbedForm, snippet: String, frame_height: Option<u32>) -> Self {
        Self {
            form,
            snippet,
            frame_height,
            timestamp: Utc::now(),
        }
    }
}

/// The served card together with its live numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub card: CardConfig,
    pub countdown: CountdownSnapshot,
    pub timestamp: DateTime<Utc>,
}

/// Enhanced status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub card: CardConfig,
    pub countdown: CountdownSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub public_url: String,
    pub last_update: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
