//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc, time::Duration};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Html, Json,
    },
};
use chrono::Utc;
use futures::stream::{self, Stream};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::{
    card::CardConfig,
    embed::{embed_page, embed_snippet, EmbedForm, EmbedQuery},
    state::AppState,
    style::SizeSpec,
};
use super::responses::{
    ApiResponse, CountdownResponse, HealthResponse, SnippetResponse, StatusResponse,
};

/// Request body for snippet generation: the embed form plus the card fields
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetRequest {
    #[serde(default)]
    pub form: EmbedForm,
    #[serde(flatten)]
    pub card: CardConfig,
}

/// Handle GET /embed - Hosted page the iframe form points at
pub async fn embed_page_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EmbedQuery>,
) -> Html<String> {
    let config = query.into_config();
    if !config.target.is_empty() && config.target_instant().is_none() {
        warn!("Embed page requested with unparseable date '{}'", config.target);
    }
    Html(embed_page(&config, &state.public_url))
}

/// Handle GET /embed/live - Per-second snapshot stream for one card
///
/// Each connection gets its own countdown computed from the query, so a
/// page can watch any card without touching the served one. The stream
/// keeps emitting after expiry, mirroring the embedded script.
pub async fn embed_live_handler(
    Query(query): Query<EmbedQuery>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let config = query.into_config();
    if !config.target.is_empty() && config.target_instant().is_none() {
        warn!("Live stream requested with unparseable date '{}'", config.target);
    }

    let interval = tokio::time::interval(Duration::from_secs(1));
    let stream = stream::unfold((config, interval), |(config, mut interval)| async move {
        interval.tick().await;
        let snapshot = config.snapshot_at(Utc::now());
        let event = Event::default().json_data(snapshot).unwrap_or_else(|e| {
            error!("Failed to encode snapshot event: {}", e);
            Event::default().data("{}")
        });
        Some((Ok(event), (config, interval)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Handle POST /api/snippet - Generate embed code for a card
pub async fn snippet_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SnippetRequest>,
) -> Json<SnippetResponse> {
    let SnippetRequest { form, card } = request;
    if !card.target.is_empty() && card.target_instant().is_none() {
        warn!("Snippet requested with unparseable date '{}'", card.target);
    }

    let snippet = embed_snippet(form, &card, &state.public_url);
    let frame_height = match form {
        EmbedForm::Iframe => Some(SizeSpec::of(card.size).frame_height),
        EmbedForm::Html => None,
    };

    info!("Generated {} snippet for '{}'", form.as_str(), card.title);
    Json(SnippetResponse::new(form, snippet, frame_height))
}

/// Handle GET /api/countdown - The served card and its latest numbers
pub async fn countdown_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CountdownResponse>, StatusCode> {
    let card = match state.card() {
        Ok(card) => card,
        Err(e) => {
            error!("Failed to get card config: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(CountdownResponse {
        card,
        countdown: state.latest_snapshot(),
        timestamp: Utc::now(),
    }))
}

/// Handle POST /api/countdown - Replace the served card
pub async fn set_countdown_handler(
    State(state): State<Arc<AppState>>,
    Json(card): Json<CardConfig>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.set_card(card) {
        Ok(card) => {
            info!("Countdown endpoint called - served card replaced");
            Ok(Json(ApiResponse::updated(
                "Card configuration replaced".to_string(),
                card,
            )))
        }
        Err(e) => {
            error!("Failed to replace card: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let card = match state.card() {
        Ok(card) => card,
        Err(e) => {
            error!("Failed to get card config: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(StatusResponse {
        card,
        countdown: state.latest_snapshot(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        public_url: state.public_url.clone(),
        last_update: state.get_last_update(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
