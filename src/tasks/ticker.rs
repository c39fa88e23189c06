//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that recomputes the served card's snapshot once a second
///
/// Watchers read the result through the state's snapshot channel. When the
/// card is replaced the interval restarts and a fresh snapshot goes out
/// immediately rather than on the next tick.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting countdown ticker task");

    let mut card_rx = state.card_change_tx.subscribe();
    let mut card = match state.card() {
        Ok(card) => card,
        Err(e) => {
            error!("Failed to read card at ticker start: {}", e);
            return;
        }
    };
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    let mut was_expired = state.latest_snapshot().expired;

    loop {
        tokio::select! {
            // Timer tick - publish a fresh snapshot
            _ = interval.tick() => {
                let snapshot = card.snapshot_at(Utc::now());
                if snapshot.expired && !was_expired {
                    info!("Countdown '{}' reached its target", card.title);
                }
                was_expired = snapshot.expired;
                state.publish_snapshot(snapshot);
            }

            // Card replaced - tick the new card right away
            result = card_rx.recv() => {
                match result {
                    Ok(new_card) => {
                        debug!("Ticker received card change: targeting '{}'", new_card.target);
                        card = new_card;
                        interval = tokio::time::interval(Duration::from_secs(1));
                        let snapshot = card.snapshot_at(Utc::now());
                        was_expired = snapshot.expired;
                        state.publish_snapshot(snapshot);
                    }
                    Err(e) => {
                        error!("Error receiving card change: {}", e);
                        // Wait a bit before retrying
                        sleep(Duration::from_secs(1)).await;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardConfig;
    use tokio::time::timeout;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(
            8787,
            "127.0.0.1".to_string(),
            "http://localhost:8787".to_string(),
            CardConfig {
                target: "2099-01-01T00:00".to_string(),
                ..CardConfig::default()
            },
        ))
    }

    #[tokio::test]
    async fn publishes_a_snapshot_within_a_second() {
        let state = state();
        let mut rx = state.snapshot_tx.subscribe();
        tokio::spawn(ticker_task(Arc::clone(&state)));

        timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("ticker should publish promptly")
            .unwrap();
        assert!(!state.latest_snapshot().expired);
    }

    #[tokio::test]
    async fn card_change_publishes_without_waiting_for_the_next_tick() {
        let state = state();
        let mut rx = state.snapshot_tx.subscribe();
        tokio::spawn(ticker_task(Arc::clone(&state)));

        timeout(Duration::from_secs(2), rx.changed())
            .await
            .expect("ticker should publish promptly")
            .unwrap();

        state
            .set_card(CardConfig {
                target: "2000-01-01T00:00".to_string(),
                ..CardConfig::default()
            })
            .unwrap();

        timeout(Duration::from_secs(2), async {
            loop {
                rx.changed().await.unwrap();
                if state.latest_snapshot().expired {
                    break;
                }
            }
        })
        .await
        .expect("replaced card should be ticked immediately");
    }
}
