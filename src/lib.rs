//! Countdown Card - A self-hosted countdown widget server
//!
//! This library turns a card configuration into live-ticking embeds: a pure
//! countdown engine, themed snippet generation in two forms, and the HTTP
//! surface that hosts and updates the served card.

pub mod config;
pub mod countdown;
pub mod style;
pub mod card;
pub mod embed;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use card::CardConfig;
pub use config::Config;
pub use countdown::CountdownSnapshot;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
