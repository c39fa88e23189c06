//! State management module
//!
//! This module contains the shared application state and its management logic.

pub mod app_state;

// Re-export main types
pub use app_state::AppState;
