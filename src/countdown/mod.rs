//! Countdown engine
//!
//! Pure time decomposition and target parsing. Everything here is free of
//! I/O so each piece can be pinned down with fixed instants in tests.

pub mod snapshot;
pub mod target;
pub mod units;

// Re-export main types
pub use snapshot::CountdownSnapshot;
pub use target::parse_target;
pub use units::TimeUnit;
