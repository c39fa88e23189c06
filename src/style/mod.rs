//! Visual presets
//!
//! Constant theme and size tables with permissive lookup. Unknown ids from
//! the wire resolve to the defaults (`orange`, `md`) by policy, never to an
//! error.

pub mod size;
pub mod theme;

// Re-export main types
pub use size::{SizeId, SizeSpec};
pub use theme::{Theme, ThemeId};
