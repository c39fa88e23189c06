//! Embed code generation module
//!
//! This module turns a card configuration into publishable embeds: the
//! shared markup builders, the two snippet forms, the hosted page, and the
//! query contract the reference form rides on.

pub mod escape;
pub mod id;
pub mod markup;
pub mod page;
pub mod query;
pub mod snippet;

// Re-export main types
pub use page::embed_page;
pub use query::EmbedQuery;
pub use snippet::{embed_snippet, html_snippet, iframe_snippet, EmbedForm};
