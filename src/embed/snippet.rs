//! Embed snippet generation
//!
//! Two publishable forms of the same card: a self-contained HTML+JS snippet
//! for pages that allow inline scripts, and an iframe tag pointing at the
//! hosted embed page for pages that strip them.

use serde::{Deserialize, Serialize};

use crate::card::CardConfig;
use crate::embed::id::random_suffix;
use crate::embed::markup::{card_markup, tick_script, ATTRIBUTION};
use crate::embed::query::EmbedQuery;
use crate::style::SizeSpec;

/// Which embed form to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedForm {
    #[default]
    Html,
    Iframe,
}

impl EmbedForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedForm::Html => "html",
            EmbedForm::Iframe => "iframe",
        }
    }
}

/// Generate the requested embed form for a card.
pub fn embed_snippet(form: EmbedForm, config: &CardConfig, base_url: &str) -> String {
    match form {
        EmbedForm::Html => html_snippet(config, base_url),
        EmbedForm::Iframe => iframe_snippet(config, base_url),
    }
}

/// Self-contained snippet: one comment header, the card markup, the tick
/// script. Needs no assets from this server once pasted.
pub fn html_snippet(config: &CardConfig, base_url: &str) -> String {
    html_snippet_with_id(config, base_url, &random_suffix())
}

fn html_snippet_with_id(config: &CardConfig, base_url: &str, id: &str) -> String {
    format!(
        "<!-- Countdown Timer - {} -->\n{}\n{}",
        ATTRIBUTION,
        card_markup(config, id, base_url),
        tick_script(config, id),
    )
}

/// Reference form: an iframe whose src carries the full card configuration
/// in its query string, sized to the card's frame height.
pub fn iframe_snippet(config: &CardConfig, base_url: &str) -> String {
    let query = EmbedQuery::from_config(config).to_query_string();
    let height = SizeSpec::of(config.size).frame_height;
    format!(
        concat!(
            r#"<iframe src="{base}/embed?{query}" "#,
            r#"style="border:none;width:100%;max-width:500px;height:{height}px" "#,
            r#"title="Countdown Timer"></iframe>"#,
        ),
        base = base_url,
        query = query,
        height = height,
    )
}
