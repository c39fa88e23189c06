//! The hosted embed page
//!
//! Served at `/embed` and framed by iframe snippets. A complete document
//! that centers one card and runs the same tick script the self-contained
//! snippet carries, so both forms stay visually identical.

use crate::card::CardConfig;
use crate::embed::id::random_suffix;
use crate::embed::markup::{card_markup, tick_script};
use crate::style::Theme;

/// Render the full document for one card.
pub fn embed_page(config: &CardConfig, base_url: &str) -> String {
    let theme = Theme::of(config.theme);
    let id = random_suffix();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Countdown Timer</title>
</head>
<body style="margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;background:{bg};padding:8px">
{card}
{script}
</body>
</html>
"#,
        bg = theme.bg,
        card = card_markup(config, &id, base_url),
        script = tick_script(config, &id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ThemeId;

    #[test]
    fn renders_a_complete_document() {
        let config = CardConfig {
            title: "Launch".to_string(),
            target: "2026-12-31T23:59".to_string(),
            ..CardConfig::default()
        };
        let page = embed_page(&config, "http://localhost:8787");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
        assert!(page.contains("<title>Countdown Timer</title>"));
        assert!(page.contains("background:transparent"));
        assert!(page.contains("<script>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn page_card_and_script_share_one_suffix() {
        let page = embed_page(&CardConfig::default(), "http://localhost:8787");
        let start = page.find("id=\"ct").unwrap() + 6;
        let suffix = &page[start..start + 6];
        assert!(page.contains(&format!("I=\"{}\"", suffix)));
    }

    #[test]
    fn every_theme_renders_without_panicking() {
        for theme in ThemeId::ALL {
            let config = CardConfig {
                theme,
                target: "2026-01-01T00:00".to_string(),
                ..CardConfig::default()
            };
            let page = embed_page(&config, "http://localhost:8787");
            assert!(page.contains("id=\"ct"));
        }
    }
}
