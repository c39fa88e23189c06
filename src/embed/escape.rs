//! Escaping for generated markup
//!
//! Card text arrives from the outside and lands in two hand-built contexts:
//! HTML text/attribute positions and double-quoted JS string literals inside
//! inline scripts. Query-string escaping is serde_urlencoded's job and not
//! handled here.

/// Escape text for HTML text and double-quoted attribute positions.
pub fn html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted JS string literal in an inline script.
///
/// `</` must never appear in the output: the HTML parser would end the
/// surrounding script element there, well before the JS parser gets a say.
pub fn js(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '/' if out.ends_with('<') => out.push_str("\\/"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_passes_plain_text_through() {
        assert_eq!(html("早鳥優惠倒數 until 9/1"), "早鳥優惠倒數 until 9/1");
    }

    #[test]
    fn html_escapes_markup_characters() {
        assert_eq!(
            html(r#"<b class="x">Sale & more</b>"#),
            "&lt;b class=&quot;x&quot;&gt;Sale &amp; more&lt;/b&gt;"
        );
    }

    #[test]
    fn js_escapes_quotes_and_backslashes() {
        assert_eq!(js(r#"say "hi"\now"#), r#"say \"hi\"\\now"#);
    }

    #[test]
    fn js_never_emits_a_script_closer() {
        let out = js("</script><script>alert(1)</script>");
        assert!(!out.contains("</"));
    }

    #[test]
    fn js_escapes_newlines() {
        assert_eq!(js("a\nb\r"), "a\\nb\\r");
    }
}
