//! HTML Escaping
//!
//! Every officer-entered value written into cell markup or an attribute
//! goes through [`escape_html`].

/// Escape `& < > " '` for use in HTML text or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_chars() {
        assert_eq!(
            escape_html(r#"<script>&"'"#),
            "&lt;script&gt;&amp;&quot;&apos;"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("Jane Smith"), "Jane Smith");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("José Ødegård"), "José Ødegård");
    }

    #[test]
    fn test_ampersand_escaped_once() {
        // existing entities are text, not markup
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
