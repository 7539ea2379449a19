//! String literals for embedding Markdown inside inline scripts.

/// Encode `text` as a JSON string literal that is safe inside `<script>`.
///
/// The result is valid JSON and a valid JavaScript expression. `<`, `>` and
/// `&` are written as `\u` escapes so body text such as `</script>` or
/// `<!--` cannot end the enclosing element early. U+2028 and U+2029 are
/// escaped as well since older engines reject them raw inside literals.
pub fn escape_for_script(text: &str) -> String {
    let json = serde_json::Value::String(text.to_owned()).to_string();

    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Decode a literal produced by [`escape_for_script`].
pub fn decode_script_literal(literal: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str(literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn round_trip(text: &str) {
        let literal = escape_for_script(text);
        assert_eq!(decode_script_literal(&literal).unwrap(), text);
    }

    #[test]
    fn round_trips_tricky_text() {
        round_trip("");
        round_trip("plain");
        round_trip("\"double\" and 'single' quotes");
        round_trip("back\\slash \\n not a newline");
        round_trip("line one\nline two\r\n\ttabbed");
        round_trip("📖 Documentación ✅ 🏗️");
        round_trip("</script><script>alert(1)</script>");
        round_trip("a & b <!-- c --> d");
        round_trip("sep\u{2028}par\u{2029}end");
        round_trip("\u{0}\u{1f} control");
        round_trip("```mermaid\ngraph TD\n  A-->B\n```");
    }

    #[test]
    fn literal_is_quoted_json() {
        assert_eq!(escape_for_script(""), "\"\"");
        assert_eq!(escape_for_script("a\"b\n"), r#""a\"b\n""#);
    }

    #[test]
    fn never_emits_markup_characters() {
        let literal = escape_for_script("</script> & <b>bold</b>");

        assert!(!literal.contains('<'));
        assert!(!literal.contains('>'));
        assert!(!literal.contains('&'));
        assert!(literal.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn escapes_line_separators() {
        let literal = escape_for_script("a\u{2028}b\u{2029}c");

        assert_eq!(literal, r#""a\u2028b\u2029c""#);
    }

    #[test]
    fn escaped_backslash_before_angle_bracket_survives() {
        round_trip("\\<tag\\>");
    }
}
