//! XML text escaping.

/// Escapes the five XML special characters.
///
/// Ampersands are replaced first so the entities introduced for the other
/// characters are never escaped twice.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_each_special_character() {
        assert_eq!(
            escape_xml(r#"a & b < c > d " e ' f"#),
            "a &amp; b &lt; c &gt; d &quot; e &apos; f"
        );
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_xml("Newton"), "Newton");
        assert_eq!(escape_xml(""), "");
    }
}
