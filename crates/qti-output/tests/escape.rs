//! Property tests for XML escaping.

use proptest::prelude::*;
use qti_output::escape_xml;

fn unescape(text: &str) -> String {
    text.replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn escaping_is_reversible(text in ".*") {
        prop_assert_eq!(unescape(&escape_xml(&text)), text);
    }

    #[test]
    fn escaped_text_has_no_markup(text in ".*") {
        let escaped = escape_xml(&text);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }
}
