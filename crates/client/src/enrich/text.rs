//! Title and snippet cleanup.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Replace every whitespace run with a single space. Does not trim.
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Decode the handful of entities Google leaves in titles, then tidy whitespace.
pub fn clean_title(title: &str) -> String {
    let decoded = title
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ");
    collapse_whitespace(&decoded).trim().to_string()
}

/// Decode `&nbsp;`, tidy whitespace, and drop one trailing `...`.
pub fn clean_snippet(snippet: &str) -> String {
    let collapsed = collapse_whitespace(&snippet.replace("&nbsp;", " "));
    collapsed.strip_suffix("...").unwrap_or(&collapsed).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title_entities() {
        assert_eq!(clean_title("Test &amp; Example"), "Test & Example");
        assert_eq!(clean_title("&quot;quoted&quot; &lt;tag&gt;"), "\"quoted\" <tag>");
    }

    #[test]
    fn test_clean_title_whitespace() {
        assert_eq!(clean_title("  Spaced&nbsp;&nbsp;out\n title  "), "Spaced out title");
    }

    #[test]
    fn test_clean_title_decodes_once() {
        assert_eq!(clean_title("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_clean_snippet() {
        assert_eq!(clean_snippet("This is a test&nbsp;snippet..."), "This is a test snippet");
    }

    #[test]
    fn test_clean_snippet_single_ellipsis_only() {
        assert_eq!(clean_snippet("wait......"), "wait...");
        assert_eq!(clean_snippet("no ellipsis here"), "no ellipsis here");
        assert_eq!(clean_snippet("middle ... stays"), "middle ... stays");
    }

    #[test]
    fn test_clean_snippet_ellipsis_must_be_at_end() {
        assert_eq!(clean_snippet("ends with space... "), "ends with space...");
        assert_eq!(clean_snippet("word ..."), "word");
    }

    #[test]
    fn test_clean_snippet_keeps_other_entities() {
        assert_eq!(clean_snippet("a &amp; b"), "a &amp; b");
    }
}
