use std::borrow::Cow;

use regex::{NoExpand, Regex};

/// Default placeholder located in the index document.
pub const DEFAULT_PLACEHOLDER: &str = "<!--app-html-->";

/// Marker inside the index document that is replaced with injected content.
#[derive(Debug, Clone)]
pub enum Placeholder {
    /// Replace every occurrence of this exact string.
    Literal(String),
    /// Replace regex matches. With `global` unset, only the first match is replaced.
    Pattern {
        /// Expression to search for.
        regex: Regex,
        /// Whether to replace all non-overlapping matches.
        global: bool,
    },
}

impl Placeholder {
    /// Placeholder matching an exact string.
    pub fn literal(value: impl Into<String>) -> Self {
        Placeholder::Literal(value.into())
    }

    /// Placeholder replacing all matches of `regex`.
    pub fn pattern(regex: Regex) -> Self {
        Placeholder::Pattern {
            regex,
            global: true,
        }
    }

    /// Placeholder replacing only the first match of `regex`.
    pub fn first_match(regex: Regex) -> Self {
        Placeholder::Pattern {
            regex,
            global: false,
        }
    }

    /// Replace the placeholder in `document` with `content`.
    ///
    /// `content` is inserted verbatim; `$` has no special meaning. An empty literal matches
    /// nothing.
    pub fn replace<'a>(&self, document: &'a str, content: &str) -> Cow<'a, str> {
        match self {
            Placeholder::Literal(needle) => {
                if needle.is_empty() || !document.contains(needle.as_str()) {
                    Cow::Borrowed(document)
                } else {
                    Cow::Owned(document.replace(needle.as_str(), content))
                }
            }
            Placeholder::Pattern { regex, global: true } => {
                regex.replace_all(document, NoExpand(content))
            }
            Placeholder::Pattern {
                regex,
                global: false,
            } => regex.replace(document, NoExpand(content)),
        }
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Placeholder::literal(DEFAULT_PLACEHOLDER)
    }
}

impl From<&str> for Placeholder {
    fn from(value: &str) -> Self {
        Placeholder::literal(value)
    }
}

impl From<String> for Placeholder {
    fn from(value: String) -> Self {
        Placeholder::Literal(value)
    }
}

impl From<Regex> for Placeholder {
    fn from(regex: Regex) -> Self {
        Placeholder::pattern(regex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_replaces_every_occurrence() {
        let doc = "<head><!--X--></head><body><!--X--><!--X--></body>";
        let out = Placeholder::literal("<!--X-->").replace(doc, "<p>hi</p>");
        assert_eq!(out.matches("<p>hi</p>").count(), 3);
        assert!(!out.contains("<!--X-->"));
    }

    #[test]
    fn literal_without_match_borrows() {
        let out = Placeholder::default().replace("<html></html>", "x");
        assert!(matches!(out, Cow::Borrowed("<html></html>")));
    }

    #[test]
    fn empty_literal_matches_nothing() {
        let out = Placeholder::literal("").replace("abc", "x");
        assert_eq!(out, "abc");
    }

    #[test]
    fn pattern_replaces_all_matches() {
        let regex = Regex::new(r"<!--\s*ssr:\w+\s*-->").unwrap();
        let doc = "<!-- ssr:head --><div><!--ssr:body--></div>";
        let out = Placeholder::pattern(regex).replace(doc, "Z");
        assert_eq!(out, "Z<div>Z</div>");
    }

    #[test]
    fn first_match_replaces_once() {
        let regex = Regex::new("@@").unwrap();
        let out = Placeholder::first_match(regex).replace("@@ and @@", "x");
        assert_eq!(out, "x and @@");
    }

    #[test]
    fn content_is_not_expanded() {
        let regex = Regex::new("(X)").unwrap();
        let out = Placeholder::pattern(regex).replace("aXb", "$1$0");
        assert_eq!(out, "a$1$0b");
    }
}
