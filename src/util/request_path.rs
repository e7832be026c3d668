use std::borrow::Cow;

/// Decode a request URL path into a `FileTable` lookup key.
///
/// Percent escapes are decoded, invalid UTF-8 is replaced. No other normalization happens, so
/// `/a/../b` stays as is and falls through to the index.
pub(crate) fn lookup_key(request_path: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(request_path).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_notation() {
        assert_eq!(lookup_key("/has%20space.html"), "/has space.html");
    }

    #[test]
    fn leaves_plain_paths_borrowed() {
        assert!(matches!(lookup_key("/app.js"), Cow::Borrowed("/app.js")));
    }

    #[test]
    fn does_not_normalize_dot_segments() {
        assert_eq!(lookup_key("/xxx/../index.html"), "/xxx/../index.html");
    }
}
