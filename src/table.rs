use std::borrow::Cow;
use std::collections::hash_map::{HashMap, Values};
use std::sync::Arc;

use http::HeaderValue;
use hyper::body::Bytes;
use mime_guess::{mime, Mime};

/// A file loaded into memory.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Canonical request path, always starting with `/`.
    pub path: String,
    /// Detected `Content-Type`.
    pub content_type: HeaderValue,
    /// File contents.
    pub content: Bytes,
    /// Whether this is the index document.
    pub is_index: bool,
}

impl FileRecord {
    /// Content as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Guess the `Content-Type` for a relative path from its extension.
pub(crate) fn content_type_for(relative: &str) -> HeaderValue {
    let mime = mime_guess::from_path(relative).first_or_octet_stream();
    let value = if is_textual(&mime) && mime.get_param(mime::CHARSET).is_none() {
        format!("{}; charset=utf-8", mime.essence_str())
    } else {
        mime.to_string()
    };
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"))
}

fn is_textual(mime: &Mime) -> bool {
    mime.type_() == mime::TEXT
        || mime.subtype() == mime::JAVASCRIPT
        || mime.subtype() == mime::JSON
}

/// Immutable map from canonical request path to loaded file.
///
/// Built once by the loader. Always contains exactly one index record.
#[derive(Debug)]
pub struct FileTable {
    files: HashMap<String, Arc<FileRecord>>,
    index: Arc<FileRecord>,
}

impl FileTable {
    pub(crate) fn new(files: HashMap<String, Arc<FileRecord>>, index: Arc<FileRecord>) -> Self {
        Self { files, index }
    }

    /// Look up a record by canonical request path.
    pub fn get(&self, path: &str) -> Option<&Arc<FileRecord>> {
        self.files.get(path)
    }

    /// The index document.
    pub fn index(&self) -> &Arc<FileRecord> {
        &self.index
    }

    /// Number of loaded files, including the index.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always false for a constructed table, since the index is required.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate all records in arbitrary order.
    pub fn iter(&self) -> Values<'_, String, Arc<FileRecord>> {
        self.files.values()
    }
}
