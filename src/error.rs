use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while building or running an SPA handler.
///
/// `Load`, `MissingIndex` and `Pattern` only happen during `Spa::handler`, before any request is
/// served. `Callback` is the only error a request can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// The root directory, or a file below it, could not be read.
    #[error("failed to load {}: {source}", .path.display())]
    Load {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: IoError,
    },

    /// No loaded file matched the index filename.
    #[error("index file {index:?} not found under {} (missing or excluded by pattern)", .root.display())]
    MissingIndex {
        /// The configured index filename.
        index: String,
        /// The root directory that was scanned.
        root: PathBuf,
    },

    /// The match pattern is not a valid glob.
    #[error("invalid match pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// An injector or headers callback failed.
    #[error("callback failed: {0}")]
    Callback(#[source] BoxError),
}
