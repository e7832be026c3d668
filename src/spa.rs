use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use glob::Pattern;
use http::HeaderMap;
use tracing::info;

use crate::context::{HeaderProvider, IndexInjector, RequestContext};
use crate::error::{BoxError, Error};
use crate::handler::{Mode, Serving, SpaHandler};
use crate::loader;
use crate::placeholder::Placeholder;
use crate::response::DisabledResponse;

/// Default directory to load files from.
pub const DEFAULT_ROOT: &str = "dist";
/// Default glob pattern, matching every file recursively.
pub const DEFAULT_PATTERN: &str = "**/*";
/// Default index document.
pub const DEFAULT_INDEX: &str = "index.html";

/// Settings for building a `SpaHandler`.
///
/// This struct allows direct access to its fields, but these fields are typically initialized by
/// the accessors, using the builder pattern. Call `handler` to load the files and get a handler.
#[derive(Clone)]
pub struct Spa {
    /// The directory to load files from.
    pub root: PathBuf,
    /// Glob pattern selecting files, matched against the path relative to `root`.
    pub pattern: String,
    /// Path of the index document relative to `root`, compared exactly.
    pub index: String,
    /// Marker in the index document replaced by the injector's output.
    pub placeholder: Placeholder,
    /// Callback producing the placeholder replacement.
    pub injector: Option<Arc<dyn IndexInjector>>,
    /// Callback producing extra response headers.
    pub headers: Option<Arc<dyn HeaderProvider>>,
    /// When set, nothing is loaded and every request gets `disabled_response`.
    pub disabled: bool,
    /// Response for disabled mode.
    pub disabled_response: DisabledResponse,
}

impl Spa {
    /// Create settings for the given root directory, with defaults for everything else.
    ///
    /// If `Path::new("")` is given, files will be loaded from the current directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the glob pattern selecting which files to load.
    pub fn pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the index document filename.
    pub fn index(&mut self, index: impl Into<String>) -> &mut Self {
        self.index = index.into();
        self
    }

    /// Set the placeholder, either a string or a `regex::Regex`.
    pub fn placeholder(&mut self, placeholder: impl Into<Placeholder>) -> &mut Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the callback producing the content to inject into the index document.
    pub fn injector<F, Fut>(&mut self, injector: F) -> &mut Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
    {
        self.injector = Some(Arc::new(injector));
        self
    }

    /// Set the callback producing extra response headers.
    pub fn headers<F, Fut>(&mut self, headers: F) -> &mut Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HeaderMap, BoxError>> + Send + 'static,
    {
        self.headers = Some(Arc::new(headers));
        self
    }

    /// Enable or disable the handler.
    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }

    /// Set the response served in disabled mode.
    pub fn disabled_response(&mut self, response: DisabledResponse) -> &mut Self {
        self.disabled_response = response;
        self
    }

    /// Load the files and build a handler.
    ///
    /// All files are read before this returns. In disabled mode nothing is read and this cannot
    /// fail.
    pub async fn handler(&self) -> Result<SpaHandler, Error> {
        if self.disabled {
            info!("spa handler disabled, skipping load");
            return Ok(SpaHandler::new(Mode::Disabled(
                self.disabled_response.clone(),
            )));
        }

        let pattern = Pattern::new(&self.pattern)?;
        let table = loader::load(&self.root, &pattern, &self.index).await?;
        Ok(SpaHandler::new(Mode::Serving(Serving {
            table,
            placeholder: self.placeholder.clone(),
            injector: self.injector.clone(),
            headers: self.headers.clone(),
        })))
    }
}

impl Default for Spa {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            pattern: DEFAULT_PATTERN.to_owned(),
            index: DEFAULT_INDEX.to_owned(),
            placeholder: Placeholder::default(),
            injector: None,
            headers: None,
            disabled: false,
            disabled_response: DisabledResponse::default(),
        }
    }
}

impl fmt::Debug for Spa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spa")
            .field("root", &self.root)
            .field("pattern", &self.pattern)
            .field("index", &self.index)
            .field("placeholder", &self.placeholder)
            .field("injector", &self.injector.is_some())
            .field("headers", &self.headers.is_some())
            .field("disabled", &self.disabled)
            .field("disabled_response", &self.disabled_response)
            .finish()
    }
}
