use std::fmt;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use http::{Request, Response};
use hyper::body::Bytes;
use hyper::service::Service;
use tracing::trace;

use crate::context::{HeaderProvider, IndexInjector, RequestContext};
use crate::error::Error;
use crate::placeholder::Placeholder;
use crate::response::{file_response, DisabledResponse};
use crate::table::FileTable;
use crate::util::{lookup_key, Body};

/// Future returned by `SpaHandler::serve`.
pub type ResponseFuture = BoxFuture<'static, Result<Response<Body>, Error>>;

pub(crate) enum Mode {
    Disabled(DisabledResponse),
    Serving(Serving),
}

pub(crate) struct Serving {
    pub table: FileTable,
    pub placeholder: Placeholder,
    pub injector: Option<Arc<dyn IndexInjector>>,
    pub headers: Option<Arc<dyn HeaderProvider>>,
}

/// Request handler serving a loaded SPA bundle.
///
/// Created by `Spa::handler`. Clones share the same file table.
///
/// Requests for a loaded file get that file's bytes. Every other path, and the index document
/// itself, gets the index document, passed through the injector if one is configured.
///
/// This struct also implements the `hyper::service::Service` trait, which simply wraps
/// `SpaHandler::serve`.
#[derive(Clone)]
pub struct SpaHandler {
    mode: Arc<Mode>,
}

impl SpaHandler {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode: Arc::new(mode),
        }
    }

    /// The loaded files, or `None` if the handler is disabled.
    pub fn table(&self) -> Option<&FileTable> {
        match *self.mode {
            Mode::Disabled(_) => None,
            Mode::Serving(ref serving) => Some(&serving.table),
        }
    }

    /// Whether this handler was built in disabled mode.
    pub fn is_disabled(&self) -> bool {
        matches!(*self.mode, Mode::Disabled(_))
    }

    /// Serve a request.
    ///
    /// Only the request head is used; the body is dropped right away.
    pub fn serve<B>(&self, request: Request<B>) -> ResponseFuture {
        let (parts, _) = request.into_parts();
        let request = Request::from_parts(parts, ());
        let mode = self.mode.clone();
        async move { respond(&mode, request).await }.boxed()
    }
}

async fn respond(mode: &Mode, request: Request<()>) -> Result<Response<Body>, Error> {
    let serving = match *mode {
        Mode::Disabled(ref disabled) => {
            trace!(path = request.uri().path(), "disabled");
            return Ok(disabled.to_response());
        }
        Mode::Serving(ref serving) => serving,
    };

    let key = lookup_key(request.uri().path());
    let file = match serving.table.get(&key) {
        Some(file) if !file.is_index => {
            trace!(path = %key, "static");
            file.clone()
        }
        Some(file) => {
            trace!(path = %key, "index");
            file.clone()
        }
        None => {
            trace!(path = %key, "fallback");
            serving.table.index().clone()
        }
    };

    let context = RequestContext {
        url: request.uri().clone(),
        request: Arc::new(request),
        file: file.clone(),
    };

    let body = match serving.injector {
        Some(ref injector) if file.is_index => {
            let content = injector
                .inject(context.clone())
                .await
                .map_err(Error::Callback)?;
            let text = file.text();
            Bytes::from(serving.placeholder.replace(&text, &content).into_owned())
        }
        _ => file.content.clone(),
    };

    let mut res = file_response(&file, body);
    if let Some(ref headers) = serving.headers {
        let extra = headers.headers(context).await.map_err(Error::Callback)?;
        res.headers_mut().extend(extra);
    }
    Ok(res)
}

impl<B> Service<Request<B>> for SpaHandler {
    type Response = Response<Body>;
    type Error = Error;
    type Future = ResponseFuture;

    fn call(&self, request: Request<B>) -> Self::Future {
        self.serve(request)
    }
}

impl fmt::Debug for SpaHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.mode {
            Mode::Disabled(ref disabled) => f
                .debug_struct("SpaHandler")
                .field("disabled", disabled)
                .finish(),
            Mode::Serving(ref serving) => f
                .debug_struct("SpaHandler")
                .field("files", &serving.table.len())
                .field("placeholder", &serving.placeholder)
                .field("injector", &serving.injector.is_some())
                .field("headers", &serving.headers.is_some())
                .finish(),
        }
    }
}
