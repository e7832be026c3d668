use std::future::Future;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use http::{HeaderMap, Request, Uri};

use crate::error::BoxError;
use crate::table::FileRecord;

/// Information passed to callbacks for a single request.
///
/// Cheap to clone. The request body is not available; only the request head.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The request URL.
    pub url: Uri,
    /// The request head.
    pub request: Arc<Request<()>>,
    /// The file being served. For fallback requests this is the index document.
    pub file: Arc<FileRecord>,
}

/// Produces the content that replaces the placeholder in the index document.
///
/// Implemented for any `Fn(RequestContext) -> impl Future<Output = Result<String, BoxError>>`.
pub trait IndexInjector: Send + Sync + 'static {
    /// Produce the replacement for this request.
    fn inject(&self, context: RequestContext) -> BoxFuture<'static, Result<String, BoxError>>;
}

impl<F, Fut> IndexInjector for F
where
    F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, BoxError>> + Send + 'static,
{
    fn inject(&self, context: RequestContext) -> BoxFuture<'static, Result<String, BoxError>> {
        self(context).boxed()
    }
}

/// Produces extra response headers, merged over the default `Content-Type`.
///
/// Implemented for any `Fn(RequestContext) -> impl Future<Output = Result<HeaderMap, BoxError>>`.
pub trait HeaderProvider: Send + Sync + 'static {
    /// Produce headers for this request.
    fn headers(&self, context: RequestContext) -> BoxFuture<'static, Result<HeaderMap, BoxError>>;
}

impl<F, Fut> HeaderProvider for F
where
    F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HeaderMap, BoxError>> + Send + 'static,
{
    fn headers(&self, context: RequestContext) -> BoxFuture<'static, Result<HeaderMap, BoxError>> {
        self(context).boxed()
    }
}
