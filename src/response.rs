use http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use hyper::body::Bytes;

use crate::table::FileRecord;
use crate::util::Body;

/// The fixed response served by a disabled handler.
///
/// Stored as plain data and turned into a fresh `Response` on every request.
#[derive(Debug, Clone)]
pub struct DisabledResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl DisabledResponse {
    /// A plain-text response with the given status and body.
    pub fn text(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Build a new `Response` from this value.
    pub fn to_response(&self) -> Response<Body> {
        let mut res = Response::new(Body::Full(self.body.clone()));
        *res.status_mut() = self.status;
        *res.headers_mut() = self.headers.clone();
        res
    }
}

impl Default for DisabledResponse {
    /// `501 Not Implemented` with the body `disabled`.
    fn default() -> Self {
        Self::text(StatusCode::NOT_IMPLEMENTED, "disabled")
    }
}

/// Build a `200 OK` for a file, with the file's `Content-Type` and the given body.
pub(crate) fn file_response(file: &FileRecord, body: Bytes) -> Response<Body> {
    let mut res = Response::new(Body::Full(body));
    res.headers_mut()
        .insert(header::CONTENT_TYPE, file.content_type.clone());
    res
}
