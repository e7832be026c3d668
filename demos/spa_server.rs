// This demo serves a built SPA bundle from `dist/`, or the directory given as the first argument.
//
// Run `cargo run --example spa_server -- path/to/dist`, then
// point your browser to http://localhost:3000/

use std::env;

use hyper::header::{self, HeaderValue};
use hyper::server::conn::http1;
use hyper::HeaderMap;
use hyper_spa::{BoxError, Spa, DEFAULT_ROOT};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let root = env::args().nth(1).unwrap_or_else(|| DEFAULT_ROOT.to_owned());
    let handler = Spa::new(root)
        .disabled(env::var_os("SPA_DISABLED").is_some())
        .injector(|ctx| async move {
            Ok::<_, BoxError>(format!("<noscript>{}</noscript>", ctx.url.path()))
        })
        .headers(|ctx| async move {
            let mut headers = HeaderMap::new();
            let cache = if ctx.file.is_index {
                "no-cache"
            } else {
                "public, max-age=31536000, immutable"
            };
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(cache));
            Ok::<_, BoxError>(headers)
        })
        .handler()
        .await?;

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;
    info!("spa server running on http://localhost:3000/");

    loop {
        let (stream, peer) = listener.accept().await?;
        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), handler)
                .await
            {
                warn!(%peer, "connection error: {}", err);
            }
        });
    }
}
