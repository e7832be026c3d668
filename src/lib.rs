#![crate_name = "hyper_spa"]
#![deny(missing_docs)]

//! Single-page-application serving for [Hyper 1.0](https://github.com/hyperium/hyper).
//!
//! A `Spa` holds the settings. Calling `Spa::handler` walks the root directory once, reads every
//! file matching the glob pattern into memory, and returns a `SpaHandler`. The handler answers
//! requests from memory only:
//!
//! - A path matching a loaded file returns that file's bytes and `Content-Type`.
//! - Any other path, and the index document itself, returns the index document.
//!
//! ## Basic usage
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), hyper_spa::Error> {
//! // Load everything under `dist/`, falling back to `dist/index.html`.
//! let handler = hyper_spa::Spa::new("dist/").handler().await?;
//!
//! // A dummy request, but normally obtained from Hyper.
//! let request = http::Request::get("/some/client/route")
//!     .body(())
//!     .unwrap();
//!
//! // Serve the request. Returns a future for a `http::Response`.
//! let response = handler.serve(request).await?;
//! # Ok(())
//! # }
//! ```
//!
//! `SpaHandler` is cheap to clone and implements `hyper::service::Service`, so it can be passed
//! to a Hyper connection directly.
//!
//! ## Injection
//!
//! An injector callback can rewrite a placeholder in the index document per request, for example
//! to splice in server-rendered markup:
//!
//! ```rust,no_run
//! use hyper_spa::{BoxError, Spa};
//!
//! # async fn run() -> Result<(), hyper_spa::Error> {
//! let handler = Spa::new("dist/")
//!     .placeholder("<!--app-html-->")
//!     .injector(|ctx| async move {
//!         Ok::<_, BoxError>(format!("<p>rendered {}</p>", ctx.url.path()))
//!     })
//!     .handler()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Without an injector, the index document is served byte for byte.
//!
//! ## Disabled mode
//!
//! With `Spa::disabled(true)`, nothing is loaded and every request gets the configured
//! `DisabledResponse` (by default `501 Not Implemented`).

mod context;
mod error;
mod handler;
mod loader;
mod placeholder;
mod response;
mod spa;
mod table;
mod util;

pub use crate::context::*;
pub use crate::error::*;
pub use crate::handler::{ResponseFuture, SpaHandler};
pub use crate::placeholder::*;
pub use crate::response::DisabledResponse;
pub use crate::spa::*;
pub use crate::table::{FileRecord, FileTable};
pub use crate::util::Body;
