//! Middleware pipeline applied in front of every route.
//!
//! Attached once by [`startup::app`](crate::server::startup::app) before the server
//! starts listening:
//!
//! - **Body limit** - JSON and URL-encoded bodies are parsed by axum's `Json` and `Form`
//!   extractors; the limit caps what they will buffer
//! - **CORS** (`cors`) - any origin, the common REST methods, request headers mirrored
//! - **Security headers** (`security`) - hardening headers on every response
//! - **Access log** - one INFO span and event per request via `TraceLayer`

pub mod cors;
pub mod security;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Largest request body the extractors will accept (100 KiB).
pub const MAX_BODY_SIZE: usize = 100 * 1024;

/// Wraps `router` in the full middleware pipeline.
///
/// Layers added later run first, so the access log sees every request including
/// ones rejected by CORS or the body limit.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let router = router
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors::layer());

    security::apply(router).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

#[cfg(test)]
mod test;
