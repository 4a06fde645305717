use super::*;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceExt;


/// Small router wrapped in the full pipeline.
///
/// - `GET /` answers "ok"
/// - `POST /echo` returns the request body as text
/// - `GET /framed` sets its own `X-Frame-Options`
fn test_router() -> Router {
    let routes = Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/echo", post(|body: String| async move { body }))
        .route(
            "/framed",
            get(|| async { ([(header::X_FRAME_OPTIONS, "DENY")], "framed").into_response() }),
        );

    apply(routes)
}

async fn send(request: Request<Body>) -> Response {
    test_router().oneshot(request).await.unwrap()
}
