pub mod health;
pub mod root;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the route table.
///
/// Paths match exactly. Unknown paths fall through to axum's 404 and wrong
/// methods on known paths to its 405.
pub fn build_router() -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/ready", get(health::ready))
        .route("/", get(root::index))
        .layer(TraceLayer::new_for_http())
}
