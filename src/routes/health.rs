use axum::response::Html;

/// Liveness probe
///
/// Returns 200 with `OK` as long as the process can answer HTTP.
pub async fn healthz() -> Html<&'static str> {
    Html("OK")
}

/// Readiness probe
///
/// There are no dependencies to wait on, so the service is ready once bound.
pub async fn ready() -> Html<&'static str> {
    Html("READY")
}
