use axum::response::Html;

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html("Hello from EKS WebApp!")
}
