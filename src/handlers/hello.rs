use axum::http::StatusCode;

/// GET /hello handler - plain-text greeting
pub async fn hello_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hello!\n")
}
