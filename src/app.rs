use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{bye_handler, hello_handler, hello_json_handler};
use crate::routes;

/// Router for the JSON variant: GET /hello only.
///
/// The route table is built once here and never changes; anything outside
/// it falls through to axum's defaults (404 unknown path, 405 wrong method).
pub fn json_app() -> Router {
    Router::new()
        .route(routes::HELLO, get(hello_json_handler))
        .layer(TraceLayer::new_for_http())
}

/// Router for the plain-text variant: GET /hello and GET /bye.
pub fn plain_app() -> Router {
    Router::new()
        .route(routes::HELLO, get(hello_handler))
        .route(routes::BYE, get(bye_handler))
        .layer(TraceLayer::new_for_http())
}
