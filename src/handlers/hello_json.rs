use crate::models::GreetingResponse;
use axum::{Json, http::StatusCode};

/// GET /hello handler - JSON greeting
///
/// Always returns 200 with the fixed `{"code": 200, "result": "Hello World!"}`
/// payload. The handler is infallible: it performs no I/O and reads no state.
pub async fn hello_json_handler() -> (StatusCode, Json<GreetingResponse>) {
    (StatusCode::OK, Json(GreetingResponse::hello_world()))
}
