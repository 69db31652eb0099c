use axum::http::StatusCode;

/// GET /bye handler - plain-text farewell
pub async fn bye_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Bye!\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_bye_status_and_body() {
        let app = Router::new().route(routes::BYE, get(bye_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/bye")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Bye!\n");
    }
}
