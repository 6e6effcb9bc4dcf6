//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = match read_body(body).await {
        Ok(body_text) => body_text,
        Err(error) => {
            tracing::warn!("Could not read request body: {error}");
            return (StatusCode::BAD_REQUEST, "Could not read request body").into_response();
        }
    };
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = match read_body(body).await {
        Ok(body_text) => body_text,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn read_body(body: Body) -> Result<String, axum::Error> {
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await?;

    Ok(String::from_utf8_lossy(&body_bytes).to_string())
}

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a character.
fn truncate_body(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {parts:#?}\nbody: {}...",
            truncate_body(body)
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {parts:#?}\nbody: {}...",
            truncate_body(body)
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, middleware, routing::put};
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, logging_middleware, truncate_body};

    #[test]
    fn short_body_is_unchanged() {
        assert_eq!(truncate_body("value=12"), "value=12");
    }

    #[test]
    fn long_body_is_cut_at_limit() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(truncate_body(&body).len(), LOG_BODY_LENGTH_LIMIT);
    }

    #[test]
    fn truncation_does_not_split_characters() {
        // 'é' is two bytes, so the limit lands in the middle of a character.
        let body = format!("a{}", "é".repeat(LOG_BODY_LENGTH_LIMIT));

        let truncated = truncate_body(&body);

        assert_eq!(truncated.len(), LOG_BODY_LENGTH_LIMIT - 1);
        assert!(body.starts_with(truncated));
    }

    #[tokio::test]
    async fn middleware_passes_body_through() {
        let app = Router::new()
            .route("/echo", put(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app).expect("Could not create test server.");
        let body = "x".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        let response = server.put("/echo").text(body.clone()).await;

        response.assert_status_ok();
        assert_eq!(response.text(), body);
    }
}
