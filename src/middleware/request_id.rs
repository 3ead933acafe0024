use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // The id either survived a to_str round-trip or is a fresh UUID, so it
    // is always a valid header value.
    let Ok(value) = HeaderValue::from_str(&request_id) else {
        return next.run(req).await;
    };

    req.headers_mut().insert("x-request-id", value.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert("x-request-id", value);
    response
}
