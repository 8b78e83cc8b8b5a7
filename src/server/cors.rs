use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";
pub const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

/// Stamps the CORS headers on every response, errors included.
pub async fn allow_any_origin(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    response
}

/// Empty reply to browser preflight requests; headers come from the layer.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOWED_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}
