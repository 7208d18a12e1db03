use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Header carrying the pseudo-authenticated identity.
pub const IDENTITY_HEADER: &str = "x-skillcrucial-user";

/// Fixed identity token. There is no credential check anywhere: every
/// request is treated as already authenticated as this one user.
pub const IDENTITY_TOKEN: &str = "1fcc2edd-ccb1-461a-9070-039969bae1be";

/// Identity stamping middleware for the users API.
///
/// Attaches the fixed identity header to every response and exposes it to
/// cross-origin clients via `Access-Control-Expose-Headers`.
pub async fn stamp_identity(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static(IDENTITY_HEADER),
        HeaderValue::from_static(IDENTITY_TOKEN),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("X-SKILLCRUCIAL-USER"),
    );

    response
}
