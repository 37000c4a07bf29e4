//! Bearer-token gate for the resource routes.
//!
//! Stands in for the host pipeline's JWT bearer authentication: requests
//! without a parseable, unexpired bearer token are answered with a bare 401
//! before they reach a handler. The sandbox does not verify signatures
//! (that is the authorisation server's job), so a token only has to be
//! structurally valid and unexpired to pass.

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use super::token;

/// Middleware: rejects requests that do not carry a decodable, unexpired
/// bearer token.
pub async fn require_bearer_token(req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let bearer = authorization
        .strip_prefix("Bearer ")
        .unwrap_or(authorization);

    let decoded = match token::decode(bearer) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::debug!(error = ?err, "rejecting request: bearer token failed to decode");
            return unauthorized();
        }
    };

    if let Some(exp) = decoded.expires_at() {
        if exp < Utc::now().timestamp() {
            tracing::debug!(exp, "rejecting request: bearer token expired");
            return unauthorized();
        }
    }

    next.run(req).await
}

/// The bare 401 the host pipeline produces: empty body, challenge header.
/// The accounts-endpoint rewrite may fill in a body on the way out.
fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"))],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_shape() {
        let resp = unauthorized();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
