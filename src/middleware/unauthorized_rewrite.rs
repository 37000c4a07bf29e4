//! Post-flight rewrite of unauthorized accounts responses.
//!
//! Sits above the resource routes and inspects every response on the way
//! out. When the accounts retrieval endpoint answers 401 and the caller's
//! bearer token does not even parse as a compact JWT, the body is replaced
//! with the standard `invalid_token` error payload, so callers presenting
//! garbage credentials get a structured error instead of a bare 401.
//!
//! A 401 carrying a *well-formed* token (expired, wrong audience, revoked)
//! passes through untouched: the token check exists solely to tell
//! "malformed token" apart from every other cause of a 401, and the host
//! pipeline's answer for those is already the right one.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};

use super::token;

/// Path suffix identifying the accounts retrieval endpoint.
pub const GET_ACCOUNTS_ENDPOINT: &str = "/banking/accounts";

/// Replacement body for rewritten 401 responses (CDS error-list shape).
pub const UNAUTHORIZED_ERROR_TEMPLATE: &str =
    r##"{"errors": [{"code": "401", "title": "Unauthorized", "detail": "#{errorDetail}"}]}"##;

/// Placeholder substituted inside [`UNAUTHORIZED_ERROR_TEMPLATE`].
pub const ERROR_DETAIL_PLACEHOLDER: &str = "#{errorDetail}";

/// Detail literal used when the bearer token fails to decode.
pub const INVALID_TOKEN: &str = "invalid_token";

/// Middleware: replaces the body of 401 responses from the accounts endpoint
/// when the caller's bearer token is malformed.
///
/// Delegates to `next` exactly once before any inspection, and returns a
/// `Response` on every branch, so the stage can never fail the pipeline.
/// The expected error (token decode failure) is handled locally as the
/// rewrite trigger; panics anywhere below are backstopped by the router's
/// `CatchPanicLayer`.
pub async fn rewrite_unauthorized(req: Request, next: Next) -> Response {
    // `next` consumes the request, so capture what the post-flight check
    // needs before delegating. Reads only; the request is never altered.
    let path = req.uri().path().to_owned();
    let bearer = bearer_token(req.headers());

    let resp = next.run(req).await;

    if should_rewrite(&path, resp.status(), &bearer) {
        tracing::debug!(%path, "bearer token failed to decode, rewriting 401 body");
        swap_body(resp)
    } else {
        resp
    }
}

/// The candidate token from the Authorization header: absent (or unreadable
/// as UTF-8) is treated as empty, and a literal `"Bearer "` prefix is
/// stripped if present.
fn bearer_token(headers: &HeaderMap) -> String {
    let raw = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    raw.strip_prefix("Bearer ").unwrap_or(raw).to_owned()
}

/// Trigger condition: accounts endpoint + 401 + a token that fails to
/// decode. Anything else leaves the response alone.
fn should_rewrite(path: &str, status: StatusCode, bearer: &str) -> bool {
    if !path.ends_with(GET_ACCOUNTS_ENDPOINT) || status != StatusCode::UNAUTHORIZED {
        return false;
    }
    token::decode(bearer).is_err()
}

/// Replace the response body with the filled-in error template.
///
/// The original body is discarded unread; status and remaining headers are
/// preserved. Framing headers are reset so the old body's length cannot
/// leak into the rewritten response.
fn swap_body(resp: Response) -> Response {
    let (mut parts, _discarded) = resp.into_parts();

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    let body = UNAUTHORIZED_ERROR_TEMPLATE.replace(ERROR_DETAIL_PLACEHOLDER, INVALID_TOKEN);
    Response::from_parts(parts, Body::from(body))
}
