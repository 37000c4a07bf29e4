use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{bearer_auth, unauthorized_rewrite};
use crate::AppState;

pub mod handlers;

/// Build the full resource-server router.
///
/// Banking routes sit behind the bearer gate; the unauthorized rewrite is
/// layered above the nest so it observes the final response for every
/// request. Tracing, request-id injection, and the panic backstop wrap the
/// whole stack.
pub fn resource_router(state: Arc<AppState>) -> Router {
    // Fallback registered before the gate so unknown paths under the nest
    // are authenticated too.
    let banking = Router::new()
        .route("/banking/accounts", get(handlers::get_accounts))
        .route(
            "/banking/accounts/:account_id/transactions",
            get(handlers::get_transactions),
        )
        .fallback(fallback_404)
        .layer(middleware::from_fn(bearer_auth::require_bearer_token));

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .nest("/cds-au/v1", banking)
        .with_state(state)
        .layer(middleware::from_fn(
            unauthorized_rewrite::rewrite_unauthorized,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CatchPanicLayer::new())
}

async fn fallback_404() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Middleware: injects a unique X-Request-Id into every response.
/// This allows clients to correlate errors with server logs.
async fn request_id_middleware(req: Request, next: Next) -> Response {
    let req_id = uuid::Uuid::new_v4().to_string();
    let mut resp = next.run(req).await;
    if let Ok(val) = axum::http::HeaderValue::from_str(&req_id) {
        resp.headers_mut().insert("x-request-id", val);
    }
    resp
}
