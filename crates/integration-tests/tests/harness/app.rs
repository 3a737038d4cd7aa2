//! Demo application routes producing the failure shapes the scenarios need

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use errata_core::ReportClaim;
use errata_server::IoProbe;
use http::StatusCode;

/// Routes mounted inside the error-report layer for testing
pub fn app_routes() -> Router {
    Router::new()
        .route("/greet", get(|| async { "hello" }))
        .route("/dashboard", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/partial",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable") }),
        )
        .route("/claimed", get(claimed))
        .route("/io-lost", get(io_lost))
}

/// Reports on its own by taking the shared claim before returning
async fn claimed(Extension(claim): Extension<ReportClaim>) -> StatusCode {
    assert!(claim.claim());
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Fails after the transport stopped accepting output
async fn io_lost() -> Response {
    let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
    response.extensions_mut().insert(IoProbe::disallowed());
    response
}
