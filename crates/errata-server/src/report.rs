use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use errata_core::{ErrorReportDecider, ReportAction, ReportClaim, RequestContext, ResponseState};
use http::{HeaderValue, StatusCode, header};

use crate::error_page;

/// Connection-level I/O probe
///
/// A transport layer inserts this into the request or response extensions
/// and flips it off once the connection can no longer accept output. An
/// absent probe means I/O is allowed.
#[derive(Debug, Clone)]
pub struct IoProbe(Arc<AtomicBool>);

impl IoProbe {
    /// Probe reporting the connection as writable
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Probe reporting the connection as already dead
    #[must_use]
    pub fn disallowed() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Mark the connection as no longer writable
    pub fn disallow(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Whether output can still reach the client
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for IoProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// State captured by the error-report layer
#[derive(Clone)]
pub(crate) struct ReportState {
    pub decider: Arc<ErrorReportDecider>,
    pub base_path: String,
    pub dispatch_target: Option<String>,
}

/// Rewrite terminal error responses according to the decider
///
/// The shared report claim goes into the request extensions before the
/// inner service runs, so any inner path that reports on its own contends
/// on the same flag this layer uses afterwards.
pub(crate) async fn error_report_middleware(state: ReportState, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    let claim = ReportClaim::new();
    request.extensions_mut().insert(claim.clone());

    let request_probe = request.extensions().get::<IoProbe>().cloned();

    let response = next.run(request).await;

    let io_allowed = response
        .extensions()
        .get::<IoProbe>()
        .or(request_probe.as_ref())
        .is_none_or(IoProbe::is_allowed);

    let snapshot = ResponseState::with_claim(response.status(), written_bytes(response.body()), io_allowed, claim);
    let ctx = RequestContext {
        path,
        has_dispatch_target: state.dispatch_target.is_some(),
        base_path_prefix: state.base_path,
    };

    match state.decider.decide(&snapshot, &ctx) {
        ReportAction::Suppress => response,
        ReportAction::EmitBody { content_type, payload } => emit_body(response.status(), content_type, payload),
        ReportAction::Forward { status, .. } => error_page::render(status),
        ReportAction::Redirect { target } => redirect(&target, response),
    }
}

/// Bytes of the inner body already produced
///
/// Unknown-length bodies may already be streaming, so they count as started.
fn written_bytes(body: &Body) -> u64 {
    let hint = http_body::Body::size_hint(body);
    hint.exact().unwrap_or_else(|| hint.lower().max(1))
}

fn emit_body(status: StatusCode, content_type: &str, payload: String) -> Response {
    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = status;

    // Content-type assignment is best-effort; the body write proceeds
    // regardless.
    match HeaderValue::from_str(&format!("{content_type}; charset=utf-8")) {
        Ok(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        Err(error) => tracing::debug!(%error, "failed to set error body content type"),
    }

    response
}

fn redirect(target: &str, original: Response) -> Response {
    match HeaderValue::from_str(target) {
        Ok(location) => {
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::FOUND;
            response.headers_mut().insert(header::LOCATION, location);
            response
        }
        Err(error) => {
            // Terminal for this response; the claim stays taken so nothing
            // retries.
            tracing::debug!(%error, target, "failed to issue error redirect");
            original
        }
    }
}
