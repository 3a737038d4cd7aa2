use std::sync::Arc;

use http::StatusCode;

use crate::{CanonicalCatalog, ErrorCatalog, ReportAction, RequestContext, ResponseState};

/// Decides whether and how to report a failed response
///
/// Invoked once by the hosting server when a response reaches a terminal
/// error state. Pure over its inputs except for taking the one-shot report
/// claim on the [`ResponseState`].
pub struct ErrorReportDecider {
    api_marker: String,
    error_page: String,
    catalog: Arc<dyn ErrorCatalog>,
}

impl ErrorReportDecider {
    /// Path substring that classifies a request as an API resource
    pub const DEFAULT_API_MARKER: &'static str = "/api";
    /// Internal dispatch target for the error page
    pub const DEFAULT_ERROR_PAGE: &'static str = "/error";

    /// Decider with the given API marker and error-page target
    #[must_use]
    pub fn new(api_marker: impl Into<String>, error_page: impl Into<String>) -> Self {
        Self {
            api_marker: api_marker.into(),
            error_page: error_page.into(),
            catalog: Arc::new(CanonicalCatalog),
        }
    }

    /// Replace the default error text policy
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn ErrorCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Decide the report action for one failed response
    ///
    /// Runs the eligibility gate in order, then classifies the request as
    /// API or page. Every ineligible response yields [`ReportAction::Suppress`];
    /// eligible responses yield exactly one output action.
    #[must_use]
    pub fn decide(&self, state: &ResponseState, ctx: &RequestContext) -> ReportAction {
        let status = state.status();

        // Informational, success and redirect statuses are never reported.
        if status.as_u16() < 400 {
            return ReportAction::Suppress;
        }

        // A body already under way cannot be retracted.
        if state.bytes_written() > 0 {
            return ReportAction::Suppress;
        }

        // One path reports; losing the race means another already owns it.
        if !state.claim_report() {
            return ReportAction::Suppress;
        }

        // The transport signaled that nothing more can be written, so a
        // report would never be read. The claim stays taken.
        if !state.io_allowed() {
            return ReportAction::Suppress;
        }

        if ctx.path.contains(&self.api_marker) {
            return self.structured_body(status);
        }

        if ctx.has_dispatch_target {
            ReportAction::Forward {
                target: self.error_page.clone(),
                status,
            }
        } else {
            ReportAction::Redirect {
                target: self.redirect_target(&ctx.base_path_prefix, status),
            }
        }
    }

    fn structured_body(&self, status: StatusCode) -> ReportAction {
        let payload = serde_json::json!({
            "status": status.as_u16(),
            "error": self.catalog.label(status),
            "message": self.catalog.message(status),
        })
        .to_string();

        ReportAction::EmitBody {
            content_type: "application/json",
            payload,
        }
    }

    /// Compose the redirect fallback URL
    ///
    /// The prefix joins the page path without duplicating the separator and
    /// is omitted entirely when empty.
    fn redirect_target(&self, prefix: &str, status: StatusCode) -> String {
        let page = if prefix.is_empty() {
            self.error_page.clone()
        } else if prefix.ends_with('/') {
            format!("{prefix}{}", self.error_page.trim_start_matches('/'))
        } else {
            format!("{prefix}{}", self.error_page)
        };
        format!("{page}?statusCode={}", status.as_u16())
    }
}

impl Default for ErrorReportDecider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_MARKER, Self::DEFAULT_ERROR_PAGE)
    }
}

impl std::fmt::Debug for ErrorReportDecider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorReportDecider")
            .field("api_marker", &self.api_marker)
            .field("error_page", &self.error_page)
            .finish_non_exhaustive()
    }
}
