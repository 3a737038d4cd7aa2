//! Decision core for error reporting
//!
//! Given a snapshot of a failed response and its request, decides whether to
//! report at all and how: a structured JSON body for API requests, an
//! internal forward to the error page, or a redirect fallback. Carries no
//! dependency on the server layer so the decision is unit-testable on its
//! own.

mod action;
mod catalog;
mod context;
mod decider;
mod state;

pub use action::ReportAction;
pub use catalog::{CanonicalCatalog, ErrorCatalog};
pub use context::RequestContext;
pub use decider::ErrorReportDecider;
pub use state::{ReportClaim, ResponseState};
