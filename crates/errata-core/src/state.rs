use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use http::StatusCode;

/// One-shot claim marking a response as handled for error reporting
///
/// Cloned handles share the same flag, so every error path that might
/// report for a response contends on a single claim. Exactly one caller
/// of [`claim`](Self::claim) wins.
#[derive(Debug, Clone, Default)]
pub struct ReportClaim(Arc<AtomicBool>);

impl ReportClaim {
    /// Create an unclaimed flag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the claim
    ///
    /// Compare-and-swap from unclaimed to claimed. Returns `true` for the
    /// one caller that performed the transition, `false` once claimed.
    #[must_use = "losing the claim means another path owns reporting"]
    pub fn claim(&self) -> bool {
        self.0.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
    }

    /// Whether the claim has been taken
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Snapshot of an in-flight response at the error-handling boundary
///
/// Read-only except for the report claim, which transitions from unclaimed
/// to claimed at most once.
#[derive(Debug)]
pub struct ResponseState {
    status: StatusCode,
    bytes_written: u64,
    io_allowed: bool,
    claim: ReportClaim,
}

impl ResponseState {
    /// Snapshot a response with a fresh, unclaimed report flag
    #[must_use]
    pub fn new(status: StatusCode, bytes_written: u64, io_allowed: bool) -> Self {
        Self::with_claim(status, bytes_written, io_allowed, ReportClaim::new())
    }

    /// Snapshot a response contending on an externally shared claim
    #[must_use]
    pub const fn with_claim(status: StatusCode, bytes_written: u64, io_allowed: bool, claim: ReportClaim) -> Self {
        Self {
            status,
            bytes_written,
            io_allowed,
            claim,
        }
    }

    /// Terminal status of the response
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Bytes of the response body already produced
    #[must_use]
    pub const fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Whether the transport can still accept output
    #[must_use]
    pub const fn io_allowed(&self) -> bool {
        self.io_allowed
    }

    /// Take the report claim for this response
    #[must_use = "losing the claim means another path owns reporting"]
    pub fn claim_report(&self) -> bool {
        self.claim.claim()
    }

    /// Whether reporting was already claimed
    #[must_use]
    pub fn is_reported(&self) -> bool {
        self.claim.is_claimed()
    }
}
