use http::StatusCode;

/// Terminal action produced for one failed response
///
/// A value, not a side effect: the hosting server applies it through its
/// own output primitives. Exactly one action is produced per response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportAction {
    /// Do nothing; the response is ineligible or already handled
    Suppress,
    /// Replace the body with a machine-readable error document
    EmitBody {
        /// Media type of the payload
        content_type: &'static str,
        /// UTF-8 document to write
        payload: String,
    },
    /// Dispatch internally to the error page
    ///
    /// The status travels as data alongside the dispatch, never encoded
    /// into the target URL.
    Forward {
        /// Internal dispatch target
        target: String,
        /// Status the error page renders
        status: StatusCode,
    },
    /// Send the client to the error page via an HTTP redirect
    Redirect {
        /// Absolute-path URL including the `statusCode` query parameter
        target: String,
    },
}
