use http::StatusCode;

/// Supplies the error label and client-facing message for a status code
///
/// The JSON body contract fixes the field names and the status value; the
/// text that fills `error` and `message` is deployment policy, so it sits
/// behind a trait the hosting server can replace.
pub trait ErrorCatalog: Send + Sync {
    /// Short error label, e.g. `Not Found`
    fn label(&self, status: StatusCode) -> String;

    /// Message safe to expose to API consumers
    fn message(&self, status: StatusCode) -> String;
}

/// Default catalog deriving text from the status code itself
#[derive(Debug, Default, Clone, Copy)]
pub struct CanonicalCatalog;

impl ErrorCatalog for CanonicalCatalog {
    fn label(&self, status: StatusCode) -> String {
        status.canonical_reason().unwrap_or("Unknown Error").to_owned()
    }

    fn message(&self, status: StatusCode) -> String {
        if status.is_server_error() {
            format!("The server failed to complete the request (status {}).", status.as_u16())
        } else {
            format!("The request could not be fulfilled (status {}).", status.as_u16())
        }
    }
}
