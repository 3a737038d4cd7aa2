/// Classification inputs read from the failed request
///
/// Built by the hosting server; the decider only reads it. The base path
/// prefix is externally configured and treated as an opaque string.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request path as received, without the query string
    pub path: String,
    /// Whether the server can dispatch internally to the error page
    pub has_dispatch_target: bool,
    /// Mount prefix prepended to the redirect fallback URL, possibly empty
    pub base_path_prefix: String,
}

impl RequestContext {
    /// Context for a path with an available dispatch target and no prefix
    #[must_use]
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            has_dispatch_target: true,
            base_path_prefix: String::new(),
        }
    }
}
