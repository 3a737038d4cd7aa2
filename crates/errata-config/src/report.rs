use serde::Deserialize;

/// Error reporting configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Path substring classifying a request as an API resource
    #[serde(default = "default_api_marker")]
    pub api_marker: String,
    /// Internal dispatch target for the human-readable error page
    #[serde(default = "default_error_page")]
    pub error_page: String,
    /// Whether the error page route is mounted
    ///
    /// When disabled there is no dispatch target and page-classified
    /// errors fall back to a redirect.
    #[serde(default = "default_enabled")]
    pub error_page_enabled: bool,
    /// Mount prefix prepended to the redirect fallback URL
    ///
    /// Opaque; typically set when the gateway sits behind a path-rewriting
    /// proxy.
    #[serde(default)]
    pub base_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_marker: default_api_marker(),
            error_page: default_error_page(),
            error_page_enabled: true,
            base_path: String::new(),
        }
    }
}

fn default_api_marker() -> String {
    "/api".to_string()
}

fn default_error_page() -> String {
    "/error".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}
