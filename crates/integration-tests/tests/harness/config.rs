//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use errata_config::{Config, HealthConfig, ReportConfig, ServerConfig, TelemetryConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                },
                report: ReportConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Replace the API marker
    pub fn with_api_marker(mut self, marker: &str) -> Self {
        self.config.report.api_marker = marker.to_owned();
        self
    }

    /// Unmount the error page so the redirect fallback kicks in
    pub fn without_error_page(mut self) -> Self {
        self.config.report.error_page_enabled = false;
        self
    }

    /// Set the base path prefix used by the redirect fallback
    pub fn with_base_path(mut self, prefix: &str) -> Self {
        self.config.report.base_path = prefix.to_owned();
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
