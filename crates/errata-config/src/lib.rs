#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod report;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use env::EnvError;
pub use health::*;
pub use report::*;
pub use server::*;
pub use telemetry::*;

/// Top-level errata configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error reporting configuration
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
