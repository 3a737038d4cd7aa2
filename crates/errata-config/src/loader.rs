use std::path::Path;

use anyhow::Context;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `${VAR}` placeholders in the raw text, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let expanded = crate::env::expand_env(&raw).context("config placeholder expansion failed")?;

        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the report section or a route path is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_report()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_report(&self) -> anyhow::Result<()> {
        if self.report.api_marker.is_empty() {
            anyhow::bail!("report.api_marker must not be empty");
        }

        if !self.report.error_page.starts_with('/') {
            anyhow::bail!("report.error_page must be an absolute path");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must be an absolute path");
        }

        Ok(())
    }
}
