use std::path::PathBuf;

use clap::Parser;

/// Errata error-report gateway
#[derive(Debug, Parser)]
#[command(name = "errata", about = "HTTP gateway that rewrites failed responses into error reports")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "errata.toml", env = "ERRATA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ERRATA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
