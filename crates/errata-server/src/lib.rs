mod error_page;
mod health;
mod report;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use errata_config::Config;
use errata_core::ErrorReportDecider;
use tower_http::trace::TraceLayer;

pub use report::IoProbe;

/// Assembled server with routes and the error-report layer
pub struct Server {
    router: Router,
    report: report::ReportState,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Error page, the internal dispatch target
        let dispatch_target = config
            .report
            .error_page_enabled
            .then(|| config.report.error_page.clone());
        if let Some(ref target) = dispatch_target {
            app = app.route(target, axum::routing::get(error_page::error_page_handler));
        }

        let decider = Arc::new(ErrorReportDecider::new(
            config.report.api_marker.as_str(),
            config.report.error_page.as_str(),
        ));
        let report = report::ReportState {
            decider,
            base_path: config.report.base_path.clone(),
            dispatch_target,
        };

        Self {
            router: app,
            report,
            listen_address,
        }
    }

    /// Merge application routes into the server
    ///
    /// Merged routes sit inside the error-report layer, so their failed
    /// responses get the same treatment as the built-in ones.
    #[must_use]
    pub fn with_routes(mut self, routes: Router) -> Self {
        self.router = self.router.merge(routes);
        self
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the finished router
    ///
    /// Applies the error-report layer around everything mounted so far.
    /// Useful for testing when the caller manages the listener.
    pub fn into_router(self) -> Router {
        let report = self.report;
        let app = self.router.layer(axum::middleware::from_fn(move |request, next| {
            let report = report.clone();
            async move { report::error_report_middleware(report, request, next).await }
        }));

        // Trace outermost so the rewritten response is what gets recorded
        app.layer(TraceLayer::new_for_http())
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.into_router())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
