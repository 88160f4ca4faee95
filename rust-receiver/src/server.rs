//! HTTP server wiring.
//!
//! Builds the router and runs it until a shutdown signal arrives. Once the
//! signal fires no new connections are accepted, and in-flight requests get
//! at most `Config::shutdown_timeout` to finish.

use std::future::Future;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::web::{health, slack_command, AppState};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/", post(slack_command))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve requests on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let grace = state.config.shutdown_timeout;
    let app = router(state);

    let (drain_tx, drain_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = drain_rx.await;
            })
            .await
    });

    tokio::pin!(shutdown);

    tokio::select! {
        result = &mut server => {
            // Stopped without being asked to
            result.context("Server task failed")?.context("Server error")?;
            return Ok(());
        }
        _ = &mut shutdown => {}
    }

    info!(grace_secs = grace.as_secs(), "web_server_draining");
    let _ = drain_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => {
            result.context("Server task failed")?.context("Server error")?;
            info!("web_server_drained");
        }
        Err(_) => {
            warn!(grace_secs = grace.as_secs(), "web_server_drain_timeout");
            server.abort();
        }
    }

    Ok(())
}
