//! HTTP server
//!
//! Serves the rendered pages, puzzle downloads and the guess/hint endpoints
//! from an immutable catalog built before the listener is bound.

pub mod api;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

use crate::config::{ServerConfig, SHUTDOWN_GRACE};
use crate::Result;
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Bind the configured address and serve until SIGINT or SIGTERM
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");
    run(listener, router(state, config.debug), shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` completes
///
/// After shutdown is requested, in-flight requests get [`SHUTDOWN_GRACE`]
/// to finish before the server is abandoned.
pub async fn run<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut handle => {
            result??;
            return Ok(());
        }
        _ = shutdown => {}
    }

    info!("Shutting down");
    let _ = stop_tx.send(());
    match tokio::time::timeout(SHUTDOWN_GRACE, handle).await {
        Ok(result) => result??,
        Err(_) => warn!("Timed out waiting for connections to close"),
    }
    info!("Stopped listening");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
