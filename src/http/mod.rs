use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::store::SharedLedger;

pub mod error;
pub mod handlers;

pub fn router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/getBalance", get(handlers::get_balance))
        .route("/updateBalance", post(handlers::update_balance))
        .route("/transferBalance", post(handlers::transfer_balance))
        .with_state(ledger)
}

/// Serves one ledger over HTTP until shut down, then logs the final balances.
pub struct Service {
    ledger: SharedLedger,
}

impl Service {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    pub async fn run(self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind `{addr}`"))?;
        self.serve(listener, shutdown_signal()).await
    }

    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr().context("Listener has no local address")?;
        tracing::info!(%addr, "ledger service listening");

        axum::serve(listener, router(self.ledger.clone()))
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        for acc in self.ledger.accounts() {
            tracing::info!(id = acc.id(), name = acc.name(), balance = %acc.balance(), "final balance");
        }
        tracing::info!("ledger service stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
