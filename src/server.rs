//! Routing and the HTTP listener.

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    let webhook_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/omnidim-webhook", post(handlers::omnidim_webhook))
        .route("/razorpay-webhook", post(handlers::razorpay_webhook))
        .route("/submit-lead", post(handlers::submit_lead));

    let payment_routes = Router::new()
        .route("/api/checkout", post(handlers::checkout))
        .route("/api/verify-payment", post(handlers::verify_payment))
        .route("/api/payment-status/:payment_id", get(handlers::payment_status));

    Router::new()
        .merge(webhook_routes)
        .merge(payment_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl+C or SIGTERM.
pub async fn start_server(state: AppState, addr: SocketAddr) -> Result<(), std::io::Error> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
