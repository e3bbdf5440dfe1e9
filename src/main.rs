use std::sync::Arc;

use dotenvy::dotenv;
use sunidhi_automation::{
    gateway::{RazorpayClient, SharedPaymentGateway},
    start_server, AppState, Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sunidhi_automation=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let addr = config.listen_addr()?;

    let gateway: Option<SharedPaymentGateway> = match &config.razorpay {
        Some(razorpay) => {
            tracing::info!(key_id = %razorpay.key_id, "razorpay client configured");
            Some(Arc::new(RazorpayClient::new(razorpay.clone())?))
        }
        None => {
            tracing::warn!(
                "RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET not set, payment endpoints are disabled"
            );
            None
        }
    };

    start_server(AppState::new(config, gateway), addr).await?;
    Ok(())
}
