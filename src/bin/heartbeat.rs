use dotenvy::dotenv;
use sunidhi_automation::{config, heartbeat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Always exits 0; the printed line is the only signal.
#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heartbeat=info,sunidhi_automation=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let url = config::health_url_from_env();
    let outcome = heartbeat::probe(&url, heartbeat::PROBE_TIMEOUT).await;
    println!("{}", heartbeat::report_line(&outcome));
}
