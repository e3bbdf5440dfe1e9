//! One-shot liveness probe against the health endpoint.

use std::{fmt, time::Duration};

use chrono::Local;
use reqwest::StatusCode;
use tracing::debug;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub enum HeartbeatOutcome {
    Alive,
    UnexpectedStatus(StatusCode),
    Failed(String),
}

impl fmt::Display for HeartbeatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "Heartbeat successful - App is alive!"),
            Self::UnexpectedStatus(status) => {
                write!(f, "Heartbeat returned status {}", status.as_u16())
            }
            Self::Failed(reason) => write!(f, "Heartbeat failed: {reason}"),
        }
    }
}

/// Issues a single GET. Every failure is folded into the outcome.
pub async fn probe(url: &str, timeout: Duration) -> HeartbeatOutcome {
    debug!(%url, ?timeout, "probing health endpoint");

    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(err) => return HeartbeatOutcome::Failed(err.to_string()),
    };

    match client.get(url).send().await {
        Ok(response) if response.status() == StatusCode::OK => HeartbeatOutcome::Alive,
        Ok(response) => HeartbeatOutcome::UnexpectedStatus(response.status()),
        Err(err) => HeartbeatOutcome::Failed(err.to_string()),
    }
}

/// `[YYYY-mm-dd HH:MM:SS] <outcome>` in local time.
pub fn report_line(outcome: &HeartbeatOutcome) -> String {
    format!("[{}] {outcome}", Local::now().format("%Y-%m-%d %H:%M:%S"))
}
