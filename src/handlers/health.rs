use axum::Json;

use crate::dtos::StatusMessage;

pub const HEALTH_MESSAGE: &str = "Sunidhi Automation is running!";

/// Liveness endpoint polled by the hosting platform and the heartbeat job.
pub async fn health_check() -> Json<StatusMessage> {
    Json(StatusMessage { status: "ok", message: HEALTH_MESSAGE })
}
