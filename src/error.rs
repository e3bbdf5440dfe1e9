use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::gateway::GatewayError;

pub const MISSING_CHECKOUT_FIELDS: &str = "Missing lead_id or amount";
pub const VERIFICATION_FAILED: &str = "Payment verification failed";
pub const GATEWAY_NOT_CONFIGURED: &str = "Payment gateway is not configured";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input problem; the message is returned as-is.
    #[error("{0}")]
    BadRequest(String),
    #[error("Missing lead_id or amount")]
    MissingCheckoutFields,
    #[error("Payment gateway is not configured")]
    GatewayNotConfigured,
    #[error("payment verification failed: {0}")]
    VerificationFailed(GatewayError),
    #[error(transparent)]
    Gateway(GatewayError),
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::SignatureMismatch { .. } => Self::VerificationFailed(err),
            other => Self::Gateway(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

// Every failure is answered with 400, upstream faults included.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::BadRequest(message) => {
                warn!(%message, "rejecting request");
                json!({ "error": message })
            }
            Self::MissingCheckoutFields | Self::GatewayNotConfigured => {
                warn!(error = %self, "rejecting request");
                json!({ "error": self.to_string() })
            }
            Self::VerificationFailed(err) => {
                warn!(error = %err, "payment signature rejected");
                json!({ "error": VERIFICATION_FAILED, "details": err.public_message() })
            }
            Self::Gateway(err) => {
                error!(error = %err, "payment gateway call failed");
                json!({ "error": err.public_message() })
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
