//! Inbound vendor webhooks. Payloads are logged and acknowledged.

use axum::{
    body::Bytes,
    extract::rejection::{BytesRejection, JsonRejection},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{dtos::WebhookReceived, error::ApiError};

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Form fields when the body is a non-empty form, else the JSON document,
/// else an empty mapping. A repeated form key keeps its first value.
fn extract_call_payload(headers: &HeaderMap, body: &[u8]) -> Value {
    if is_form(headers) {
        if let Ok(pairs) = serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) {
            if !pairs.is_empty() {
                let mut fields = Map::new();
                for (key, value) in pairs {
                    fields.entry(key).or_insert(Value::String(value));
                }
                return Value::Object(fields);
            }
        }
    }

    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Call data pushed by OmniDimension after a voice call.
pub async fn omnidim_webhook(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WebhookReceived>, ApiError> {
    let body = body?;
    let data = extract_call_payload(&headers, &body);
    info!(%data, "Received OmniDimension data");

    Ok(Json(WebhookReceived { status: "received" }))
}

/// Razorpay event notifications. The signature header is not checked.
pub async fn razorpay_webhook(payload: Result<Json<Value>, JsonRejection>) -> StatusCode {
    match payload {
        Ok(Json(data)) => {
            info!(%data, "Payment received");
            StatusCode::NO_CONTENT
        }
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Payment error");
            StatusCode::BAD_REQUEST
        }
    }
}
