use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;
use tracing::info;

use crate::{
    dtos::StatusMessage,
    error::ApiError,
    models::{Lead, LeadField},
};

/// Lead form submission. The lead is only logged.
pub async fn submit_lead(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StatusMessage>, ApiError> {
    let Json(body) = payload?;
    let Value::Object(fields) = body else {
        return Err(ApiError::BadRequest("Lead must be a JSON object".into()));
    };
    let lead = Lead::from_fields(&fields);

    info!(
        "New lead: {}, {}, interested in {}",
        LeadField(&lead.name),
        LeadField(&lead.phone),
        LeadField(&lead.product)
    );

    Ok(Json(StatusMessage { status: "success", message: "Lead saved!" }))
}
