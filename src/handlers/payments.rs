//! Checkout endpoints backed by the payment gateway.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    dtos::{
        CheckoutRequest, CheckoutResult, PaymentStatusResult, VerifyPaymentRequest,
        VerifyPaymentResult,
    },
    error::ApiError,
    models::{is_gateway_id, PaymentOrder, PaymentVerification},
    AppState,
};

/// Lead ids arrive as strings or bare numbers. Null and "" count as absent.
fn lead_id_of(value: Option<Value>) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) if id.trim().is_empty() => Ok(None),
        Some(Value::String(id)) => Ok(Some(id.trim().to_string())),
        Some(Value::Number(id)) => Ok(Some(id.to_string())),
        Some(_) => Err(ApiError::BadRequest("lead_id must be a string or number".into())),
    }
}

/// Amount in paise. Zero counts as absent.
fn amount_of(value: Option<Value>) -> Result<Option<u64>, ApiError> {
    let invalid = || ApiError::BadRequest("amount must be a positive integer in paise".into());
    let amount = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_u64().ok_or_else(invalid)?,
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };
    Ok((amount != 0).then_some(amount))
}

fn required(field: Option<String>, name: &str) -> Result<String, ApiError> {
    field.ok_or_else(|| ApiError::BadRequest(format!("Missing field: {name}")))
}

pub async fn checkout(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CheckoutResult>), ApiError> {
    let Json(request) = payload?;

    let lead_id = lead_id_of(request.lead_id)?;
    let amount = amount_of(request.amount)?;
    let (Some(lead_id), Some(amount)) = (lead_id, amount) else {
        return Err(ApiError::MissingCheckoutFields);
    };

    let gateway = state.gateway()?;
    let order = PaymentOrder::for_lead(&lead_id, amount, request.description.as_deref());
    let created = gateway.create_order(&order).await?;
    info!(order_id = %created.id, lead_id = %order.lead_id, amount = created.amount, "order created");

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResult {
            status: "success",
            order_id: created.id,
            amount: created.amount,
            currency: created.currency,
            key: gateway.key_id().to_string(),
        }),
    ))
}

pub async fn verify_payment(
    State(state): State<AppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<VerifyPaymentResult>, ApiError> {
    let Json(request) = payload?;

    let verification = PaymentVerification {
        order_id: required(request.order_id, "order_id")?,
        payment_id: required(request.payment_id, "payment_id")?,
        signature: required(request.signature, "signature")?,
    };

    state.gateway()?.verify_payment_signature(&verification).await?;
    info!(
        order_id = %verification.order_id,
        payment_id = %verification.payment_id,
        "payment verified"
    );

    Ok(Json(VerifyPaymentResult {
        status: "success",
        message: "Payment verified successfully",
        payment_id: verification.payment_id,
    }))
}

pub async fn payment_status(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<Json<PaymentStatusResult>, ApiError> {
    if !is_gateway_id(&payment_id) {
        return Err(ApiError::BadRequest("Invalid payment_id".into()));
    }
    let payment = state.gateway()?.fetch_payment(&payment_id).await?;

    Ok(Json(PaymentStatusResult {
        status: payment.status,
        amount: payment.amount,
        currency: payment.currency,
        method: payment.method,
        created_at: payment.created_at,
    }))
}
