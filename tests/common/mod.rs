#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sunidhi_automation::{
    create_router,
    gateway::{signature, GatewayError, PaymentGateway},
    models::{Order, Payment, PaymentOrder, PaymentVerification},
    AppState, Config,
};
use tower::ServiceExt;

pub const KEY_ID: &str = "rzp_test_key";
pub const KEY_SECRET: &str = "rzp_test_secret";

/// In-process stand-in for Razorpay that records the orders it receives.
#[derive(Default)]
pub struct FakeGateway {
    pub orders: Mutex<Vec<PaymentOrder>>,
    pub reject_orders: bool,
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    fn key_id(&self) -> &str {
        KEY_ID
    }

    async fn create_order(&self, order: &PaymentOrder) -> Result<Order, GatewayError> {
        if self.reject_orders {
            return Err(GatewayError::Rejected {
                status: 401,
                description: "Authentication failed".into(),
            });
        }
        self.orders.lock().unwrap().push(order.clone());
        Ok(Order {
            id: "order_test_1".into(),
            amount: order.amount,
            currency: order.currency.clone(),
            receipt: Some(order.receipt.clone()),
            status: Some("created".into()),
        })
    }

    async fn verify_payment_signature(
        &self,
        verification: &PaymentVerification,
    ) -> Result<(), GatewayError> {
        if signature::is_valid_payment_signature(
            &verification.order_id,
            &verification.payment_id,
            &verification.signature,
            KEY_SECRET,
        ) {
            Ok(())
        } else {
            Err(GatewayError::SignatureMismatch { order_id: verification.order_id.clone() })
        }
    }

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, GatewayError> {
        if payment_id != "pay_test_1" {
            return Err(GatewayError::Rejected {
                status: 400,
                description: "The id provided does not exist".into(),
            });
        }
        Ok(Payment {
            id: payment_id.into(),
            status: "captured".into(),
            amount: 50000,
            currency: "INR".into(),
            method: Some("upi".into()),
            created_at: 1_700_000_000,
        })
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

pub fn app_with(gateway: Arc<FakeGateway>) -> Router {
    create_router(AppState::new(test_config(), Some(gateway)))
}

pub fn app() -> Router {
    app_with(Arc::new(FakeGateway::default()))
}

pub fn app_without_gateway() -> Router {
    create_router(AppState::new(test_config(), None))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

/// Sends one request and returns the status and raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("failed to make request");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, body.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("response should be valid JSON");
    (status, json)
}
