//! Payment gateway adapter.
//!
//! Handlers talk to the gateway through [`PaymentGateway`] so the Razorpay
//! client can be swapped for a stand-in in tests.

mod razorpay;
pub mod signature;

pub use razorpay::RazorpayClient;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Order, Payment, PaymentOrder, PaymentVerification};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The supplied signature does not match the order/payment pair.
    #[error("signature mismatch for order {order_id}")]
    SignatureMismatch { order_id: String },
    /// Gateway answered with a non-success status.
    #[error("gateway returned {status}: {description}")]
    Rejected { status: u16, description: String },
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected gateway response: {0}")]
    Decode(String),
    #[error("invalid payment id {0:?}")]
    InvalidPaymentId(String),
    #[error("invalid gateway base url: {0}")]
    InvalidBaseUrl(String),
}

impl GatewayError {
    /// Message that is safe to return to API callers.
    pub fn public_message(&self) -> String {
        match self {
            Self::SignatureMismatch { .. } => "Signature verification failed".to_string(),
            Self::Rejected { description, .. } => description.clone(),
            Self::Transport(err) if err.is_timeout() => {
                "Payment gateway timed out".to_string()
            }
            Self::Transport(_) => "Payment gateway is unreachable".to_string(),
            Self::Decode(_) => "Payment gateway returned an unexpected response".to_string(),
            Self::InvalidBaseUrl(_) => "Payment gateway is misconfigured".to_string(),
            Self::InvalidPaymentId(_) => "Invalid payment_id".to_string(),
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Publishable key id handed to the browser checkout.
    fn key_id(&self) -> &str;

    async fn create_order(&self, order: &PaymentOrder) -> Result<Order, GatewayError>;

    async fn verify_payment_signature(
        &self,
        verification: &PaymentVerification,
    ) -> Result<(), GatewayError>;

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, GatewayError>;
}

pub type SharedPaymentGateway = Arc<dyn PaymentGateway>;
