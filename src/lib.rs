//! Sunidhi Automation webhooks.
//!
//! Receives lead and voice-call webhooks, raises Razorpay orders for leads
//! and verifies the resulting payments. Nothing is persisted: every request
//! is logged and answered on its own.

pub mod config;
pub mod dtos;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod heartbeat;
pub mod models;
pub mod server;

use std::sync::Arc;

pub use config::Config;
use error::ApiError;
use gateway::{PaymentGateway, SharedPaymentGateway};
pub use server::{create_router, start_server};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    gateway: Option<SharedPaymentGateway>,
}

impl AppState {
    pub fn new(config: Config, gateway: Option<SharedPaymentGateway>) -> Self {
        Self { config: Arc::new(config), gateway }
    }

    pub fn gateway(&self) -> Result<&dyn PaymentGateway, ApiError> {
        self.gateway.as_deref().ok_or(ApiError::GatewayNotConfigured)
    }
}
