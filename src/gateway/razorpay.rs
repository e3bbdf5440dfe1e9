use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{signature, GatewayError, PaymentGateway};
use crate::{
    config::RazorpayConfig,
    models::{is_gateway_id, Order, Payment, PaymentOrder, PaymentVerification},
};

/// Razorpay REST client. Credentials are fixed at construction.
#[derive(Debug, Clone)]
pub struct RazorpayClient {
    http: Client,
    api_base: Url,
    config: RazorpayConfig,
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl RazorpayClient {
    pub fn new(config: RazorpayConfig) -> Result<Self, GatewayError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|err| GatewayError::InvalidBaseUrl(format!("{}: {err}", config.api_base)))?;
        if api_base.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(config.api_base.clone()));
        }
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, api_base, config })
    }

    /// Appends each segment percent-encoded, so ids cannot add path
    /// components or a query string.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.config.key_id, Some(&self.config.key_secret))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let description = serde_json::from_slice::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| {
                    if let Some(code) = &envelope.error.code {
                        debug!(%code, "razorpay error code");
                    }
                    envelope.error.description
                })
                .unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("request rejected").to_string()
                });
            warn!(status = status.as_u16(), %description, "razorpay rejected request");
            return Err(GatewayError::Rejected { status: status.as_u16(), description });
        }

        serde_json::from_slice(&body).map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    fn key_id(&self) -> &str {
        &self.config.key_id
    }

    async fn create_order(&self, order: &PaymentOrder) -> Result<Order, GatewayError> {
        debug!(receipt = %order.receipt, amount = order.amount, "creating razorpay order");
        let response =
            self.authorized(self.http.post(self.url(&["orders"]))).json(order).send().await?;
        Self::decode(response).await
    }

    async fn verify_payment_signature(
        &self,
        verification: &PaymentVerification,
    ) -> Result<(), GatewayError> {
        if signature::is_valid_payment_signature(
            &verification.order_id,
            &verification.payment_id,
            &verification.signature,
            &self.config.key_secret,
        ) {
            Ok(())
        } else {
            Err(GatewayError::SignatureMismatch { order_id: verification.order_id.clone() })
        }
    }

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, GatewayError> {
        if !is_gateway_id(payment_id) {
            return Err(GatewayError::InvalidPaymentId(payment_id.to_string()));
        }
        let response = self
            .authorized(self.http.get(self.url(&["payments", payment_id])))
            .send()
            .await?;
        Self::decode(response).await
    }
}
