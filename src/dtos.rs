use serde_json::Value;

#[derive(serde::Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(serde::Serialize)]
pub struct WebhookReceived {
    pub status: &'static str,
}

#[derive(serde::Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub lead_id: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(serde::Serialize)]
pub struct CheckoutResult {
    pub status: &'static str,
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    pub key: String,
}

#[derive(serde::Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(serde::Serialize)]
pub struct VerifyPaymentResult {
    pub status: &'static str,
    pub message: &'static str,
    pub payment_id: String,
}

#[derive(serde::Serialize)]
pub struct PaymentStatusResult {
    pub status: String,
    pub amount: u64,
    pub currency: String,
    pub method: Option<String>,
    pub created_at: i64,
}
