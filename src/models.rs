use std::{collections::BTreeMap, fmt};

use serde_json::{Map, Value};

/// Orders are always raised in rupees; amounts are in paise.
pub const CURRENCY_INR: &str = "INR";

/// Razorpay entity ids (`pay_..`, `order_..`) are ASCII alphanumerics and
/// underscores.
pub fn is_gateway_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Prospective customer captured by the lead form. Logged, never stored.
///
/// Fields keep whatever JSON the form sent; a phone number often arrives as
/// a bare number.
#[derive(Debug, Default)]
pub struct Lead {
    pub name: Option<Value>,
    pub phone: Option<Value>,
    pub product: Option<Value>,
}

impl Lead {
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let field = |name: &str| fields.get(name).filter(|value| !value.is_null()).cloned();
        Self { name: field("name"), phone: field("phone"), product: field("product") }
    }
}

/// Log rendering of a lead field: strings bare, other values as JSON,
/// absent as `None`.
pub struct LeadField<'a>(pub &'a Option<Value>);

impl fmt::Display for LeadField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Value::String(text)) => f.write_str(text),
            Some(other) => write!(f, "{other}"),
            None => f.write_str("None"),
        }
    }
}

/// Order request handed to the payment gateway.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PaymentOrder {
    #[serde(skip)]
    pub lead_id: String,
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
    pub notes: BTreeMap<String, String>,
}

impl PaymentOrder {
    pub fn for_lead(lead_id: &str, amount: u64, description: Option<&str>) -> Self {
        let mut notes = BTreeMap::new();
        notes.insert("lead_id".to_string(), lead_id.to_string());
        if let Some(description) = description {
            notes.insert("description".to_string(), description.to_string());
        }

        Self {
            lead_id: lead_id.to_string(),
            amount,
            currency: CURRENCY_INR.to_string(),
            receipt: format!("lead_{lead_id}"),
            notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentVerification {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Order as created by the gateway.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Payment as reported by the gateway.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Payment {
    pub id: String,
    pub status: String,
    pub amount: u64,
    pub currency: String,
    #[serde(default)]
    pub method: Option<String>,
    pub created_at: i64,
}
