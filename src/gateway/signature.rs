//! Razorpay checkout signatures.
//!
//! A successful checkout hands back `razorpay_signature`, the hex encoded
//! HMAC-SHA256 of `"<order_id>|<payment_id>"` keyed with the key secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac_for(order_id: &str, payment_id: &str, key_secret: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(key_secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac
}

pub fn payment_signature(order_id: &str, payment_id: &str, key_secret: &str) -> String {
    hex::encode(mac_for(order_id, payment_id, key_secret).finalize().into_bytes())
}

/// Constant-time check of a checkout signature. Malformed hex never matches.
pub fn is_valid_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    key_secret: &str,
) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    mac_for(order_id, payment_id, key_secret).verify_slice(&expected).is_ok()
}
