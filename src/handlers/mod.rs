//! Request handlers.

mod health;
mod leads;
mod payments;
mod webhooks;

pub use health::{health_check, HEALTH_MESSAGE};
pub use leads::submit_lead;
pub use payments::{checkout, payment_status, verify_payment};
pub use webhooks::{omnidim_webhook, razorpay_webhook};
