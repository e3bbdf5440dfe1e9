//! Health, vendor webhook and lead form endpoints.

mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use common::*;
use serde_json::json;
use sunidhi_automation::handlers::HEALTH_MESSAGE;

#[tokio::test]
async fn health_returns_fixed_status_pair() {
    for _ in 0..2 {
        let (status, body) = send_json(app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "message": HEALTH_MESSAGE }));
    }
}

#[tokio::test]
async fn health_does_not_need_payment_gateway() {
    let (status, body) = send_json(app_without_gateway(), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn omnidim_webhook_accepts_json() {
    let request = json_request("POST", "/omnidim-webhook", r#"{"call_id":"c-1","summary":"hi"}"#);
    let (status, body) = send_json(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "received" }));
}

#[tokio::test]
async fn omnidim_webhook_accepts_form_fields() {
    let request = Request::builder()
        .method("POST")
        .uri("/omnidim-webhook")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("caller=Asha&phone=9999999999"))
        .unwrap();
    let (status, body) = send_json(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "received");
}

#[tokio::test]
async fn omnidim_webhook_tolerates_unparseable_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/omnidim-webhook")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("definitely not json"))
        .unwrap();
    let (status, body) = send_json(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "received");
}

#[tokio::test]
async fn razorpay_webhook_returns_no_content() {
    let request = json_request(
        "POST",
        "/razorpay-webhook",
        r#"{"event":"payment.captured","payload":{"payment":{"entity":{"id":"pay_1"}}}}"#,
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn razorpay_webhook_rejects_invalid_json_with_empty_body() {
    let request = json_request("POST", "/razorpay-webhook", "{not json");
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn submit_lead_is_acknowledged_and_repeatable() {
    let lead = r#"{"name":"Asha","phone":"9999999999","product":"X"}"#;
    let expected = json!({ "status": "success", "message": "Lead saved!" });

    let app = app();
    for _ in 0..2 {
        let (status, body) =
            send_json(app.clone(), json_request("POST", "/submit-lead", lead)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }
}

#[tokio::test]
async fn submit_lead_allows_missing_fields() {
    let (status, body) = send_json(app(), json_request("POST", "/submit-lead", "{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Lead saved!");
}

#[tokio::test]
async fn submit_lead_accepts_non_string_fields() {
    let lead = r#"{"name":"Asha","phone":9999999999,"product":["X","Y"]}"#;
    let (status, body) = send_json(app(), json_request("POST", "/submit-lead", lead)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "message": "Lead saved!" }));
}

#[tokio::test]
async fn submit_lead_rejects_non_object_body() {
    let (status, body) =
        send_json(app(), json_request("POST", "/submit-lead", r#"["Asha","9999999999"]"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Lead must be a JSON object" }));
}

#[tokio::test]
async fn submit_lead_rejects_malformed_body() {
    let (status, body) = send_json(app(), json_request("POST", "/submit-lead", "[1,2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
