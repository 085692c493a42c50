//! API integration tests
//!
//! These run against a live server with a reachable database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_ads_preflight() {
    let client = Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/ads", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_ads_method_not_allowed() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/ads", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 405);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
#[ignore]
async fn test_visits_method_not_allowed() {
    let client = Client::new();

    let response = client
        .put(format!("{}/visits", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 405);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
#[ignore]
async fn test_active_ad_slot() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ads", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    // An empty slot is still a 200
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    if body["id"].is_number() {
        assert!(body["company_name"].is_string());
        assert!(body["ad_title"].is_string());
        assert!(body["ad_description"].is_string());
        assert!(body["start_date"].is_string());
        assert!(body["end_date"].is_string());
    } else {
        assert_eq!(body["message"], "No active ads");
    }
}

#[tokio::test]
#[ignore]
async fn test_submit_ad_quotes_inclusive_days() {
    let client = Client::new();

    let response = client
        .post(format!("{}/ads", BASE_URL))
        .json(&json!({
            "company_name": "Acme",
            "contact_email": "ads@acme.example",
            "ad_title": "Spring sale",
            "ad_description": "Everything must go",
            "price_per_day": 100,
            "start_date": "2024-01-01",
            "end_date": "2024-01-03"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["id"].as_i64().expect("No id in response") > 0);
    assert_eq!(body["message"], "Ad request submitted");
    assert_eq!(body["days"], 3);
    assert_eq!(body["total_cost"], 300.0);
    assert!(body["payment_phone"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_submit_ad_missing_field() {
    let client = Client::new();

    // company_name is required
    let response = client
        .post(format!("{}/ads", BASE_URL))
        .json(&json!({
            "contact_email": "ads@acme.example",
            "ad_title": "Spring sale",
            "ad_description": "Everything must go",
            "price_per_day": 100,
            "start_date": "2024-01-01",
            "end_date": "2024-01-03"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_client_error());
}

#[tokio::test]
#[ignore]
async fn test_submit_ad_rejects_inverted_period() {
    let client = Client::new();

    let response = client
        .post(format!("{}/ads", BASE_URL))
        .json(&json!({
            "company_name": "Acme",
            "contact_email": "ads@acme.example",
            "ad_title": "Spring sale",
            "ad_description": "Everything must go",
            "price_per_day": 100,
            "start_date": "2024-01-03",
            "end_date": "2024-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_visit_counter_increments() {
    let client = Client::new();

    let first: Value = client
        .post(format!("{}/visits", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let second: Value = client
        .post(format!("{}/visits", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let c1 = first["count"].as_i64().expect("No count in response");
    let c2 = second["count"].as_i64().expect("No count in response");
    assert_eq!(c2, c1 + 1);
    assert_eq!(first["date"], second["date"]);

    let totals: Value = client
        .get(format!("{}/visits", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(totals["today"].as_i64().expect("No today in response"), c2);
    assert!(totals["total"].as_i64().expect("No total in response") >= c2);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_visits_do_not_lose_increments() {
    const VISITS: usize = 10;

    let client = Client::new();

    let before: Value = client
        .get(format!("{}/visits", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let baseline = before["today"].as_i64().expect("No today in response");

    let mut handles = Vec::new();
    for _ in 0..VISITS {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let response = client
                .post(format!("{}/visits", BASE_URL))
                .send()
                .await
                .expect("Failed to send request");
            assert_eq!(response.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.expect("Visit task panicked");
    }

    let after: Value = client
        .get(format!("{}/visits", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(
        after["today"].as_i64().expect("No today in response"),
        baseline + VISITS as i64
    );
}
