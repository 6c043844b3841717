mod common;

use common::{tournament_payload, TestApp};
use reqwest::Client;
use serde_json::json;

async fn create_and_get_id(app: &TestApp, sport: &str, max_participants: u32) -> String {
    let response = app
        .create_tournament(&tournament_payload(sport, max_participants))
        .await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["tournament"]["tournament_id"]
        .as_str()
        .unwrap()
        .to_string()
}

fn join_payload(user_address: &str) -> serde_json::Value {
    json!({ "user_address": user_address, "amount": "0.01" })
}

#[tokio::test]
async fn join_tournament_happy_path() {
    let app = TestApp::spawn().await;
    let tournament_id = create_and_get_id(&app, "cricket", 10).await;

    let response = app
        .join_tournament(
            &tournament_id,
            &join_payload("0x1111111111111111111111111111111111111111"),
        )
        .await;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully joined tournament");
    assert_eq!(body["tournament"]["participants"], 1);
    assert_eq!(body["tournament"]["status"], "Active");

    let transaction_hash = body["blockchain"]["transaction_hash"].as_str().unwrap();
    assert_eq!(transaction_hash.len(), 66);
    assert!(transaction_hash.starts_with("0x"));

    // The join record is visible through the participants endpoint
    let client = Client::new();
    let response = client
        .get(format!(
            "{}/api/tournaments/{}/participants",
            app.address, tournament_id
        ))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let participants = body["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(
        participants[0]["user_address"],
        "0x1111111111111111111111111111111111111111"
    );
    assert_eq!(participants[0]["amount_paid"], "0.01");
    assert_eq!(participants[0]["transaction_hash"], transaction_hash);

    app.cleanup().await;
}

#[tokio::test]
async fn join_unknown_tournament_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .join_tournament("does-not-exist", &join_payload("0xaaaa"))
        .await;
    assert_eq!(response.status().as_u16(), 404);

    app.cleanup().await;
}

#[tokio::test]
async fn join_with_missing_fields_returns_400() {
    let app = TestApp::spawn().await;
    let tournament_id = create_and_get_id(&app, "cricket", 10).await;

    let response = app.join_tournament(&tournament_id, &json!({})).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Missing required fields"));

    app.cleanup().await;
}

#[tokio::test]
async fn join_fills_capacity_and_flips_inactive() {
    let app = TestApp::spawn().await;
    let tournament_id = create_and_get_id(&app, "football", 2).await;

    let response = app
        .join_tournament(&tournament_id, &join_payload("0xaaa1"))
        .await;
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["tournament"]["participants"], 1);
    assert_eq!(body["tournament"]["status"], "Active");

    let response = app
        .join_tournament(&tournament_id, &join_payload("0xaaa2"))
        .await;
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["tournament"]["participants"], 2);
    assert_eq!(body["tournament"]["status"], "Inactive");

    // Capacity reached: the tournament no longer accepts joins
    let response = app
        .join_tournament(&tournament_id, &join_payload("0xaaa3"))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Tournament is not active");

    app.cleanup().await;
}

#[tokio::test]
async fn duplicate_join_returns_conflict() {
    let app = TestApp::spawn().await;
    let tournament_id = create_and_get_id(&app, "tennis", 10).await;

    let response = app
        .join_tournament(&tournament_id, &join_payload("0xbbb1"))
        .await;
    assert!(response.status().is_success());

    let response = app
        .join_tournament(&tournament_id, &join_payload("0xbbb1"))
        .await;
    assert_eq!(response.status().as_u16(), 409);

    // The repeat attempt must not move the participant count
    let client = Client::new();
    let response = client
        .get(format!(
            "{}/api/tournaments/{}",
            app.address, tournament_id
        ))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["tournament"]["participants"], 1);

    app.cleanup().await;
}

#[tokio::test]
async fn join_inactive_tournament_returns_400() {
    let app = TestApp::spawn().await;

    let mut payload = tournament_payload("hockey", 10);
    payload["status"] = json!("Inactive");
    let response = app.create_tournament(&payload).await;
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let tournament_id = body["tournament"]["tournament_id"].as_str().unwrap();

    let response = app
        .join_tournament(tournament_id, &join_payload("0xccc1"))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Tournament is not active");

    app.cleanup().await;
}

#[tokio::test]
async fn participants_for_unknown_tournament_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/tournaments/does-not-exist/participants",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);

    app.cleanup().await;
}

#[tokio::test]
async fn update_status_endpoint_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let tournament_id = create_and_get_id(&app, "badminton", 10).await;

    let response = client
        .put(format!(
            "{}/api/tournaments/{}/status",
            app.address, tournament_id
        ))
        .json(&json!({ "status": "Completed" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["tournament"]["status"], "Completed");

    // Completed tournaments reject joins
    let response = app
        .join_tournament(&tournament_id, &join_payload("0xddd1"))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .put(format!(
            "{}/api/tournaments/does-not-exist/status",
            app.address
        ))
        .json(&json!({ "status": "Cancelled" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);

    app.cleanup().await;
}
