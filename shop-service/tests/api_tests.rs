mod common;

use std::sync::Arc;

use auth::ManualClock;
use chrono::Duration;
use common::TestApp;
use futures::future::join_all;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app.signup("nicola", "nicola@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_rejected() {
    let app = TestApp::spawn().await;

    app.signup("nicola", "nicola@example.com", "pass_word!").await;
    let response = app.signup("nicola2", "nicola@example.com", "other_pass").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));

    // The first registration keeps its password
    let response = app.login("nicola@example.com", "pass_word!").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_invalid_input() {
    let app = TestApp::spawn().await;

    let response = app.signup("n", "nicola@example.com", "pass_word").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.signup("nicola", "not-an-email", "pass_word").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.signup("nicola", "nicola@example.com", "").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.signup("nicola", "nicola@example.com", "pass_word!").await;

    let response = app.login("nicola@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["token_type"], "bearer");
    assert!(body["data"]["access_token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.signup("nicola", "nicola@example.com", "pass_word!").await;

    let response = app.login("nicola@example.com", "wrong").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["www-authenticate"], "Bearer");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::spawn().await;

    let response = app.login("ghost@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = TestApp::spawn().await;
    app.signup("nicola", "nicola@example.com", "pass_word!").await;

    let response = app.login("Nicola@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_token() {
    let app = TestApp::spawn().await;
    let token = app
        .signup_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "nicola");
    assert_eq!(body["data"]["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/profile")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["www-authenticate"], "Bearer");
}

#[tokio::test]
async fn test_profile_with_tampered_token() {
    let app = TestApp::spawn().await;
    let token = app
        .signup_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    let (body, signature) = token.rsplit_once('.').unwrap();
    let mut signature: Vec<char> = signature.chars().collect();
    signature[3] = if signature[3] == 'x' { 'y' } else { 'x' };
    let tampered = format!("{}.{}", body, signature.into_iter().collect::<String>());

    let response = app
        .get_authenticated("/profile", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_profile_with_expired_token() {
    let clock = Arc::new(ManualClock::default());
    let app = TestApp::spawn_with_clock(clock.clone()).await;
    let token = app
        .signup_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    clock.advance(Duration::minutes(31));

    let response = app
        .get_authenticated("/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_list_seeded_flowers() {
    let app = TestApp::spawn_seeded().await;

    let response = app
        .get("/flowers")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"],
        json!([
            {"id": 1, "name": "Rose", "color": "Red", "price": 10.0},
            {"id": 2, "name": "Tulip", "color": "Yellow", "price": 7.5}
        ])
    );
}

#[tokio::test]
async fn test_add_flower_assigns_next_id() {
    let app = TestApp::spawn_seeded().await;

    let response = app
        .post("/flowers")
        .json(&json!({"name": "Daisy", "color": "White", "price": 3.25}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 3);

    let body: serde_json::Value = app
        .get("/flowers")
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["data"][2]["name"], "Daisy");
}

#[tokio::test]
async fn test_add_flower_invalid_input() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/flowers")
        .json(&json!({"name": "Rose", "color": "Red", "price": -2.5}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .post("/flowers")
        .json(&json!({"name": "", "color": "Red", "price": 2.5}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_add_flower_price_above_limit() {
    let app = TestApp::spawn_seeded().await;
    let token = app
        .signup_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post("/flowers")
        .json(&json!({"name": "Orchid", "color": "White", "price": 7.0e28}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was stored, so the id is unknown to the cart
    let response = app
        .post_authenticated("/cart/items", &token)
        .form(&[("flower_id", "3")])
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post("/flowers")
        .json(&json!({"name": "Orchid", "color": "White", "price": 1000000000}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    for _ in 0..2 {
        let response = app
            .post_authenticated("/cart/items", &token)
            .form(&[("flower_id", "3")])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .get_authenticated("/cart/items", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["total_price"], 2000000000.0);
}

#[tokio::test]
async fn test_concurrent_flower_adds() {
    let app = TestApp::spawn().await;

    let requests = (0..100).map(|i| {
        app.post("/flowers")
            .json(&json!({"name": format!("Flower {}", i), "color": "Red", "price": 1.0}))
            .send()
    });

    let mut ids: Vec<u64> = Vec::new();
    for response in join_all(requests).await {
        let body: serde_json::Value = response
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");
        ids.push(body["data"]["id"].as_u64().unwrap());
    }

    ids.sort_unstable();
    assert_eq!(ids, (1..=100).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_cart_flow() {
    let app = TestApp::spawn_seeded().await;
    let token = app
        .signup_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    for flower_id in ["1", "2", "1"] {
        let response = app
            .post_authenticated("/cart/items", &token)
            .form(&[("flower_id", flower_id)])
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .get_authenticated("/cart/items", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["items"],
        json!([
            {"id": 1, "name": "Rose", "price": 10.0},
            {"id": 2, "name": "Tulip", "price": 7.5},
            {"id": 1, "name": "Rose", "price": 10.0}
        ])
    );
    assert_eq!(body["data"]["total_price"], 27.5);
}

#[tokio::test]
async fn test_cart_add_unknown_flower() {
    let app = TestApp::spawn_seeded().await;
    let token = app
        .signup_and_login("nicola", "nicola@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/cart/items", &token)
        .form(&[("flower_id", "99")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = app
        .get_authenticated("/cart/items", &token)
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["data"]["items"], json!([]));
    assert_eq!(body["data"]["total_price"], 0.0);
}

#[tokio::test]
async fn test_cart_requires_token() {
    let app = TestApp::spawn_seeded().await;

    let response = app
        .post("/cart/items")
        .form(&[("flower_id", "1")])
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get("/cart/items")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
