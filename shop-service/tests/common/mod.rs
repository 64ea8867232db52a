#![allow(dead_code)]

use std::sync::Arc;

use auth::Clock;
use auth::SystemClock;
use auth::TokenService;
use chrono::Duration;
use serde_json::json;
use shop_service::create_router;
use shop_service::AppState;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub state: AppState,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with an empty catalog
    pub async fn spawn() -> Self {
        Self::spawn_with_clock(Arc::new(SystemClock)).await
    }

    /// Spawn the application with the default Rose and Tulip catalog
    pub async fn spawn_seeded() -> Self {
        let app = Self::spawn().await;
        app.state
            .flower_service
            .seed_default_catalog()
            .expect("Failed to seed catalog");
        app
    }

    /// Spawn the application with token time read from `clock`
    pub async fn spawn_with_clock(clock: Arc<dyn Clock>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::with_clock(
            TEST_SECRET,
            Duration::minutes(30),
            clock,
        ));
        let state = AppState::in_memory(token_service);
        let router = create_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            state,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user through the API
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/signup")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in through the API
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning the access token
    pub async fn signup_and_login(&self, username: &str, email: &str, password: &str) -> String {
        self.signup(username, email, password).await;

        let body: serde_json::Value = self
            .login(email, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}
