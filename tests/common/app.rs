//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use brickboard::assets::AssetLoader;
use brickboard::models::AppConfig;
use brickboard::server::{build_router, create_app_state, create_app_state_from_config, AppState};
use brickboard::services::{InMemorySessionStore, SessionStore};

use super::fixtures;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestApp {
    /// Create a new test application using the embedded config
    pub fn new() -> Self {
        let asset_loader = Arc::new(AssetLoader::new(None));
        let state = create_app_state(asset_loader).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Two-color palette, 2x2-cell boards, 10 unit cells with 5 unit gaps
    pub fn small() -> Self {
        let state = create_app_state_from_config(fixtures::small_config())
            .expect("Failed to create app state");
        Self::from_state(state)
    }

    fn from_state(state: AppState) -> Self {
        let sessions = state.sessions.clone();
        let router = build_router(state);
        Self { router, sessions }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a DELETE request to the given path
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Request::delete(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Start a session on `image_data` and return its id
    pub async fn create_session(&self, image_data: &str, boards: &str) -> String {
        let body = serde_json::json!({ "imageData": image_data, "boards": boards });
        let response = self.post_json("/api/sessions", &body).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text());

        let json: serde_json::Value = response.json();
        json["sessionId"].as_str().unwrap().to_string()
    }

    /// Send one editor event to a session
    pub async fn event(&self, id: &str, event: serde_json::Value) -> TestResponse {
        self.post_json(&format!("/api/sessions/{id}/events"), &event)
            .await
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.len().await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
