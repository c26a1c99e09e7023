use super::MockProvider;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chat_relay::{
    config::ProviderConfig,
    llm::GenerativeModel,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

/// Provider settings with defaults and a dummy key
pub fn create_test_provider_config() -> ProviderConfig {
    ProviderConfig {
        api_key: "test-api-key".to_string(),
        ..ProviderConfig::default()
    }
}

pub fn create_test_state(provider: MockProvider) -> AppState {
    let model = GenerativeModel::new(Arc::new(provider), &create_test_provider_config());
    AppState::new(model.start_chat())
}

pub fn create_test_app(provider: MockProvider) -> (Router, AppState) {
    let state = create_test_state(provider);
    (server::router(state.clone()), state)
}

pub fn chat_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
