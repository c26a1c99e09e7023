use super::types::{ChatRequest, ChatResponse, ErrorResponse};
use crate::llm::ChatSession;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<ChatSession>>,
}

impl AppState {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, HandlerError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected chat request: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })?;

    if request.user_input.trim().is_empty() {
        warn!("Rejected chat request with empty user_input");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "user_input must not be empty".to_string(),
            }),
        ));
    }

    info!("Received chat request ({} bytes)", request.user_input.len());

    // Held across the provider call so turns land in arrival order.
    let mut session = state.session.lock().await;
    let session_id = session.id();

    match session.send_message(&request.user_input).await {
        Ok(response) => {
            info!("Successfully relayed reply for session: {}", session_id);
            Ok(Json(ChatResponse { response }))
        }
        Err(e) => {
            error!("Provider call failed for session {}: {}", session_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
