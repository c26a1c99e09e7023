pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{GeminiClient, GenerativeModel},
};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `state` on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

pub async fn run(config: Config) -> Result<()> {
    // One session for the whole process
    let client = GeminiClient::new(&config.provider)?;
    let model = GenerativeModel::new(Arc::new(client), &config.provider);
    let state = AppState::new(model.start_chat());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {} with model {}", addr, model.name());

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}
