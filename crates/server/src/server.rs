use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;

use std::sync::Arc;

use crate::{calculation, minimum_wage::MinimumWageProvider, preview, share};

#[derive(Clone)]
pub struct ServerState {
    pub minimum_wage: Arc<MinimumWageProvider>,
    /// Public origin share links point to, e.g. `https://rateio.app`.
    pub public_base_url: String,
}

impl ServerState {
    pub fn new(minimum_wage: MinimumWageProvider, public_base_url: impl Into<String>) -> Self {
        Self {
            minimum_wage: Arc::new(minimum_wage),
            public_base_url: public_base_url.into(),
        }
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/minimum-wage", get(calculation::minimum_wage))
        .route("/calculate", post(calculation::calculate))
        .route("/results", get(calculation::results))
        .route("/share", post(share::share_url))
        .route("/preview", get(preview::preview))
        .with_state(state)
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
