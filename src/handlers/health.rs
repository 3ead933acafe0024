use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub background: String,
    pub version: String,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let background = if state.store.current().await.is_some() {
        "set"
    } else {
        "unset"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        background: background.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
