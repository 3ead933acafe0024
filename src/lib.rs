pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod web;

use crate::config::ServerConfig;
use crate::services::storage::BackgroundStore;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BackgroundStore>,
    pub config: ServerConfig,
}

pub fn create_app(state: AppState) -> Router {
    let max_upload_size = state.config.max_upload_size;

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/index.html", get(handlers::pages::index))
        .route("/main.js", get(handlers::pages::binder_script))
        .route("/style.css", get(handlers::pages::stylesheet))
        .route("/bg.jpg", get(handlers::background::current_background))
        .route(
            "/upload_bg",
            post(handlers::background::upload_background)
                .fallback(handlers::background::upload_redirect),
        )
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::pages::not_found)
        .layer(from_fn(middleware::request_id::request_id_middleware))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .with_state(state)
}
