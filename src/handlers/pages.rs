use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

use crate::web;

pub async fn index() -> impl IntoResponse {
    Html(web::INDEX_HTML)
}

pub async fn binder_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, mime::TEXT_JAVASCRIPT.as_ref())],
        web::BINDER_JS,
    )
}

pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, mime::TEXT_CSS.as_ref())],
        web::STYLESHEET_CSS,
    )
}

/// Fallback for every path the router does not know.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(web::NOT_FOUND_HTML))
}
