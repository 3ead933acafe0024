use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use backdrop::config::ServerConfig;
use backdrop::services::storage::BackgroundStore;
use backdrop::{AppState, create_app};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        port: 0,
        data_dir: dir.path().to_str().unwrap().to_string(),
        max_upload_size: 1024 * 1024,
    };
    let store = Arc::new(BackgroundStore::open(&config.data_dir).await.unwrap());
    let app = create_app(AppState { store, config });
    (app, dir)
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_declares_upload_elements() {
    let (app, _dir) = test_app().await;

    let (status, content_type, body) = get_text(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");

    // The hidden file input and the form the trigger script binds to
    assert!(body.contains(r#"class="file_input""#));
    assert!(body.contains(r#"type="file""#));
    assert!(body.contains("hidden"));
    assert!(body.contains(r#"class="upload_form""#));
    assert!(body.contains(r#"action="/upload_bg""#));
    assert!(body.contains(r#"method="post""#));
    assert!(body.contains(r#"enctype="multipart/form-data""#));
    assert!(body.contains(r#"<script src="/main.js">"#));

    // "/" and "/index.html" are the same page
    let (status, _, index_body) = get_text(&app, "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, index_body);
}

#[tokio::test]
async fn test_binder_script_contract() {
    let (app, _dir) = test_app().await;

    let (status, content_type, body) = get_text(&app, "/main.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/javascript");

    // Binds on DOM ready, once
    assert!(body.contains("DOMContentLoaded"));
    assert!(body.contains("dataset.uploadBound"));

    // Locates both elements and warns instead of throwing when one is missing
    assert!(body.contains(".file_input"));
    assert!(body.contains(".upload_form"));
    assert!(body.contains("console.warn"));

    // One document-wide click listener opening the picker, one change
    // listener submitting the form
    assert_eq!(body.matches("addEventListener('click'").count(), 1);
    assert!(body.contains("fileInput.click()"));
    assert_eq!(body.matches("addEventListener('change'").count(), 1);
    assert_eq!(body.matches("uploadForm.submit()").count(), 1);

    // The synthetic click from fileInput.click() must not re-open the picker
    assert!(body.contains("event.target === fileInput"));
}

#[tokio::test]
async fn test_stylesheet_paints_background() {
    let (app, _dir) = test_app().await;

    let (status, content_type, body) = get_text(&app, "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/css");
    assert!(body.contains("background-image"));
    assert!(body.contains("/bg.jpg"));
}

#[tokio::test]
async fn test_unknown_path_serves_not_found_page() {
    let (app, _dir) = test_app().await;

    let (status, content_type, body) = get_text(&app, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_missing_background_serves_not_found_page() {
    let (app, _dir) = test_app().await;

    let (status, _, body) = get_text(&app, "/bg.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_get_on_upload_path_redirects_without_storing() {
    let (app, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/upload_bg").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/index.html"
    );

    // Any non-POST method gets the same redirect
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/upload_bg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (status, _, _) = get_text(&app, "/bg.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _dir) = test_app().await;

    // A provided id is echoed back
    let response = app
        .clone()
        .oneshot(
            Request::get("/")
                .header("x-request-id", "test-id-1234")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-id-1234"
    );

    // A missing id gets minted
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().get("x-request-id").is_some());
}
