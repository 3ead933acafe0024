use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use futures::TryStreamExt;
use tokio_util::io::{ReaderStream, StreamReader};
use tracing::info;

use crate::AppState;
use crate::error::AppError;

/// Where the browser lands after hitting the upload path.
const AFTER_UPLOAD: &str = "/index.html";

/// Accepts the upload form's multipart submission and replaces the stored
/// background with the first `file` field, then sends the browser back to
/// the page (303 See Other).
pub async fn upload_background(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut stored = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" && stored.is_none() {
            // Stream the field straight into the store, hashing on the fly.
            let body_with_io_error =
                field.map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err));
            let reader = StreamReader::new(body_with_io_error);

            let meta = state.store.replace(reader).await.map_err(|e| {
                tracing::error!("Background replace failed: {:?}", e);
                AppError::Internal(e.to_string())
            })?;

            info!(
                "🖼️  Background replaced: {} bytes, sha256={}",
                meta.size, meta.hash
            );
            stored = Some(meta);
        }
    }

    stored.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    Ok(Redirect::to(AFTER_UPLOAD))
}

/// The upload path answers the same redirect for non-POST methods; only a
/// POST touches storage.
pub async fn upload_redirect() -> Redirect {
    Redirect::to(AFTER_UPLOAD)
}

/// Streams the current background image. Revalidation is cheap: the strong
/// ETag is the image's SHA256, so an unchanged background short-circuits to
/// 304 Not Modified.
pub async fn current_background(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some((file, meta)) = state.store.open_current().await? else {
        return Err(AppError::NotFound("no background uploaded yet".to_string()));
    };

    let etag = format!("\"{}\"", meta.hash);
    if headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == etag)
    {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    let body = Body::from_stream(ReaderStream::new(file));
    let response_headers = [
        (header::CONTENT_TYPE, mime::IMAGE_JPEG.to_string()),
        (header::CONTENT_LENGTH, meta.size.to_string()),
        (header::ETAG, etag),
        (header::CACHE_CONTROL, "no-cache".to_string()),
    ];

    Ok((response_headers, body).into_response())
}
