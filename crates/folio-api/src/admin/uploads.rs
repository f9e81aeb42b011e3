//! Handlers for `/uploads`: raw request bodies stored through [`MediaStore`].
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `PUT`  | `/uploads/{file_name}` | Stored under the default folder |
//! | `PUT`  | `/uploads/{folder}/{file_name}` | `folder` must match `[A-Za-z0-9_-]+` |
//!
//! Both return 201 and `{"url":"..."}`. `file_name` only supplies the
//! extension; the stored name is generated.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use bytes::Bytes;
use folio_core::{
  media,
  store::{ContentStore, MediaStore},
};
use serde::Serialize;

use crate::{AdminState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct Uploaded {
  pub url: String,
}

/// `PUT /uploads/{file_name}`
pub async fn to_default_folder<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(file_name): Path<String>,
  body: Bytes,
) -> Result<(StatusCode, Json<Uploaded>), ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  store(&state, media::DEFAULT_FOLDER, &file_name, body).await
}

/// `PUT /uploads/{folder}/{file_name}`
pub async fn to_folder<S, M>(
  State(state): State<AdminState<S, M>>,
  Path((folder, file_name)): Path<(String, String)>,
  body: Bytes,
) -> Result<(StatusCode, Json<Uploaded>), ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  store(&state, &folder, &file_name, body).await
}

async fn store<S, M>(
  state: &AdminState<S, M>,
  folder: &str,
  file_name: &str,
  body: Bytes,
) -> Result<(StatusCode, Json<Uploaded>), ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  let folder = media::validate_folder(folder)?;
  if body.is_empty() {
    return Err(ApiError::BadRequest("upload body is empty".into()));
  }

  let size = body.len();
  let url = state
    .media
    .upload(folder, file_name, body)
    .await
    .map_err(ApiError::media)?;
  tracing::info!(folder, size, url = %url, "media uploaded");
  Ok((StatusCode::CREATED, Json(Uploaded { url })))
}
