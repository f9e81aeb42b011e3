//! `GET /dashboard`: row counts for the admin landing page.

use axum::{Json, extract::State};
use folio_core::store::{ContentCounts, ContentStore, MediaStore};

use crate::{AdminState, error::ApiError};

pub async fn handler<S, M>(
  State(state): State<AdminState<S, M>>,
) -> Result<Json<ContentCounts>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  let counts = state.store.counts().await.map_err(ApiError::store)?;
  Ok(Json(counts))
}
