//! Handlers for `/experiences`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/experiences` | Raw records with their image rows, newest first |
//! | `POST`   | `/experiences` | Body: [`ExperienceInput`]; 201 + stored record |
//! | `PUT`    | `/experiences/{id}` | Replaces fields and images; 404 if absent |
//! | `DELETE` | `/experiences/{id}` | Images go with it; 404 if absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  row::{ExperienceInput, ExperienceRecord},
  store::{ContentStore, MediaStore},
};

use crate::{AdminState, drafts::FormKey, error::ApiError};

fn not_found(id: i64) -> ApiError { ApiError::NotFound(format!("experience {id} not found")) }

/// `GET /experiences`
pub async fn list<S, M>(
  State(state): State<AdminState<S, M>>,
) -> Result<Json<Vec<ExperienceRecord>>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  let records = state.store.list_experiences().await.map_err(ApiError::store)?;
  Ok(Json(records))
}

/// `POST /experiences`
pub async fn create<S, M>(
  State(state): State<AdminState<S, M>>,
  Json(body): Json<ExperienceInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  body.validate()?;
  let record = state
    .store
    .save_experience(None, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("experience vanished after insert".into()))?;
  state.drafts.clear(FormKey::Experience).await;
  tracing::info!(id = record.row.id, title = %record.row.title, "experience created");
  Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /experiences/{id}`
pub async fn update<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(id): Path<i64>,
  Json(body): Json<ExperienceInput>,
) -> Result<Json<ExperienceRecord>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  body.validate()?;
  let record = state
    .store
    .save_experience(Some(id), body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  state.drafts.clear(FormKey::Experience).await;
  tracing::info!(id, "experience updated");
  Ok(Json(record))
}

/// `DELETE /experiences/{id}`
pub async fn delete_one<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  if state.store.delete_experience(id).await.map_err(ApiError::store)? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(not_found(id))
  }
}
