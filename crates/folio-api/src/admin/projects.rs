//! Handlers for `/projects`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/projects` | Raw records with tags and images, newest first |
//! | `POST`   | `/projects` | Body: [`ProjectInput`]; 201 + stored record |
//! | `PUT`    | `/projects/{id}` | Replaces fields, tags and images; 404 if absent |
//! | `DELETE` | `/projects/{id}` | 404 if absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  row::{ProjectInput, ProjectRecord},
  store::{ContentStore, MediaStore},
};

use crate::{AdminState, drafts::FormKey, error::ApiError};

fn not_found(id: i64) -> ApiError { ApiError::NotFound(format!("project {id} not found")) }

/// `GET /projects`
pub async fn list<S, M>(
  State(state): State<AdminState<S, M>>,
) -> Result<Json<Vec<ProjectRecord>>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  let records = state.store.list_projects().await.map_err(ApiError::store)?;
  Ok(Json(records))
}

/// `POST /projects`
pub async fn create<S, M>(
  State(state): State<AdminState<S, M>>,
  Json(body): Json<ProjectInput>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  body.validate()?;
  let record = state
    .store
    .save_project(None, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("project vanished after insert".into()))?;
  state.drafts.clear(FormKey::Project).await;
  tracing::info!(id = record.row.id, title = %record.row.title, "project created");
  Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /projects/{id}`
pub async fn update<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(id): Path<i64>,
  Json(body): Json<ProjectInput>,
) -> Result<Json<ProjectRecord>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  body.validate()?;
  let record = state
    .store
    .save_project(Some(id), body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  state.drafts.clear(FormKey::Project).await;
  tracing::info!(id, "project updated");
  Ok(Json(record))
}

/// `DELETE /projects/{id}`
pub async fn delete_one<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  if state.store.delete_project(id).await.map_err(ApiError::store)? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(not_found(id))
  }
}
