//! Handlers for `/profile`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/profile` | The stored row; 404 before the first save |
//! | `PUT`  | `/profile` | Body: [`ProfileInput`]; upserts the single row |

use axum::{Json, extract::State};
use folio_core::{
  row::{ProfileInput, ProfileRow},
  store::{ContentStore, MediaStore},
};

use crate::{AdminState, drafts::FormKey, error::ApiError};

/// `GET /profile`
pub async fn get_one<S, M>(
  State(state): State<AdminState<S, M>>,
) -> Result<Json<ProfileRow>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  let row = state
    .store
    .get_profile()
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("no profile has been saved".into()))?;
  Ok(Json(row))
}

/// `PUT /profile`
pub async fn save<S, M>(
  State(state): State<AdminState<S, M>>,
  Json(body): Json<ProfileInput>,
) -> Result<Json<ProfileRow>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  body.validate()?;
  let row = state.store.save_profile(body).await.map_err(ApiError::store)?;
  state.drafts.clear(FormKey::Profile).await;
  tracing::info!(id = row.id, "profile saved");
  Ok(Json(row))
}
