//! Handlers for `/skills`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/skills` | Raw rows in `sort_order` |
//! | `GET`    | `/skills/categories` | Preset category names for the skill form |
//! | `POST`   | `/skills` | Body: `{"name":"...","category":"..."}`; appends, 201 |
//! | `DELETE` | `/skills/{id}` | 204, or 404 if absent |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  catalog,
  row::{NewSkill, SkillRow},
  store::{ContentStore, MediaStore},
};

use crate::{AdminState, drafts::FormKey, error::ApiError};

/// `GET /skills`
pub async fn list<S, M>(
  State(state): State<AdminState<S, M>>,
) -> Result<Json<Vec<SkillRow>>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  let rows = state.store.list_skills().await.map_err(ApiError::store)?;
  Ok(Json(rows))
}

/// `GET /skills/categories`
pub async fn categories() -> Json<Vec<String>> { Json(catalog::skill_categories()) }

/// `POST /skills`
pub async fn create<S, M>(
  State(state): State<AdminState<S, M>>,
  Json(body): Json<NewSkill>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  body.validate()?;
  let row = state.store.add_skill(body).await.map_err(ApiError::store)?;
  state.drafts.clear(FormKey::Skill).await;
  Ok((StatusCode::CREATED, Json(row)))
}

/// `DELETE /skills/{id}`
pub async fn delete_one<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  if state.store.delete_skill(id).await.map_err(ApiError::store)? {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("skill {id} not found")))
  }
}
