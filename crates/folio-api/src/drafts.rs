//! Opt-in cache for half-finished admin forms.
//!
//! One draft per form. A draft lives until it is cleared explicitly or the
//! matching form is saved successfully. A disabled cache stores nothing.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/drafts/{form}` | 404 when there is no draft |
//! | `PUT`    | `/drafts/{form}` | Any JSON value; 204, or 404 when drafts are disabled |
//! | `DELETE` | `/drafts/{form}` | 204 |

use std::collections::HashMap;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use folio_core::store::{ContentStore, MediaStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{AdminState, error::ApiError};

/// Identity of an admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKey {
  Profile,
  Experience,
  Project,
  Skill,
}

#[derive(Debug, Default)]
pub struct DraftCache {
  enabled: bool,
  drafts:  RwLock<HashMap<FormKey, Value>>,
}

impl DraftCache {
  pub fn new(enabled: bool) -> Self { Self { enabled, drafts: RwLock::default() } }

  pub fn is_enabled(&self) -> bool { self.enabled }

  pub async fn get(&self, form: FormKey) -> Option<Value> {
    self.drafts.read().await.get(&form).cloned()
  }

  /// Store `value` as the draft for `form`. Returns `false` when disabled.
  pub async fn put(&self, form: FormKey, value: Value) -> bool {
    if !self.enabled {
      return false;
    }
    self.drafts.write().await.insert(form, value);
    true
  }

  /// Drop the draft for `form`, returning whether there was one.
  pub async fn clear(&self, form: FormKey) -> bool {
    self.drafts.write().await.remove(&form).is_some()
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

/// `GET /drafts/{form}`
pub async fn get_one<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(form): Path<FormKey>,
) -> Result<Json<Value>, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  state
    .drafts
    .get(form)
    .await
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("no draft for {form:?}")))
}

/// `PUT /drafts/{form}`
pub async fn put_one<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(form): Path<FormKey>,
  Json(value): Json<Value>,
) -> Result<StatusCode, ApiError>
where
  S: ContentStore,
  M: MediaStore,
{
  if state.drafts.put(form, value).await {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound("drafts are disabled".into()))
  }
}

/// `DELETE /drafts/{form}`
pub async fn clear_one<S, M>(
  State(state): State<AdminState<S, M>>,
  Path(form): Path<FormKey>,
) -> StatusCode
where
  S: ContentStore,
  M: MediaStore,
{
  state.drafts.clear(form).await;
  StatusCode::NO_CONTENT
}
