//! Public, read-only handlers serving reconciled content.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/content` | Whole [`PageContent`]; strong ETag, honours `If-None-Match` |
//! | `GET`  | `/profile` | Remote profile or the static one |
//! | `GET`  | `/skills` | Grouped categories, remote first |
//! | `GET`  | `/experiences` | Remote first, static entries not shadowed |
//! | `GET`  | `/projects` | Same, for projects |
//!
//! None of these fail because the store does: a failed read is logged and
//! treated as "no remote rows", so the static catalog shows through.

use std::{fmt::Display, sync::Arc};

use axum::{
  Json,
  extract::State,
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Response},
};
use folio_core::{
  content::{Experience, PersonalProfile, Project, SkillCategory},
  page::{self, PageContent, RemoteContent},
  store::ContentStore,
};

use crate::{error::ApiError, etag};

/// Turn a failed remote read into `None`, logging why.
fn absorb<T, E: Display>(section: &'static str, result: Result<T, E>) -> Option<T> {
  match result {
    Ok(value) => Some(value),
    Err(e) => {
      tracing::warn!(section, error = %e, "remote read failed; serving static content");
      None
    }
  }
}

/// Fetch all four remote sections concurrently.
pub async fn load_remote<S: ContentStore>(store: &S) -> RemoteContent {
  let (profile, skills, experiences, projects) = tokio::join!(
    store.get_profile(),
    store.list_skills(),
    store.list_experiences(),
    store.list_projects(),
  );

  RemoteContent {
    profile:     absorb("profile", profile).flatten(),
    skills:      absorb("skills", skills).unwrap_or_default(),
    experiences: absorb("experiences", experiences).unwrap_or_default(),
    projects:    absorb("projects", projects).unwrap_or_default(),
  }
}

// ─── Whole page ──────────────────────────────────────────────────────────────

/// `GET /content`
pub async fn page<S: ContentStore>(
  State(store): State<Arc<S>>,
  headers: HeaderMap,
) -> Result<Response, ApiError> {
  let content = PageContent::assemble(load_remote(store.as_ref()).await);
  let body = serde_json::to_vec(&content)?;
  let etag = etag::compute_etag(&body);

  if etag::if_none_match(&headers, &etag) {
    return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag.as_str())]).into_response());
  }

  Ok(
    (
      StatusCode::OK,
      [
        (header::CONTENT_TYPE, "application/json"),
        (header::ETAG, etag.as_str()),
      ],
      body,
    )
      .into_response(),
  )
}

// ─── Per-section views ───────────────────────────────────────────────────────

/// `GET /profile`
pub async fn profile<S: ContentStore>(State(store): State<Arc<S>>) -> Json<PersonalProfile> {
  let row = absorb("profile", store.get_profile().await).flatten();
  Json(page::merged_profile(row))
}

/// `GET /skills`
pub async fn skills<S: ContentStore>(State(store): State<Arc<S>>) -> Json<Vec<SkillCategory>> {
  let rows = absorb("skills", store.list_skills().await).unwrap_or_default();
  Json(page::merged_skills(rows))
}

/// `GET /experiences`
pub async fn experiences<S: ContentStore>(
  State(store): State<Arc<S>>,
) -> Json<Vec<Experience>> {
  let records = absorb("experiences", store.list_experiences().await).unwrap_or_default();
  Json(page::merged_experiences(records))
}

/// `GET /projects`
pub async fn projects<S: ContentStore>(State(store): State<Arc<S>>) -> Json<Vec<Project>> {
  let records = absorb("projects", store.list_projects().await).unwrap_or_default();
  Json(page::merged_projects(records))
}
