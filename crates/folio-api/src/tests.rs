//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use bytes::Bytes;
use folio_core::{
  catalog,
  row::{
    ExperienceInput, ExperienceRecord, NewSkill, ProfileInput, ProfileRow,
    ProjectInput, ProjectRecord, SkillRow,
  },
  store::{ContentCounts, ContentStore, MediaStore},
};
use folio_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use super::*;

// ─── Fixtures ────────────────────────────────────────────────────────────────

/// A store whose every call fails, as if the database were unreachable.
struct DownStore;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Down;

impl ContentStore for DownStore {
  type Error = Down;
  async fn get_profile(&self) -> Result<Option<ProfileRow>, Down> { Err(Down) }
  async fn save_profile(&self, _: ProfileInput) -> Result<ProfileRow, Down> { Err(Down) }
  async fn list_skills(&self) -> Result<Vec<SkillRow>, Down> { Err(Down) }
  async fn add_skill(&self, _: NewSkill) -> Result<SkillRow, Down> { Err(Down) }
  async fn delete_skill(&self, _: i64) -> Result<bool, Down> { Err(Down) }
  async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>, Down> { Err(Down) }
  async fn save_experience(
    &self,
    _: Option<i64>,
    _: ExperienceInput,
  ) -> Result<Option<ExperienceRecord>, Down> {
    Err(Down)
  }
  async fn delete_experience(&self, _: i64) -> Result<bool, Down> { Err(Down) }
  async fn list_projects(&self) -> Result<Vec<ProjectRecord>, Down> { Err(Down) }
  async fn save_project(
    &self,
    _: Option<i64>,
    _: ProjectInput,
  ) -> Result<Option<ProjectRecord>, Down> {
    Err(Down)
  }
  async fn delete_project(&self, _: i64) -> Result<bool, Down> { Err(Down) }
  async fn counts(&self) -> Result<ContentCounts, Down> { Err(Down) }
  async fn ping(&self) -> Result<u64, Down> { Err(Down) }
}

/// Records uploads in memory and hands back predictable URLs.
#[derive(Default)]
struct MemoryMedia {
  objects: Mutex<Vec<(String, String, usize)>>,
}

impl MediaStore for MemoryMedia {
  type Error = std::convert::Infallible;

  async fn upload<'a>(
    &'a self,
    folder: &'a str,
    original_name: &'a str,
    bytes: Bytes,
  ) -> Result<String, Self::Error> {
    let mut objects = self.objects.lock().unwrap();
    objects.push((folder.to_owned(), original_name.to_owned(), bytes.len()));
    Ok(format!("memory://{folder}/{}", objects.len()))
  }
}

struct Harness {
  store:  Arc<SqliteStore>,
  media:  Arc<MemoryMedia>,
  drafts: Arc<DraftCache>,
}

impl Harness {
  async fn new(drafts_enabled: bool) -> Self {
    Self {
      store:  Arc::new(SqliteStore::open_in_memory().await.unwrap()),
      media:  Arc::new(MemoryMedia::default()),
      drafts: Arc::new(DraftCache::new(drafts_enabled)),
    }
  }

  fn router(&self) -> Router {
    Router::new()
      .nest("/api", api_router(self.store.clone()))
      .nest(
        "/api/admin",
        admin_router(AdminState {
          store:  self.store.clone(),
          media:  self.media.clone(),
          drafts: self.drafts.clone(),
        }),
      )
  }

  async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
    let resp = self.router().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
  }

  async fn get(&self, uri: &str) -> (StatusCode, Value) {
    self.send(Request::get(uri).body(Body::empty()).unwrap()).await
  }

  async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    self.send(req).await
  }
}

fn experience_body(title: &str) -> Value {
  json!({
    "title": title,
    "organization": "HMIF",
    "kind": "organization",
    "start_date": "2024",
    "end_date": "",
    "description": "remote",
    "images": [{ "src": "a.jpg" }],
  })
}

// ─── Public reads ────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_serves_the_catalog() {
  let h = Harness::new(false).await;
  let (status, body) = h.get("/api/projects").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, serde_json::to_value(catalog::projects()).unwrap());

  let (_, profile) = h.get("/api/profile").await;
  assert_eq!(profile["name"], catalog::profile().name);
}

#[tokio::test]
async fn unreachable_store_degrades_to_the_catalog() {
  let app = Router::new().nest("/api", api_router(Arc::new(DownStore)));
  let resp = app
    .oneshot(Request::get("/api/content").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::OK);

  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let page: folio_core::page::PageContent = serde_json::from_slice(&bytes).unwrap();
  assert_eq!(page, folio_core::page::PageContent::fallback());
}

#[tokio::test]
async fn keep_alive_reports_store_failure() {
  let app = Router::new().nest("/api", api_router(Arc::new(DownStore)));
  let resp = app
    .oneshot(Request::get("/api/keep-alive").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn keep_alive_counts_profile_rows() {
  let h = Harness::new(false).await;
  let (status, body) = h.get("/api/keep-alive").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["status"], "ok");
  assert_eq!(body["row_count"], 0);
}

#[tokio::test]
async fn content_etag_round_trip() {
  let h = Harness::new(false).await;
  let first = h
    .router()
    .oneshot(Request::get("/api/content").body(Body::empty()).unwrap())
    .await
    .unwrap();
  assert_eq!(first.status(), StatusCode::OK);
  let etag = first.headers()[header::ETAG].to_str().unwrap().to_owned();

  let again = h
    .router()
    .oneshot(
      Request::get("/api/content")
        .header(header::IF_NONE_MATCH, &etag)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(again.status(), StatusCode::NOT_MODIFIED);

  // A write changes the reconciled page, so the old tag goes stale.
  h.json("POST", "/api/admin/skills", json!({ "name": "Zig", "category": "Systems" }))
    .await;
  let changed = h
    .router()
    .oneshot(
      Request::get("/api/content")
        .header(header::IF_NONE_MATCH, &etag)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();
  assert_eq!(changed.status(), StatusCode::OK);
  assert_ne!(changed.headers()[header::ETAG].to_str().unwrap(), etag);
}

// ─── Admin writes ────────────────────────────────────────────────────────────

#[tokio::test]
async fn created_experience_precedes_static_ones() {
  let h = Harness::new(false).await;
  let (status, created) = h
    .json("POST", "/api/admin/experiences", experience_body("Ketua HMIF"))
    .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["start_date"], "2024-01-01");
  assert_eq!(created["end_date"], Value::Null);
  assert_eq!(created["images"][0]["position"], "center center");

  let (_, merged) = h.get("/api/experiences").await;
  let merged = merged.as_array().unwrap();
  assert_eq!(merged.len(), catalog::experiences().len() + 1);
  assert_eq!(merged[0]["title"], "Ketua HMIF");
  assert_eq!(merged[0]["start_date"], "2024");
  assert_eq!(merged[0]["end_date"], "Sekarang");
}

#[tokio::test]
async fn blank_title_is_rejected_with_400() {
  let h = Harness::new(false).await;
  let (status, body) = h
    .json("POST", "/api/admin/experiences", experience_body("  "))
    .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn updating_or_deleting_missing_rows_is_404() {
  let h = Harness::new(false).await;
  let (status, _) = h
    .json("PUT", "/api/admin/experiences/77", experience_body("Ghost"))
    .await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let req = Request::delete("/api/admin/projects/77").body(Body::empty()).unwrap();
  let (status, body) = h.send(req).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "project 77 not found");
}

#[tokio::test]
async fn skills_append_and_delete() {
  let h = Harness::new(false).await;
  let (_, a) = h
    .json("POST", "/api/admin/skills", json!({ "name": "Rust", "category": "Languages" }))
    .await;
  let (_, b) = h
    .json("POST", "/api/admin/skills", json!({ "name": "Go", "category": "Languages" }))
    .await;
  assert_eq!(a["sort_order"], 0);
  assert_eq!(b["sort_order"], 1);

  let uri = format!("/api/admin/skills/{}", a["id"]);
  let (status, _) = h.send(Request::delete(uri).body(Body::empty()).unwrap()).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (_, dashboard) = h.get("/api/admin/dashboard").await;
  assert_eq!(dashboard, json!({ "projects": 0, "experiences": 0, "skills": 1 }));
}

#[tokio::test]
async fn skill_form_offers_catalog_categories() {
  let h = Harness::new(false).await;
  let (status, body) = h.get("/api/admin/skills/categories").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!(["Frontend", "Backend & AI", "Tools & Others"]));
}

#[tokio::test]
async fn profile_is_404_until_saved() {
  let h = Harness::new(false).await;
  assert_eq!(h.get("/api/admin/profile").await.0, StatusCode::NOT_FOUND);

  let (status, saved) = h
    .json("PUT", "/api/admin/profile", json!({ "name": "Remote", "resume_url": " " }))
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(saved["resume_url"], Value::Null);

  let (_, public) = h.get("/api/profile").await;
  assert_eq!(public["name"], "Remote");
}

// ─── Uploads ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn uploads_go_through_the_media_store() {
  let h = Harness::new(false).await;
  let req = Request::put("/api/admin/uploads/experiences/photo.jpg")
    .body(Body::from("jpeg bytes"))
    .unwrap();
  let (status, body) = h.send(req).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["url"], "memory://experiences/1");

  let req = Request::put("/api/admin/uploads/cv.pdf").body(Body::from("pdf")).unwrap();
  let (_, body) = h.send(req).await;
  assert_eq!(body["url"], "memory://uploads/2");

  let objects = h.media.objects.lock().unwrap().clone();
  assert_eq!(objects[0], ("experiences".to_owned(), "photo.jpg".to_owned(), 10));
}

#[tokio::test]
async fn bad_folder_or_empty_body_is_rejected() {
  let h = Harness::new(false).await;
  let req = Request::put("/api/admin/uploads/bad.folder/x.png")
    .body(Body::from("x"))
    .unwrap();
  assert_eq!(h.send(req).await.0, StatusCode::BAD_REQUEST);

  let req = Request::put("/api/admin/uploads/x.png").body(Body::empty()).unwrap();
  assert_eq!(h.send(req).await.0, StatusCode::BAD_REQUEST);
  assert!(h.media.objects.lock().unwrap().is_empty());
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn draft_is_cleared_by_a_successful_save() {
  let h = Harness::new(true).await;
  let draft = json!({ "title": "half done" });
  let (status, _) = h.json("PUT", "/api/admin/drafts/project", draft.clone()).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  assert_eq!(h.get("/api/admin/drafts/project").await, (StatusCode::OK, draft));

  let (status, _) = h
    .json("POST", "/api/admin/projects", json!({ "title": "Done", "tags": ["Rust"] }))
    .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(h.get("/api/admin/drafts/project").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disabled_drafts_reject_puts() {
  let h = Harness::new(false).await;
  let (status, _) = h.json("PUT", "/api/admin/drafts/skill", json!({})).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
