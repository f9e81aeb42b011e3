//! HTTP server wiring for Folio.
//!
//! Composes the public and admin routers from `folio-api` with Basic auth,
//! static serving of uploaded media and request tracing.

pub mod auth;
pub mod error;
pub mod media;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, extract::DefaultBodyLimit, middleware};
use folio_api::{AdminState, DraftCache};
use folio_core::store::ContentStore;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use auth::AuthConfig;
use media::FsMediaStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLIO_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:               String,
  #[serde(default = "default_port")]
  pub port:               u16,
  pub store_path:         PathBuf,
  #[serde(default = "default_media_root")]
  pub media_root:         PathBuf,
  /// Prefix of the URLs handed back for uploads.
  #[serde(default = "default_media_base_url")]
  pub media_base_url:     String,
  #[serde(default = "default_max_upload_bytes")]
  pub max_upload_bytes:   usize,
  pub auth_username:      String,
  pub auth_password_hash: String,
  #[serde(default)]
  pub drafts_enabled:     bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }
fn default_media_root() -> PathBuf { PathBuf::from("media") }
fn default_media_base_url() -> String { "/uploads".to_string() }
fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }

// ─── Application state ────────────────────────────────────────────────────────

/// Everything the router needs, built once at startup.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub media:  Arc<FsMediaStore>,
  pub drafts: Arc<DraftCache>,
  pub auth:   Arc<AuthConfig>,
  pub config: Arc<ServerConfig>,
}

impl<S> AppState<S> {
  pub fn new(store: S, config: ServerConfig) -> Self {
    Self {
      store:  Arc::new(store),
      media:  Arc::new(FsMediaStore::new(&config.media_root, &config.media_base_url)),
      drafts: Arc::new(DraftCache::new(config.drafts_enabled)),
      auth:   Arc::new(AuthConfig {
        username:      config.auth_username.clone(),
        password_hash: config.auth_password_hash.clone(),
      }),
      config: Arc::new(config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application [`Router`].
///
/// | Prefix | Contents |
/// |--------|----------|
/// | `/api` | Public reconciled content and keep-alive |
/// | `/api/admin` | Admin API, Basic auth required |
/// | `/uploads` | Files written by [`FsMediaStore`] |
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContentStore + 'static,
{
  let admin = folio_api::admin_router(AdminState {
    store:  state.store.clone(),
    media:  state.media.clone(),
    drafts: state.drafts.clone(),
  })
  .layer(middleware::from_fn_with_state(state.auth.clone(), auth::require_auth))
  .layer(DefaultBodyLimit::max(state.config.max_upload_bytes));

  Router::new()
    .nest("/api", folio_api::api_router(state.store.clone()))
    .nest("/api/admin", admin)
    .nest_service("/uploads", ServeDir::new(state.media.root()))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
