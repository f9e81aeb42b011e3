//! JSON HTTP API for Folio.
//!
//! Two axum routers: a public one serving reconciled content, and an admin
//! one for writes, uploads and drafts. Both are generic over the
//! [`ContentStore`] (and, for admin, [`MediaStore`]) they are handed.
//! Authentication, TLS and static file serving are the caller's concern.
//!
//! # Mounting
//!
//! ```rust,ignore
//! Router::new()
//!   .nest("/api", folio_api::api_router(store.clone()))
//!   .nest("/api/admin", folio_api::admin_router(admin_state).layer(auth))
//! ```

pub mod admin;
pub mod content;
pub mod drafts;
pub mod error;
pub mod etag;
pub mod health;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, put},
};
use folio_core::store::{ContentStore, MediaStore};

pub use drafts::{DraftCache, FormKey};
pub use error::ApiError;

use admin::{dashboard, experiences, profile, projects, skills, uploads};

/// Shared state for the admin router.
pub struct AdminState<S, M> {
  pub store:  Arc<S>,
  pub media:  Arc<M>,
  pub drafts: Arc<DraftCache>,
}

impl<S, M> Clone for AdminState<S, M> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      media:  Arc::clone(&self.media),
      drafts: Arc::clone(&self.drafts),
    }
  }
}

/// Build the public, read-only router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContentStore + 'static,
{
  Router::new()
    .route("/content", get(content::page::<S>))
    .route("/profile", get(content::profile::<S>))
    .route("/skills", get(content::skills::<S>))
    .route("/experiences", get(content::experiences::<S>))
    .route("/projects", get(content::projects::<S>))
    .route("/keep-alive", get(health::keep_alive::<S>))
    .with_state(store)
}

/// Build the admin router. Mount it behind authentication.
pub fn admin_router<S, M>(state: AdminState<S, M>) -> Router<()>
where
  S: ContentStore + 'static,
  M: MediaStore + 'static,
{
  Router::new()
    .route("/dashboard", get(dashboard::handler::<S, M>))
    // Profile
    .route("/profile", get(profile::get_one::<S, M>).put(profile::save::<S, M>))
    // Skills
    .route("/skills", get(skills::list::<S, M>).post(skills::create::<S, M>))
    .route("/skills/categories", get(skills::categories))
    .route("/skills/{id}", delete(skills::delete_one::<S, M>))
    // Experiences
    .route(
      "/experiences",
      get(experiences::list::<S, M>).post(experiences::create::<S, M>),
    )
    .route(
      "/experiences/{id}",
      put(experiences::update::<S, M>).delete(experiences::delete_one::<S, M>),
    )
    // Projects
    .route("/projects", get(projects::list::<S, M>).post(projects::create::<S, M>))
    .route(
      "/projects/{id}",
      put(projects::update::<S, M>).delete(projects::delete_one::<S, M>),
    )
    // Media
    .route("/uploads/{file_name}", put(uploads::to_default_folder::<S, M>))
    .route("/uploads/{folder}/{file_name}", put(uploads::to_folder::<S, M>))
    // Drafts
    .route(
      "/drafts/{form}",
      get(drafts::get_one::<S, M>)
        .put(drafts::put_one::<S, M>)
        .delete(drafts::clear_one::<S, M>),
    )
    .with_state(state)
}

#[cfg(test)]
mod tests;
