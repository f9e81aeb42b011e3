//! `GET /keep-alive`: a cheap query that keeps a hosted database awake.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use folio_core::store::ContentStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct KeepAlive {
  pub status:    &'static str,
  pub message:   String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timestamp: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub row_count: Option<u64>,
}

pub async fn keep_alive<S: ContentStore>(State(store): State<Arc<S>>) -> impl IntoResponse {
  match store.ping().await {
    Ok(count) => {
      tracing::debug!(row_count = count, "keep-alive ping");
      (
        StatusCode::OK,
        Json(KeepAlive {
          status:    "ok",
          message:   "store keep-alive ping successful".into(),
          timestamp: Some(Utc::now()),
          row_count: Some(count),
        }),
      )
    }
    Err(e) => {
      tracing::error!(error = %e, "keep-alive ping failed");
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(KeepAlive {
          status:    "error",
          message:   e.to_string(),
          timestamp: None,
          row_count: None,
        }),
      )
    }
  }
}
