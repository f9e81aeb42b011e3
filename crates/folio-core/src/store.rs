//! The `ContentStore` and `MediaStore` traits.
//!
//! Storage backends (e.g. `folio-store-sqlite`) implement these. The HTTP
//! layer receives implementations by injection and never names a concrete
//! backend.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::row::{
  ExperienceInput, ExperienceRecord, NewSkill, ProfileInput, ProfileRow,
  ProjectInput, ProjectRecord, SkillRow,
};

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
  pub projects:    u64,
  pub experiences: u64,
  pub skills:      u64,
}

/// Abstraction over the store holding authoritative, mutable content.
///
/// Reads return rows in display order: skills by `sort_order`, experiences and
/// projects newest first, image sub-rows by `sort_order`.
pub trait ContentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Profile ───────────────────────────────────────────────────────────

  /// The profile row, if any. When several rows exist the lowest id wins.
  fn get_profile(
    &self,
  ) -> impl Future<Output = Result<Option<ProfileRow>, Self::Error>> + Send + '_;

  /// Update the existing profile row, or insert one if there is none.
  fn save_profile(
    &self,
    input: ProfileInput,
  ) -> impl Future<Output = Result<ProfileRow, Self::Error>> + Send + '_;

  // ── Skills ────────────────────────────────────────────────────────────

  fn list_skills(
    &self,
  ) -> impl Future<Output = Result<Vec<SkillRow>, Self::Error>> + Send + '_;

  /// Append a skill after every existing one.
  fn add_skill(
    &self,
    input: NewSkill,
  ) -> impl Future<Output = Result<SkillRow, Self::Error>> + Send + '_;

  /// Returns `false` if no such skill existed.
  fn delete_skill(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Experiences ───────────────────────────────────────────────────────

  fn list_experiences(
    &self,
  ) -> impl Future<Output = Result<Vec<ExperienceRecord>, Self::Error>> + Send + '_;

  /// Insert (`id == None`) or update an experience. Its images are replaced
  /// wholesale, in the order given.
  ///
  /// Returns `None` when `id` names an experience that does not exist.
  fn save_experience(
    &self,
    id: Option<i64>,
    input: ExperienceInput,
  ) -> impl Future<Output = Result<Option<ExperienceRecord>, Self::Error>> + Send + '_;

  /// Delete an experience and its images. Returns `false` if absent.
  fn delete_experience(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Projects ──────────────────────────────────────────────────────────

  fn list_projects(
    &self,
  ) -> impl Future<Output = Result<Vec<ProjectRecord>, Self::Error>> + Send + '_;

  /// Same contract as [`ContentStore::save_experience`].
  fn save_project(
    &self,
    id: Option<i64>,
    input: ProjectInput,
  ) -> impl Future<Output = Result<Option<ProjectRecord>, Self::Error>> + Send + '_;

  fn delete_project(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Housekeeping ──────────────────────────────────────────────────────

  fn counts(
    &self,
  ) -> impl Future<Output = Result<ContentCounts, Self::Error>> + Send + '_;

  /// Cheap liveness query; returns the number of profile rows.
  fn ping(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}

/// Object storage for uploaded media.
pub trait MediaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Store `bytes` under `folder` and return a publicly resolvable URL.
  ///
  /// `original_name` only contributes its extension; the stored name is
  /// generated.
  fn upload<'a>(
    &'a self,
    folder: &'a str,
    original_name: &'a str,
    bytes: bytes::Bytes,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;
}
