//! Remote row shapes and admin write inputs.
//!
//! Rows mirror the columns of the remote store: nullable dates, nullable image
//! focal data, explicit sort positions. [`crate::normalize`] turns them into
//! the presentation shapes in [`crate::content`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  content::{DEFAULT_ZOOM, ExperienceKind, ProjectStatus},
  normalize::storage_date,
  Error, Result,
};

// ─── Profile ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
  pub id:            i64,
  pub name:          String,
  pub role:          String,
  pub bio:           String,
  pub location:      String,
  pub email:         String,
  pub github_url:    Option<String>,
  pub linkedin_url:  Option<String>,
  pub instagram_url: Option<String>,
  pub resume_url:    Option<String>,
  pub updated_at:    DateTime<Utc>,
}

/// Body of the admin profile form. Saved with upsert semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
  pub name:          String,
  #[serde(default)]
  pub role:          String,
  #[serde(default)]
  pub bio:           String,
  #[serde(default)]
  pub location:      String,
  #[serde(default)]
  pub email:         String,
  pub github_url:    Option<String>,
  pub linkedin_url:  Option<String>,
  pub instagram_url: Option<String>,
  pub resume_url:    Option<String>,
}

impl ProfileInput {
  pub fn validate(&self) -> Result<()> {
    required(&self.name, "profile name")
  }

  /// Trim text fields and turn blank URLs into `None`.
  pub fn normalized(self) -> Result<Self> {
    self.validate()?;
    Ok(Self {
      name:          self.name.trim().to_owned(),
      role:          self.role.trim().to_owned(),
      bio:           self.bio,
      location:      self.location.trim().to_owned(),
      email:         self.email.trim().to_owned(),
      github_url:    non_blank(self.github_url),
      linkedin_url:  non_blank(self.linkedin_url),
      instagram_url: non_blank(self.instagram_url),
      resume_url:    non_blank(self.resume_url),
    })
  }
}

// ─── Skills ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
  pub id:         i64,
  pub name:       String,
  pub category:   String,
  pub sort_order: i64,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
  pub name:     String,
  pub category: String,
}

impl NewSkill {
  pub fn validate(&self) -> Result<()> {
    required(&self.name, "skill name")?;
    required(&self.category, "skill category")
  }

  pub fn normalized(self) -> Result<Self> {
    self.validate()?;
    Ok(Self {
      name:     self.name.trim().to_owned(),
      category: self.category.trim().to_owned(),
    })
  }
}

// ─── Images ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceImageRow {
  pub id:            i64,
  pub experience_id: i64,
  pub src:           String,
  pub position:      Option<String>,
  pub zoom:          Option<f64>,
  pub sort_order:    i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImageRow {
  pub id:         i64,
  pub project_id: i64,
  pub src:        String,
  pub position:   Option<String>,
  pub sort_order: i64,
}

/// One image as submitted by an admin form. List order becomes `sort_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInput {
  pub src:      String,
  #[serde(default)]
  pub position: Option<String>,
  #[serde(default)]
  pub zoom:     Option<f64>,
}

impl ImageInput {
  pub fn new(src: impl Into<String>) -> Self {
    Self { src: src.into(), position: None, zoom: None }
  }

  /// Position to persist; blank or malformed becomes the default descriptor.
  pub fn stored_position(&self) -> String {
    crate::position::position_or_default(self.position.as_deref())
  }

  /// Zoom to persist, never below 1.
  pub fn stored_zoom(&self) -> f64 { crate::position::clamp_zoom(self.zoom) }
}

fn normalized_images(images: Vec<ImageInput>) -> Vec<ImageInput> {
  images
    .into_iter()
    .filter(|img| !img.src.trim().is_empty())
    .map(|img| ImageInput {
      src:      img.src.trim().to_owned(),
      position: Some(img.stored_position()),
      zoom:     Some(img.stored_zoom()),
    })
    .collect()
}

// ─── Experience ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRow {
  pub id:           i64,
  pub title:        String,
  pub organization: String,
  pub kind:         ExperienceKind,
  /// ISO date (`YYYY-MM-DD`) or NULL.
  pub start_date:   Option<String>,
  /// ISO date, or NULL while ongoing.
  pub end_date:     Option<String>,
  pub description:  String,
  pub created_at:   DateTime<Utc>,
}

/// An experience row together with its joined image rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
  #[serde(flatten)]
  pub row:    ExperienceRow,
  pub images: Vec<ExperienceImageRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceInput {
  pub title:        String,
  pub organization: String,
  pub kind:         ExperienceKind,
  #[serde(default)]
  pub start_date:   String,
  #[serde(default)]
  pub end_date:     String,
  #[serde(default)]
  pub description:  String,
  #[serde(default)]
  pub images:       Vec<ImageInput>,
}

/// An [`ExperienceInput`] with dates converted to their stored form.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedExperience {
  pub title:        String,
  pub organization: String,
  pub kind:         ExperienceKind,
  pub start_date:   Option<String>,
  pub end_date:     Option<String>,
  pub description:  String,
  pub images:       Vec<ImageInput>,
}

impl ExperienceInput {
  pub fn validate(&self) -> Result<()> {
    required(&self.title, "experience title")?;
    required(&self.organization, "experience organization")
  }

  pub fn prepare(self) -> Result<PreparedExperience> {
    self.validate()?;
    Ok(PreparedExperience {
      title: self.title.trim().to_owned(),
      organization: self.organization.trim().to_owned(),
      kind: self.kind,
      start_date: storage_date(&self.start_date),
      end_date: storage_date(&self.end_date),
      description: self.description,
      images: normalized_images(self.images),
    })
  }
}

// ─── Projects ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRow {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  pub tags:        Vec<String>,
  pub demo_url:    Option<String>,
  pub github_url:  Option<String>,
  pub featured:    bool,
  pub status:      ProjectStatus,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
  #[serde(flatten)]
  pub row:    ProjectRow,
  pub images: Vec<ProjectImageRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub tags:        Vec<String>,
  pub demo_url:    Option<String>,
  pub github_url:  Option<String>,
  #[serde(default)]
  pub featured:    bool,
  #[serde(default)]
  pub status:      ProjectStatus,
  #[serde(default)]
  pub images:      Vec<ImageInput>,
}

impl ProjectInput {
  pub fn validate(&self) -> Result<()> { required(&self.title, "project title") }

  pub fn normalized(self) -> Result<Self> {
    self.validate()?;
    Ok(Self {
      title: self.title.trim().to_owned(),
      description: self.description,
      tags: self
        .tags
        .into_iter()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .collect(),
      demo_url: non_blank(self.demo_url),
      github_url: non_blank(self.github_url),
      featured: self.featured,
      status: self.status,
      images: normalized_images(self.images)
        .into_iter()
        .map(|img| ImageInput { zoom: Some(DEFAULT_ZOOM), ..img })
        .collect(),
    })
  }
}

fn required(value: &str, field: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::InvalidInput(format!("{field} must not be empty")));
  }
  Ok(())
}

fn non_blank(s: Option<String>) -> Option<String> {
  s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
