//! Presentation shapes: what the public page renders.
//!
//! Both the static catalog and normalised remote rows produce these types, so
//! the reconciler can merge them without knowing where a record came from.

use serde::{Deserialize, Serialize};

/// Label rendered in place of a missing end date ("present").
pub const PRESENT: &str = "Sekarang";

/// Focal descriptor applied when an image has no stored position.
pub const DEFAULT_POSITION: &str = "center center";

/// Magnification applied when an image has no stored zoom.
pub const DEFAULT_ZOOM: f64 = 1.0;

// ─── Profile ─────────────────────────────────────────────────────────────────

/// The singleton "about me" record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
  pub name:          String,
  pub role:          String,
  pub bio:           String,
  pub location:      String,
  pub email:         String,
  pub github_url:    Option<String>,
  pub linkedin_url:  Option<String>,
  pub instagram_url: Option<String>,
  pub resume_url:    Option<String>,
}

// ─── Skills ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
  pub name: String,
}

/// A titled group of skills. The title doubles as the category id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
  pub id:     String,
  pub title:  String,
  pub skills: Vec<Skill>,
}

impl SkillCategory {
  pub fn new(title: impl Into<String>) -> Self {
    let title = title.into();
    Self { id: title.clone(), title, skills: Vec::new() }
  }
}

// ─── Experience ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
  Organization,
  Committee,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceImage {
  pub src:      String,
  pub position: String,
  pub zoom:     f64,
}

impl ExperienceImage {
  /// An image with the default focal point and no magnification.
  pub fn centered(src: impl Into<String>) -> Self {
    Self {
      src:      src.into(),
      position: DEFAULT_POSITION.to_owned(),
      zoom:     DEFAULT_ZOOM,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
  pub id:           i64,
  pub title:        String,
  pub organization: String,
  pub kind:         ExperienceKind,
  /// Year string, e.g. `"2024"`.
  pub start_date:   String,
  /// Year string or [`PRESENT`].
  pub end_date:     String,
  pub description:  String,
  pub images:       Vec<ExperienceImage>,
}

impl Experience {
  pub fn is_ongoing(&self) -> bool { self.end_date == PRESENT }
}

// ─── Projects ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
  #[default]
  Ongoing,
  Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
  pub src:      String,
  pub position: String,
}

impl ProjectImage {
  pub fn centered(src: impl Into<String>) -> Self {
    Self { src: src.into(), position: DEFAULT_POSITION.to_owned() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  pub images:      Vec<ProjectImage>,
  pub tags:        Vec<String>,
  pub demo_url:    Option<String>,
  pub github_url:  Option<String>,
  pub featured:    bool,
  pub status:      ProjectStatus,
}

// ─── Static-only sections ────────────────────────────────────────────────────

/// End of an education period: a year, or still enrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndYear {
  Year(u16),
  Present(Present),
}

/// Serialises as the [`PRESENT`] label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present;

impl Serialize for Present {
  fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(PRESENT)
  }
}

impl<'de> Deserialize<'de> for Present {
  fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
    let s = String::deserialize(d)?;
    if s == PRESENT {
      Ok(Present)
    } else {
      Err(serde::de::Error::custom(format!("expected {PRESENT:?}, got {s:?}")))
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
  pub id:          i64,
  pub institution: String,
  pub degree:      String,
  pub field:       String,
  pub start_year:  u16,
  pub end_year:    EndYear,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
  pub name: String,
  pub url:  String,
  pub icon: String,
}
