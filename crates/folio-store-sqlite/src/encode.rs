//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are fixed-width RFC 3339 strings (microseconds, `Z`) so that
//! `ORDER BY created_at` sorts chronologically. Tags are a compact JSON array.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_core::{
  content::{ExperienceKind, ProjectStatus},
  row::{ExperienceRow, ProfileRow, ProjectRow, SkillRow},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Enums ───────────────────────────────────────────────────────────────────

pub fn encode_kind(k: ExperienceKind) -> &'static str {
  match k {
    ExperienceKind::Organization => "organization",
    ExperienceKind::Committee => "committee",
  }
}

pub fn decode_kind(s: &str) -> Result<ExperienceKind> {
  match s {
    "organization" => Ok(ExperienceKind::Organization),
    "committee" => Ok(ExperienceKind::Committee),
    other => Err(Error::UnknownValue { column: "kind", value: other.to_owned() }),
  }
}

pub fn encode_status(s: ProjectStatus) -> &'static str {
  match s {
    ProjectStatus::Ongoing => "ongoing",
    ProjectStatus::Completed => "completed",
  }
}

pub fn decode_status(s: &str) -> Result<ProjectStatus> {
  match s {
    "ongoing" => Ok(ProjectStatus::Ongoing),
    "completed" => Ok(ProjectStatus::Completed),
    other => Err(Error::UnknownValue { column: "status", value: other.to_owned() }),
  }
}

// ─── Tags ────────────────────────────────────────────────────────────────────

pub fn encode_tags(tags: &[String]) -> Result<String> {
  Ok(serde_json::to_string(tags)?)
}

pub fn decode_tags(s: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from a `personal` row.
pub struct RawProfile {
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
  pub updated_at:    String,
}

impl RawProfile {
  pub const COLUMNS: &'static str = "id, name, role, bio, location, email, github_url, \
                                     linkedin_url, instagram_url, resume_url, updated_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      name:          row.get(1)?,
      role:          row.get(2)?,
      bio:           row.get(3)?,
      location:      row.get(4)?,
      email:         row.get(5)?,
      github_url:    row.get(6)?,
      linkedin_url:  row.get(7)?,
      instagram_url: row.get(8)?,
      resume_url:    row.get(9)?,
      updated_at:    row.get(10)?,
    })
  }

  pub fn into_row(self) -> Result<ProfileRow> {
    Ok(ProfileRow {
      id:            self.id,
      name:          self.name,
      role:          self.role,
      bio:           self.bio,
      location:      self.location,
      email:         self.email,
      github_url:    self.github_url,
      linkedin_url:  self.linkedin_url,
      instagram_url: self.instagram_url,
      resume_url:    self.resume_url,
      updated_at:    decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw values read directly from a `skills` row.
pub struct RawSkill {
  pub id:         i64,
  pub name:       String,
  pub category:   String,
  pub sort_order: i64,
  pub created_at: String,
}

impl RawSkill {
  pub const COLUMNS: &'static str = "id, name, category, sort_order, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      category:   row.get(2)?,
      sort_order: row.get(3)?,
      created_at: row.get(4)?,
    })
  }

  pub fn into_row(self) -> Result<SkillRow> {
    Ok(SkillRow {
      id:         self.id,
      name:       self.name,
      category:   self.category,
      sort_order: self.sort_order,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from an `experiences` row.
pub struct RawExperience {
  pub id:           i64,
  pub title:        String,
  pub organization: String,
  pub kind:         String,
  pub start_date:   Option<String>,
  pub end_date:     Option<String>,
  pub description:  String,
  pub created_at:   String,
}

impl RawExperience {
  pub const COLUMNS: &'static str =
    "id, title, organization, kind, start_date, end_date, description, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:           row.get(0)?,
      title:        row.get(1)?,
      organization: row.get(2)?,
      kind:         row.get(3)?,
      start_date:   row.get(4)?,
      end_date:     row.get(5)?,
      description:  row.get(6)?,
      created_at:   row.get(7)?,
    })
  }

  pub fn into_row(self) -> Result<ExperienceRow> {
    Ok(ExperienceRow {
      id:           self.id,
      title:        self.title,
      organization: self.organization,
      kind:         decode_kind(&self.kind)?,
      start_date:   self.start_date,
      end_date:     self.end_date,
      description:  self.description,
      created_at:   decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from a `projects` row.
pub struct RawProject {
  pub id:          i64,
  pub title:       String,
  pub description: String,
  pub tags:        String,
  pub demo_url:    Option<String>,
  pub github_url:  Option<String>,
  pub featured:    bool,
  pub status:      String,
  pub created_at:  String,
}

impl RawProject {
  pub const COLUMNS: &'static str =
    "id, title, description, tags, demo_url, github_url, featured, status, created_at";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      title:       row.get(1)?,
      description: row.get(2)?,
      tags:        row.get(3)?,
      demo_url:    row.get(4)?,
      github_url:  row.get(5)?,
      featured:    row.get(6)?,
      status:      row.get(7)?,
      created_at:  row.get(8)?,
    })
  }

  pub fn into_row(self) -> Result<ProjectRow> {
    Ok(ProjectRow {
      id:          self.id,
      title:       self.title,
      description: self.description,
      tags:        decode_tags(&self.tags)?,
      demo_url:    self.demo_url,
      github_url:  self.github_url,
      featured:    self.featured,
      status:      decode_status(&self.status)?,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn timestamps_are_fixed_width() {
    let a = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let b = Utc.timestamp_opt(1_700_000_000, 123_456_000).unwrap();
    let (ea, eb) = (encode_dt(a), encode_dt(b));
    assert_eq!(ea.len(), eb.len());
    assert!(ea < eb);
    assert_eq!(decode_dt(&eb).unwrap(), b);
  }

  #[test]
  fn unknown_enum_values_are_errors() {
    assert!(matches!(decode_kind("club"), Err(Error::UnknownValue { column: "kind", .. })));
    assert!(decode_status("paused").is_err());
    assert_eq!(decode_status(encode_status(ProjectStatus::Completed)).unwrap(), ProjectStatus::Completed);
  }
}
