//! Shape normaliser: remote rows → presentation records.
//!
//! Normalisation is best effort. Malformed dates pass through unchanged,
//! blank dates count as missing, and missing or malformed image data takes
//! its default; nothing here fails.

use indexmap::IndexMap;

use crate::{
  content::{
    Experience, ExperienceImage, PRESENT, PersonalProfile, Project,
    ProjectImage, Skill, SkillCategory,
  },
  position::{clamp_zoom, position_or_default},
  row::{
    ExperienceImageRow, ExperienceRecord, ProfileRow, ProjectImageRow,
    ProjectRecord, SkillRow,
  },
};

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Leading year token of an ISO date: `"2024-01-01"` → `"2024"`.
pub fn year_token(date: &str) -> &str {
  date.split('-').next().unwrap_or(date)
}

fn present(date: Option<&str>) -> Option<&str> {
  date.map(str::trim).filter(|d| !d.is_empty())
}

/// Display form of a nullable start date.
pub fn display_start(date: Option<&str>) -> String {
  present(date).map(year_token).unwrap_or_default().to_owned()
}

/// Display form of a nullable end date; NULL or blank means ongoing.
pub fn display_end(date: Option<&str>) -> String {
  present(date).map(year_token).unwrap_or(PRESENT).to_owned()
}

/// Stored form of a date typed into an admin form.
///
/// A bare four-digit year becomes the first day of that year, blank input
/// becomes NULL, anything else is kept as typed.
pub fn storage_date(input: &str) -> Option<String> {
  let input = input.trim();
  if input.is_empty() {
    None
  } else if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
    Some(format!("{input}-01-01"))
  } else {
    Some(input.to_owned())
  }
}

// ─── Images ──────────────────────────────────────────────────────────────────

pub fn experience_image(row: ExperienceImageRow) -> ExperienceImage {
  ExperienceImage {
    src:      row.src,
    position: position_or_default(row.position.as_deref()),
    zoom:     clamp_zoom(row.zoom),
  }
}

pub fn project_image(row: ProjectImageRow) -> ProjectImage {
  ProjectImage { src: row.src, position: position_or_default(row.position.as_deref()) }
}

// ─── Entities ────────────────────────────────────────────────────────────────

pub fn profile(row: ProfileRow) -> PersonalProfile {
  PersonalProfile {
    name:          row.name,
    role:          row.role,
    bio:           row.bio,
    location:      row.location,
    email:         row.email,
    github_url:    row.github_url,
    linkedin_url:  row.linkedin_url,
    instagram_url: row.instagram_url,
    resume_url:    row.resume_url,
  }
}

pub fn experience(record: ExperienceRecord) -> Experience {
  let ExperienceRecord { row, mut images } = record;
  images.sort_by_key(|img| img.sort_order);
  Experience {
    id:           row.id,
    start_date:   display_start(row.start_date.as_deref()),
    end_date:     display_end(row.end_date.as_deref()),
    title:        row.title,
    organization: row.organization,
    kind:         row.kind,
    description:  row.description,
    images:       images.into_iter().map(experience_image).collect(),
  }
}

pub fn project(record: ProjectRecord) -> Project {
  let ProjectRecord { row, mut images } = record;
  images.sort_by_key(|img| img.sort_order);
  Project {
    id:          row.id,
    title:       row.title,
    description: row.description,
    images:      images.into_iter().map(project_image).collect(),
    tags:        row.tags,
    demo_url:    row.demo_url,
    github_url:  row.github_url,
    featured:    row.featured,
    status:      row.status,
  }
}

/// Group flat skill rows into categories.
///
/// Categories appear in first-seen order and skills keep their row order, so
/// the caller controls ordering by how it sorts the rows.
pub fn group_skills(rows: impl IntoIterator<Item = SkillRow>) -> Vec<SkillCategory> {
  let mut groups: IndexMap<String, SkillCategory> = IndexMap::new();
  for row in rows {
    groups
      .entry(row.category.clone())
      .or_insert_with(|| SkillCategory::new(row.category))
      .skills
      .push(Skill { name: row.name });
  }
  groups.into_values().collect()
}
