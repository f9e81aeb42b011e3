//! Reconciler: merge remote records over the static catalog.
//!
//! Precedence is per whole record. A remote record replaces the static record
//! with the same identity key outright, images included; fields are never
//! combined across the two sources.

use std::hash::Hash;

use indexmap::{IndexMap, map::Entry};

use crate::content::{Experience, PersonalProfile, Project, SkillCategory};

/// A record with an identity key used to match remote against static.
pub trait Keyed {
  type Key: Eq + Hash;

  fn identity_key(&self) -> Self::Key;
}

impl Keyed for SkillCategory {
  type Key = String;

  fn identity_key(&self) -> String { self.title.clone() }
}

impl Keyed for Experience {
  type Key = (String, String);

  fn identity_key(&self) -> (String, String) {
    (self.title.clone(), self.organization.clone())
  }
}

impl Keyed for Project {
  type Key = String;

  fn identity_key(&self) -> String { self.title.clone() }
}

/// Merge `remote` with `fallback`.
///
/// Remote records come first in arrival order, then every static record whose
/// key is not already present, in declaration order. Each key appears once;
/// if the remote list repeats a key, its first occurrence wins.
pub fn reconcile<T>(remote: Vec<T>, fallback: &[T]) -> Vec<T>
where
  T: Keyed + Clone,
{
  let mut merged: IndexMap<T::Key, T> =
    IndexMap::with_capacity(remote.len() + fallback.len());

  for record in remote.into_iter().chain(fallback.iter().cloned()) {
    if let Entry::Vacant(slot) = merged.entry(record.identity_key()) {
      slot.insert(record);
    }
  }

  merged.into_values().collect()
}

/// Singleton resolution: the remote record verbatim, else the static one.
pub fn resolve_profile(
  remote: Option<PersonalProfile>,
  fallback: &PersonalProfile,
) -> PersonalProfile {
  remote.unwrap_or_else(|| fallback.clone())
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;
  use crate::{
    catalog,
    content::{ExperienceKind, ProjectImage, ProjectStatus, Skill},
  };

  fn project(id: i64, title: &str, status: ProjectStatus) -> Project {
    Project {
      id,
      title: title.into(),
      description: String::new(),
      images: vec![],
      tags: vec![],
      demo_url: None,
      github_url: None,
      featured: false,
      status,
    }
  }

  fn titles(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.title.as_str()).collect()
  }

  #[test]
  fn remote_status_wins_for_shared_title() {
    let remote = vec![project(10, "Site A", ProjectStatus::Ongoing)];
    let fallback = vec![
      project(1, "Site A", ProjectStatus::Completed),
      project(2, "Game X", ProjectStatus::Completed),
    ];

    let merged = reconcile(remote, &fallback);

    assert_eq!(merged.len(), 2);
    assert_eq!(titles(&merged), ["Site A", "Game X"]);
    assert_eq!(merged[0].status, ProjectStatus::Ongoing);
    assert_eq!(merged[0].id, 10);
  }

  #[test]
  fn empty_remote_degrades_to_static_exactly() {
    let fallback = catalog::projects();
    assert_eq!(reconcile(Vec::new(), &fallback), fallback);

    let fallback = catalog::experiences();
    assert_eq!(reconcile(Vec::new(), &fallback), fallback);
  }

  #[test]
  fn static_images_are_discarded_for_shared_keys() {
    let mut local = project(1, "Site A", ProjectStatus::Completed);
    local.images = vec![ProjectImage::centered("/static.jpg")];
    let remote = project(9, "Site A", ProjectStatus::Ongoing);

    let merged = reconcile(vec![remote], &[local]);
    assert_eq!(merged.len(), 1);
    assert!(merged[0].images.is_empty());
  }

  #[test]
  fn merge_is_idempotent() {
    let remote = vec![
      project(5, "New", ProjectStatus::Ongoing),
      project(6, "Game X", ProjectStatus::Ongoing),
    ];
    let fallback = vec![
      project(1, "Site A", ProjectStatus::Completed),
      project(2, "Game X", ProjectStatus::Completed),
    ];
    let first = reconcile(remote.clone(), &fallback);
    let second = reconcile(remote, &fallback);
    assert_eq!(first, second);
    assert_eq!(titles(&first), ["New", "Game X", "Site A"]);
  }

  #[test]
  fn count_bound_and_no_duplicates() {
    let remote = vec![
      project(5, "A", ProjectStatus::Ongoing),
      project(6, "B", ProjectStatus::Ongoing),
    ];
    let disjoint = vec![project(1, "C", ProjectStatus::Completed)];
    let overlapping = vec![
      project(1, "B", ProjectStatus::Completed),
      project(2, "C", ProjectStatus::Completed),
    ];

    let merged = reconcile(remote.clone(), &disjoint);
    assert_eq!(merged.len(), remote.len() + disjoint.len());

    let merged = reconcile(remote.clone(), &overlapping);
    assert!(merged.len() < remote.len() + overlapping.len());
    let keys: HashSet<_> = merged.iter().map(|p| p.identity_key()).collect();
    assert_eq!(keys.len(), merged.len());
  }

  #[test]
  fn repeated_remote_key_keeps_first_occurrence() {
    let remote = vec![
      project(5, "A", ProjectStatus::Ongoing),
      project(6, "A", ProjectStatus::Completed),
    ];
    let merged = reconcile(remote, &[]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id, 5);
  }

  #[test]
  fn experience_key_is_title_and_organization() {
    let fallback = catalog::experiences();
    let mut same_title = fallback[0].clone();
    same_title.organization = "Elsewhere".into();
    same_title.kind = ExperienceKind::Committee;

    let merged = reconcile(vec![same_title], &fallback);
    assert_eq!(merged.len(), fallback.len() + 1);

    let mut same_key = fallback[0].clone();
    same_key.description = "updated".into();
    let merged = reconcile(vec![same_key], &fallback);
    assert_eq!(merged.len(), fallback.len());
    assert_eq!(merged[0].description, "updated");
  }

  #[test]
  fn remote_category_replaces_static_skill_list() {
    let fallback = catalog::skills();
    let mut frontend = SkillCategory::new("Frontend");
    frontend.skills.push(Skill { name: "Svelte".into() });

    let merged = reconcile(vec![frontend], &fallback);
    assert_eq!(merged.len(), fallback.len());
    assert_eq!(merged[0].title, "Frontend");
    assert_eq!(merged[0].skills, vec![Skill { name: "Svelte".into() }]);
    assert_eq!(merged[1], fallback[1]);
  }

  #[test]
  fn profile_is_all_or_nothing() {
    let fallback = catalog::profile();
    assert_eq!(resolve_profile(None, &fallback), fallback);

    let remote = PersonalProfile {
      name:          "Someone Else".into(),
      role:          String::new(),
      bio:           String::new(),
      location:      String::new(),
      email:         String::new(),
      github_url:    None,
      linkedin_url:  None,
      instagram_url: None,
      resume_url:    None,
    };
    let resolved = resolve_profile(Some(remote.clone()), &fallback);
    assert_eq!(resolved, remote);
    assert!(resolved.github_url.is_none());
  }
}
