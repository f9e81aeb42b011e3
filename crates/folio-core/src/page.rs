//! Page assembly: everything the public page renders, in one value.

use serde::{Deserialize, Serialize};

use crate::{
  catalog,
  content::{
    Education, Experience, PersonalProfile, Project,
    SkillCategory, SocialLink,
  },
  normalize,
  reconcile::{reconcile, resolve_profile},
  row::{ExperienceRecord, ProfileRow, ProjectRecord, SkillRow},
};

/// Raw rows fetched from the remote store for one page render.
///
/// A failed fetch is represented by an empty collection (or `None`); the
/// assembled page then falls back to static data for that section.
#[derive(Debug, Clone, Default)]
pub struct RemoteContent {
  pub profile:     Option<ProfileRow>,
  pub skills:      Vec<SkillRow>,
  pub experiences: Vec<ExperienceRecord>,
  pub projects:    Vec<ProjectRecord>,
}

/// The finished, deduplicated content for every section of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
  pub profile:      PersonalProfile,
  pub education:    Vec<Education>,
  pub experiences:  Vec<Experience>,
  pub skills:       Vec<SkillCategory>,
  pub projects:     Vec<Project>,
  pub social_links: Vec<SocialLink>,
}

impl PageContent {
  pub fn assemble(remote: RemoteContent) -> Self {
    Self {
      profile:      merged_profile(remote.profile),
      education:    catalog::education(),
      experiences:  merged_experiences(remote.experiences),
      skills:       merged_skills(remote.skills),
      projects:     merged_projects(remote.projects),
      social_links: catalog::social_links(),
    }
  }

  /// The page rendered with no remote data at all.
  pub fn fallback() -> Self { Self::assemble(RemoteContent::default()) }
}

// ─── Per-section merges ──────────────────────────────────────────────────────

pub fn merged_profile(row: Option<ProfileRow>) -> PersonalProfile {
  resolve_profile(row.map(normalize::profile), &catalog::profile())
}

pub fn merged_skills(rows: Vec<SkillRow>) -> Vec<SkillCategory> {
  reconcile(normalize::group_skills(rows), &catalog::skills())
}

pub fn merged_experiences(records: Vec<ExperienceRecord>) -> Vec<Experience> {
  let remote = records.into_iter().map(normalize::experience).collect();
  reconcile(remote, &catalog::experiences())
}

pub fn merged_projects(records: Vec<ProjectRecord>) -> Vec<Project> {
  let remote = records.into_iter().map(normalize::project).collect();
  reconcile(remote, &catalog::projects())
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::{
    content::{ExperienceKind, ProjectStatus},
    row::{ExperienceImageRow, ExperienceRow, ProjectRow},
  };

  #[test]
  fn empty_remote_renders_the_static_catalog() {
    let page = PageContent::fallback();
    assert_eq!(page.profile, catalog::profile());
    assert_eq!(page.skills, catalog::skills());
    assert_eq!(page.experiences, catalog::experiences());
    assert_eq!(page.projects, catalog::projects());
    assert_eq!(page.education, catalog::education());
    let committees = page
      .experiences
      .iter()
      .filter(|e| e.kind == ExperienceKind::Committee)
      .count();
    assert_eq!((page.experiences.len(), committees), (5, 2));
  }

  #[test]
  fn remote_project_goes_first_and_replaces_static_twin() {
    let remote = RemoteContent {
      projects: vec![ProjectRecord {
        row:    ProjectRow {
          id:          42,
          title:       "Personal Website".into(),
          description: "rewritten".into(),
          tags:        vec![],
          demo_url:    None,
          github_url:  None,
          featured:    false,
          status:      ProjectStatus::Ongoing,
          created_at:  Utc::now(),
        },
        images: vec![],
      }],
      ..Default::default()
    };

    let page = PageContent::assemble(remote);
    let titles: Vec<_> = page.projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, [
      "Personal Website",
      "Website GKPI Bandar Lampung",
      "Game Pustaka Swardwipa",
    ]);
    assert_eq!(page.projects[0].id, 42);
    assert!(page.projects[0].images.is_empty());
    assert_eq!(page.projects.iter().filter(|p| p.featured).count(), 1);
  }

  #[test]
  fn remote_experience_is_normalised_before_merge() {
    let remote = RemoteContent {
      experiences: vec![ExperienceRecord {
        row:    ExperienceRow {
          id:           3,
          title:        "Ketua Pelaksana PICC".into(),
          organization: "Persekutuan Mahasiswa Kristen (PMK) Institut Teknologi Sumatera"
            .into(),
          kind:         ExperienceKind::Committee,
          start_date:   Some("2024-01-01".into()),
          end_date:     None,
          description:  "remote".into(),
          created_at:   Utc::now(),
        },
        images: vec![ExperienceImageRow {
          id:            1,
          experience_id: 3,
          src:           "x.jpg".into(),
          position:      None,
          zoom:          None,
          sort_order:    0,
        }],
      }],
      ..Default::default()
    };

    let page = PageContent::assemble(remote);
    assert_eq!(page.experiences.len(), catalog::experiences().len());
    let picc = &page.experiences[0];
    assert_eq!(picc.start_date, "2024");
    assert_eq!(picc.end_date, "Sekarang");
    assert_eq!(picc.images[0].position, "center center");
    assert_eq!(picc.images[0].zoom, 1.0);
  }

  #[test]
  fn remote_skills_group_then_merge_by_title() {
    let row = |id, name: &str, category: &str| SkillRow {
      id,
      name: name.into(),
      category: category.into(),
      sort_order: id,
      created_at: Utc::now(),
    };
    let page = PageContent::assemble(RemoteContent {
      skills: vec![row(0, "Rust", "Languages"), row(1, "Axum", "Backend & AI")],
      ..Default::default()
    });

    let titles: Vec<_> = page.skills.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Languages", "Backend & AI", "Frontend", "Tools & Others"]);
    assert_eq!(page.skills[1].skills.len(), 1);
  }
}
