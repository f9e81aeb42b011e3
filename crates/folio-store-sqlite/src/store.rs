//! [`SqliteStore`]: the SQLite implementation of [`ContentStore`].

use std::{collections::HashMap, path::Path};

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use folio_core::{
  row::{
    ExperienceImageRow, ExperienceInput, ExperienceRecord, NewSkill, ProfileInput,
    ProfileRow, ProjectImageRow, ProjectInput, ProjectRecord, SkillRow,
  },
  store::{ContentCounts, ContentStore},
};

use crate::{
  encode::{
    RawExperience, RawProfile, RawProject, RawSkill, encode_dt, encode_kind,
    encode_status, encode_tags,
  },
  schema::SCHEMA,
  Error, Result,
};

const EXPERIENCE_IMAGE_COLUMNS: &str = "id, experience_id, src, position, zoom, sort_order";
const PROJECT_IMAGE_COLUMNS: &str = "id, project_id, src, position, sort_order";

fn experience_image(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExperienceImageRow> {
  Ok(ExperienceImageRow {
    id:            row.get(0)?,
    experience_id: row.get(1)?,
    src:           row.get(2)?,
    position:      row.get(3)?,
    zoom:          row.get(4)?,
    sort_order:    row.get(5)?,
  })
}

fn project_image(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProjectImageRow> {
  Ok(ProjectImageRow {
    id:         row.get(0)?,
    project_id: row.get(1)?,
    src:        row.get(2)?,
    position:   row.get(3)?,
    sort_order: row.get(4)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Folio content store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch experiences (all, or the one with `id`) with their images.
  async fn load_experiences(&self, id: Option<i64>) -> Result<Vec<ExperienceRecord>> {
    let (raws, images): (Vec<RawExperience>, Vec<ExperienceImageRow>) = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM experiences
           WHERE ?1 IS NULL OR id = ?1
           ORDER BY created_at DESC, id DESC",
          RawExperience::COLUMNS
        ))?;
        let raws = stmt
          .query_map(rusqlite::params![id], RawExperience::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(&format!(
          "SELECT {EXPERIENCE_IMAGE_COLUMNS} FROM experience_images
           WHERE ?1 IS NULL OR experience_id = ?1
           ORDER BY experience_id, sort_order, id"
        ))?;
        let images = stmt
          .query_map(rusqlite::params![id], experience_image)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((raws, images))
      })
      .await?;

    let mut by_parent: HashMap<i64, Vec<ExperienceImageRow>> = HashMap::new();
    for image in images {
      by_parent.entry(image.experience_id).or_default().push(image);
    }

    raws
      .into_iter()
      .map(|raw| -> Result<ExperienceRecord> {
        let row = raw.into_row()?;
        let images = by_parent.remove(&row.id).unwrap_or_default();
        Ok(ExperienceRecord { row, images })
      })
      .collect()
  }

  /// Fetch projects (all, or the one with `id`) with their images.
  async fn load_projects(&self, id: Option<i64>) -> Result<Vec<ProjectRecord>> {
    let (raws, images): (Vec<RawProject>, Vec<ProjectImageRow>) = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM projects
           WHERE ?1 IS NULL OR id = ?1
           ORDER BY created_at DESC, id DESC",
          RawProject::COLUMNS
        ))?;
        let raws = stmt
          .query_map(rusqlite::params![id], RawProject::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(&format!(
          "SELECT {PROJECT_IMAGE_COLUMNS} FROM project_images
           WHERE ?1 IS NULL OR project_id = ?1
           ORDER BY project_id, sort_order, id"
        ))?;
        let images = stmt
          .query_map(rusqlite::params![id], project_image)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((raws, images))
      })
      .await?;

    let mut by_parent: HashMap<i64, Vec<ProjectImageRow>> = HashMap::new();
    for image in images {
      by_parent.entry(image.project_id).or_default().push(image);
    }

    raws
      .into_iter()
      .map(|raw| -> Result<ProjectRecord> {
        let row = raw.into_row()?;
        let images = by_parent.remove(&row.id).unwrap_or_default();
        Ok(ProjectRecord { row, images })
      })
      .collect()
  }

  async fn delete_by_id(&self, table: &'static str, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          &format!("DELETE FROM {table} WHERE id = ?1"),
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn count(&self, table: &'static str) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?)
      })
      .await?;
    Ok(n.max(0) as u64)
  }
}

// ─── ContentStore impl ───────────────────────────────────────────────────────

impl ContentStore for SqliteStore {
  type Error = Error;

  // ── Profile ───────────────────────────────────────────────────────────────

  async fn get_profile(&self) -> Result<Option<ProfileRow>> {
    let raw: Option<RawProfile> = self
      .conn
      .call(|conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {} FROM personal ORDER BY id ASC LIMIT 1",
              RawProfile::COLUMNS
            ),
            [],
            RawProfile::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawProfile::into_row).transpose()
  }

  async fn save_profile(&self, input: ProfileInput) -> Result<ProfileRow> {
    let p = input.normalized()?;
    let updated_at = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let existing: Option<i64> = tx
          .query_row("SELECT id FROM personal ORDER BY id ASC LIMIT 1", [], |r| r.get(0))
          .optional()?;

        match existing {
          Some(id) => tx.execute(
            "UPDATE personal SET
               name = ?1, role = ?2, bio = ?3, location = ?4, email = ?5,
               github_url = ?6, linkedin_url = ?7, instagram_url = ?8,
               resume_url = ?9, updated_at = ?10
             WHERE id = ?11",
            rusqlite::params![
              p.name,
              p.role,
              p.bio,
              p.location,
              p.email,
              p.github_url,
              p.linkedin_url,
              p.instagram_url,
              p.resume_url,
              updated_at,
              id,
            ],
          )?,
          None => tx.execute(
            "INSERT INTO personal (
               name, role, bio, location, email,
               github_url, linkedin_url, instagram_url, resume_url, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
              p.name,
              p.role,
              p.bio,
              p.location,
              p.email,
              p.github_url,
              p.linkedin_url,
              p.instagram_url,
              p.resume_url,
              updated_at,
            ],
          )?,
        };

        tx.commit()?;
        Ok(())
      })
      .await?;

    self
      .get_profile()
      .await?
      .ok_or(Error::ProfileMissing)
  }

  // ── Skills ────────────────────────────────────────────────────────────────

  async fn list_skills(&self) -> Result<Vec<SkillRow>> {
    let raws: Vec<RawSkill> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {} FROM skills ORDER BY sort_order ASC, id ASC",
          RawSkill::COLUMNS
        ))?;
        let rows = stmt
          .query_map([], RawSkill::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSkill::into_row).collect()
  }

  async fn add_skill(&self, input: NewSkill) -> Result<SkillRow> {
    let NewSkill { name, category } = input.normalized()?;
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let (name_col, category_col) = (name.clone(), category.clone());

    let (id, sort_order): (i64, i64) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        // One past the current maximum: stays at the end even after deletions.
        let sort_order: i64 = tx.query_row(
          "SELECT COALESCE(MAX(sort_order) + 1, 0) FROM skills",
          [],
          |r| r.get(0),
        )?;
        tx.execute(
          "INSERT INTO skills (name, category, sort_order, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![name_col, category_col, sort_order, at_str],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok((id, sort_order))
      })
      .await?;

    Ok(SkillRow { id, name, category, sort_order, created_at })
  }

  async fn delete_skill(&self, id: i64) -> Result<bool> {
    self.delete_by_id("skills", id).await
  }

  // ── Experiences ───────────────────────────────────────────────────────────

  async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>> {
    self.load_experiences(None).await
  }

  async fn save_experience(
    &self,
    id: Option<i64>,
    input: ExperienceInput,
  ) -> Result<Option<ExperienceRecord>> {
    let e = input.prepare()?;
    let kind = encode_kind(e.kind);
    let created_at = encode_dt(Utc::now());

    let saved: Option<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let saved = match id {
          Some(id) => {
            let changed = tx.execute(
              "UPDATE experiences SET
                 title = ?1, organization = ?2, kind = ?3,
                 start_date = ?4, end_date = ?5, description = ?6
               WHERE id = ?7",
              rusqlite::params![
                e.title,
                e.organization,
                kind,
                e.start_date,
                e.end_date,
                e.description,
                id,
              ],
            )?;
            (changed > 0).then_some(id)
          }
          None => {
            tx.execute(
              "INSERT INTO experiences (
                 title, organization, kind, start_date, end_date, description, created_at
               ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
              rusqlite::params![
                e.title,
                e.organization,
                kind,
                e.start_date,
                e.end_date,
                e.description,
                created_at,
              ],
            )?;
            Some(tx.last_insert_rowid())
          }
        };

        let Some(experience_id) = saved else {
          return Ok(None);
        };

        // Images are replaced wholesale; list position becomes sort_order.
        tx.execute(
          "DELETE FROM experience_images WHERE experience_id = ?1",
          rusqlite::params![experience_id],
        )?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO experience_images (experience_id, src, position, zoom, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for (idx, img) in e.images.iter().enumerate() {
            stmt.execute(rusqlite::params![
              experience_id,
              img.src,
              img.position,
              img.zoom,
              idx as i64,
            ])?;
          }
        }

        tx.commit()?;
        Ok(Some(experience_id))
      })
      .await?;

    let Some(saved_id) = saved else { return Ok(None) };
    Ok(self.load_experiences(Some(saved_id)).await?.into_iter().next())
  }

  async fn delete_experience(&self, id: i64) -> Result<bool> {
    self.delete_by_id("experiences", id).await
  }

  // ── Projects ──────────────────────────────────────────────────────────────

  async fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
    self.load_projects(None).await
  }

  async fn save_project(
    &self,
    id: Option<i64>,
    input: ProjectInput,
  ) -> Result<Option<ProjectRecord>> {
    let p = input.normalized()?;
    let tags = encode_tags(&p.tags)?;
    let status = encode_status(p.status);
    let created_at = encode_dt(Utc::now());

    let saved: Option<i64> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let saved = match id {
          Some(id) => {
            let changed = tx.execute(
              "UPDATE projects SET
                 title = ?1, description = ?2, tags = ?3, demo_url = ?4,
                 github_url = ?5, featured = ?6, status = ?7
               WHERE id = ?8",
              rusqlite::params![
                p.title,
                p.description,
                tags,
                p.demo_url,
                p.github_url,
                p.featured,
                status,
                id,
              ],
            )?;
            (changed > 0).then_some(id)
          }
          None => {
            tx.execute(
              "INSERT INTO projects (
                 title, description, tags, demo_url, github_url, featured, status, created_at
               ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
              rusqlite::params![
                p.title,
                p.description,
                tags,
                p.demo_url,
                p.github_url,
                p.featured,
                status,
                created_at,
              ],
            )?;
            Some(tx.last_insert_rowid())
          }
        };

        let Some(project_id) = saved else {
          return Ok(None);
        };

        tx.execute(
          "DELETE FROM project_images WHERE project_id = ?1",
          rusqlite::params![project_id],
        )?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO project_images (project_id, src, position, sort_order)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for (idx, img) in p.images.iter().enumerate() {
            stmt.execute(rusqlite::params![project_id, img.src, img.position, idx as i64])?;
          }
        }

        tx.commit()?;
        Ok(Some(project_id))
      })
      .await?;

    let Some(saved_id) = saved else { return Ok(None) };
    Ok(self.load_projects(Some(saved_id)).await?.into_iter().next())
  }

  async fn delete_project(&self, id: i64) -> Result<bool> {
    self.delete_by_id("projects", id).await
  }

  // ── Housekeeping ──────────────────────────────────────────────────────────

  async fn counts(&self) -> Result<ContentCounts> {
    Ok(ContentCounts {
      projects:    self.count("projects").await?,
      experiences: self.count("experiences").await?,
      skills:      self.count("skills").await?,
    })
  }

  async fn ping(&self) -> Result<u64> { self.count("personal").await }
}
