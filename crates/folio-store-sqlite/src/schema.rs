//! SQL schema for the Folio SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Expected to hold at most one row; the lowest id is authoritative.
CREATE TABLE IF NOT EXISTS personal (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    role          TEXT NOT NULL DEFAULT '',
    bio           TEXT NOT NULL DEFAULT '',
    location      TEXT NOT NULL DEFAULT '',
    email         TEXT NOT NULL DEFAULT '',
    github_url    TEXT,
    linkedin_url  TEXT,
    instagram_url TEXT,
    resume_url    TEXT,
    updated_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS skills (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    category    TEXT NOT NULL,
    sort_order  INTEGER NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS experiences (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    title         TEXT NOT NULL,
    organization  TEXT NOT NULL,
    kind          TEXT NOT NULL,   -- 'organization' | 'committee'
    start_date    TEXT,            -- YYYY-MM-DD
    end_date      TEXT,            -- NULL while ongoing
    description   TEXT NOT NULL DEFAULT '',
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS experience_images (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    experience_id  INTEGER NOT NULL REFERENCES experiences(id) ON DELETE CASCADE,
    src            TEXT NOT NULL,
    position       TEXT,
    zoom           REAL,
    sort_order     INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS projects (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT NOT NULL,
    description  TEXT NOT NULL DEFAULT '',
    tags         TEXT NOT NULL DEFAULT '[]',   -- JSON array of strings
    demo_url     TEXT,
    github_url   TEXT,
    featured     INTEGER NOT NULL DEFAULT 0,
    status       TEXT NOT NULL,                -- 'ongoing' | 'completed'
    created_at   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS project_images (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    src         TEXT NOT NULL,
    position    TEXT,
    sort_order  INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS skills_order_idx        ON skills(sort_order);
CREATE INDEX IF NOT EXISTS experience_images_idx   ON experience_images(experience_id, sort_order);
CREATE INDEX IF NOT EXISTS project_images_idx      ON project_images(project_id, sort_order);

PRAGMA user_version = 1;
";
