//! [`FsMediaStore`]: uploaded media written under a local directory.
//!
//! Files land at `{root}/{folder}/{name}` and are served back by the router
//! from `/uploads`, so the public URL is `{base_url}/{folder}/{name}`.

use std::path::PathBuf;

use bytes::Bytes;
use chrono::Utc;
use folio_core::{media, store::MediaStore};
use rand_core::{OsRng, RngCore as _};

use crate::error::Error;

const SUFFIX_LEN: usize = 7;
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone)]
pub struct FsMediaStore {
  root:     PathBuf,
  base_url: String,
}

impl FsMediaStore {
  pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_owned();
    Self { root: root.into(), base_url }
  }

  pub fn root(&self) -> &std::path::Path { &self.root }
}

/// Seven random lowercase alphanumerics from the OS RNG.
fn random_suffix() -> String {
  (0..SUFFIX_LEN)
    .map(|_| ALPHABET[(OsRng.next_u32() as usize) % ALPHABET.len()] as char)
    .collect()
}

impl MediaStore for FsMediaStore {
  type Error = Error;

  async fn upload<'a>(
    &'a self,
    folder: &'a str,
    original_name: &'a str,
    bytes: Bytes,
  ) -> Result<String, Error> {
    let folder = media::validate_folder(folder)?;
    let name = media::object_name(original_name, Utc::now().timestamp_millis(), &random_suffix());

    let dir = self.root.join(folder);
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&name), &bytes).await?;

    tracing::debug!(path = %dir.join(&name).display(), "media written");
    Ok(format!("{}/{folder}/{name}", self.base_url))
  }
}
