//! Naming rules for uploaded media objects.

use crate::{Error, Result};

/// Folder used when the uploader does not name one.
pub const DEFAULT_FOLDER: &str = "uploads";

/// Check that `folder` is a single safe path segment (`[A-Za-z0-9_-]+`).
pub fn validate_folder(folder: &str) -> Result<&str> {
  let ok = !folder.is_empty()
    && folder
      .bytes()
      .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
  if ok { Ok(folder) } else { Err(Error::InvalidFolder(folder.to_owned())) }
}

/// Extension of `original_name`, lower-cased, if it has a sane one.
pub fn extension(original_name: &str) -> Option<String> {
  let (_, ext) = original_name.rsplit_once('.')?;
  let ok = !ext.is_empty()
    && ext.len() <= 8
    && ext.bytes().all(|b| b.is_ascii_alphanumeric());
  ok.then(|| ext.to_ascii_lowercase())
}

/// Generated object name: `{unix_millis}-{suffix}.{ext}`.
pub fn object_name(original_name: &str, unix_millis: i64, suffix: &str) -> String {
  match extension(original_name) {
    Some(ext) => format!("{unix_millis}-{suffix}.{ext}"),
    None => format!("{unix_millis}-{suffix}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn folder_must_be_a_single_plain_segment() {
    assert!(validate_folder("experience").is_ok());
    assert!(validate_folder("project_images-2").is_ok());
    assert!(validate_folder("").is_err());
    assert!(validate_folder("../etc").is_err());
    assert!(validate_folder("a/b").is_err());
  }

  #[test]
  fn object_name_keeps_only_the_extension() {
    assert_eq!(object_name("My Photo.JPG", 1700000000000, "ab12cd3"), "1700000000000-ab12cd3.jpg");
    assert_eq!(object_name("noext", 5, "x"), "5-x");
    assert_eq!(object_name("evil.p/hp", 5, "x"), "5-x");
  }
}
