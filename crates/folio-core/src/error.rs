//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("invalid media folder: {0:?}")]
  InvalidFolder(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
