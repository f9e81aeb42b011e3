//! HTTP Basic-auth verifier and the middleware guarding `/api/admin`.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::{Request, State},
  http::{HeaderMap, header},
  middleware::Next,
  response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

impl AuthConfig {
  /// Both halves are always checked, so a rejection takes the same path
  /// whether the username or the password was wrong.
  pub fn accepts(&self, username: &str, password: &str) -> bool {
    let user_ok = digests_match(username.as_bytes(), self.username.as_bytes());
    let password_ok = PasswordHash::new(&self.password_hash)
      .map(|hash| {
        Argon2::default()
          .verify_password(password.as_bytes(), &hash)
          .is_ok()
      })
      .unwrap_or(false);
    user_ok & password_ok
  }
}

/// Credentials carried by an `Authorization: Basic …` header, if well formed.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
  let encoded = headers
    .get(header::AUTHORIZATION)?
    .to_str()
    .ok()?
    .strip_prefix("Basic ")?;
  let decoded = String::from_utf8(B64.decode(encoded).ok()?).ok()?;
  let (username, password) = decoded.split_once(':')?;
  Some((username.to_owned(), password.to_owned()))
}

/// Admit the request only if its Basic credentials match `config`.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<(), Error> {
  match basic_credentials(headers) {
    Some((username, password)) if config.accepts(&username, &password) => Ok(()),
    _ => Err(Error::Unauthorized),
  }
}

/// Compare fixed-length digests without an early exit.
fn digests_match(a: &[u8], b: &[u8]) -> bool {
  let (a, b) = (Sha256::digest(a), Sha256::digest(b));
  a.iter().zip(b.iter()).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

/// Middleware: reject the request with 401 unless it carries valid credentials.
pub async fn require_auth(
  State(config): State<Arc<AuthConfig>>,
  req: Request,
  next: Next,
) -> Result<Response, Error> {
  if let Err(e) = verify_auth(req.headers(), &config) {
    tracing::warn!(path = %req.uri().path(), "rejected admin request");
    return Err(e);
  }
  Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
  use argon2::{PasswordHasher, password_hash::SaltString};
  use axum::http::HeaderValue;
  use rand_core::OsRng;

  use super::*;

  fn config(password: &str) -> AuthConfig {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .unwrap()
      .to_string();
    AuthConfig { username: "admin".to_string(), password_hash: hash }
  }

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    h
  }

  fn basic(user: &str, pass: &str) -> String {
    format!("Basic {}", B64.encode(format!("{user}:{pass}")))
  }

  #[test]
  fn correct_credentials() {
    let cfg = config("secret");
    assert!(verify_auth(&headers(&basic("admin", "secret")), &cfg).is_ok());
  }

  #[test]
  fn wrong_password_or_user() {
    let cfg = config("secret");
    assert!(matches!(
      verify_auth(&headers(&basic("admin", "wrong")), &cfg),
      Err(Error::Unauthorized)
    ));
    assert!(matches!(
      verify_auth(&headers(&basic("root", "secret")), &cfg),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn credentials_are_decoded_from_the_header() {
    let creds = basic_credentials(&headers(&basic("admin", "pa:ss")));
    assert_eq!(creds, Some(("admin".to_owned(), "pa:ss".to_owned())));
    assert_eq!(basic_credentials(&headers("Bearer abc")), None);
  }

  #[test]
  fn username_is_compared_whole() {
    let cfg = config("secret");
    assert!(!cfg.accepts("admi", "secret"));
    assert!(!cfg.accepts("admin2", "secret"));
    assert!(!cfg.accepts("", "secret"));
    assert!(cfg.accepts("admin", "secret"));
  }

  #[test]
  fn missing_header() {
    let cfg = config("secret");
    assert!(matches!(verify_auth(&HeaderMap::new(), &cfg), Err(Error::Unauthorized)));
  }

  #[test]
  fn invalid_base64() {
    let cfg = config("secret");
    assert!(matches!(
      verify_auth(&headers("Basic !!!not-base64!!!"), &cfg),
      Err(Error::Unauthorized)
    ));
  }

  #[test]
  fn malformed_stored_hash_rejects_everyone() {
    let cfg = AuthConfig { username: "admin".into(), password_hash: "plaintext".into() };
    assert!(verify_auth(&headers(&basic("admin", "plaintext")), &cfg).is_err());
  }
}
