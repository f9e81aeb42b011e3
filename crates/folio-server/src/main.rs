//! Folio server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) overlaid with
//! `FOLIO_*` environment variables, opens the SQLite store and serves the
//! public and admin APIs over HTTP.
//!
//! # Password hash generation
//!
//! To generate the argon2 PHC string for `auth_password_hash`:
//!
//! ```text
//! cargo run -p folio-server --bin folio -- --hash-password
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use clap::Parser;
use folio_server::{AppState, ServerConfig};
use folio_store_sqlite::SqliteStore;
use rand_core::OsRng;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Folio portfolio content server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Print the argon2 hash for a password entered on stdin and exit.
  #[arg(long)]
  hash_password: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  init_tracing();
  let cli = Cli::parse();

  if cli.hash_password {
    println!("{}", hash_password(&read_password()?)?);
    return Ok(());
  }

  let config = load_config(cli.config)?;
  serve(config).await
}

fn init_tracing() {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// TOML file (optional) overlaid with `FOLIO_*` variables, paths expanded.
fn load_config(path: PathBuf) -> anyhow::Result<ServerConfig> {
  let mut config: ServerConfig = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("FOLIO"))
    .build()
    .and_then(config::Config::try_deserialize)
    .context("invalid folio configuration")?;

  config.store_path = expand_tilde(&config.store_path);
  config.media_root = expand_tilde(&config.media_root);
  Ok(config)
}

fn hash_password(password: &str) -> anyhow::Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  let hash = Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map_err(|e| anyhow::anyhow!("hashing password: {e}"))?;
  Ok(hash.to_string())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
  tokio::fs::create_dir_all(&config.media_root)
    .await
    .with_context(|| format!("creating media root {}", config.media_root.display()))?;

  let store = SqliteStore::open(&config.store_path)
    .await
    .with_context(|| format!("opening store {}", config.store_path.display()))?;

  let address = format!("{}:{}", config.host, config.port);
  tracing::info!(
    store = %config.store_path.display(),
    media = %config.media_root.display(),
    drafts = config.drafts_enabled,
    "starting folio",
  );

  let app = folio_server::router(AppState::new(store, config));
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("binding {address}"))?;
  tracing::info!(%address, "serving");

  axum::serve(listener, app).await.context("serving http")
}

fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  eprint!("admin password: ");
  io::stderr().flush().ok();
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line.trim_end_matches(['\n', '\r']).to_owned())
}

fn expand_tilde(path: &Path) -> PathBuf {
  match (path.strip_prefix("~"), std::env::var_os("HOME")) {
    (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
    _ => path.to_path_buf(),
  }
}
