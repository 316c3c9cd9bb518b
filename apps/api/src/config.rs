use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means the process runs on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Origin used to build public share links, without a trailing slash.
    pub public_base_url: String,
    /// Request body cap. Photos and portfolio files travel as data URIs.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = parse_env("PORT", 8080u16)?;
        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10u32)?,
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_body_bytes: parse_env("MAX_BODY_BYTES", 25 * 1024 * 1024usize)?,
        })
    }

    /// Configuration for tests and local tooling: in-memory store, no env.
    pub fn local(public_base_url: &str) -> Self {
        Config {
            database_url: None,
            db_max_connections: 1,
            port: 0,
            rust_log: "info".to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_body_bytes: 25 * 1024 * 1024,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
