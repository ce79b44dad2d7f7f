// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    static_dir: PathBuf,
    production_url_base: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_production_url_base() -> String {
    "https://capelski.github.io".into()
}

/// Accepts absolute http(s) URLs and strips any trailing slash, so paths can
/// be appended as `{base}{path}`.
fn normalize_url_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::Invalid(format!(
            "PRODUCTION_URL_BASE must be an absolute http(s) URL, got {raw:?}"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` for an unparsable `PORT` or `PRODUCTION_URL_BASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        if let Ok(port) = env::var("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {port:?}")))?;
            listen_addr = format!("0.0.0.0:{port}");
        }

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_static_dir, PathBuf::from);

        let production_url_base = env::var("PRODUCTION_URL_BASE").map_or_else(
            |_| Ok(default_production_url_base()),
            |raw| normalize_url_base(&raw),
        )?;

        Ok(Self {
            listen_addr,
            static_dir,
            production_url_base,
        })
    }

    #[must_use]
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    #[must_use]
    pub fn static_dir(&self) -> &std::path::Path {
        &self.static_dir
    }

    /// Public base URL without trailing slash.
    #[must_use]
    pub fn production_url_base(&self) -> &str {
        &self.production_url_base
    }

    /// Output directory of the prerender binary; `PRERENDER_OUT_DIR`, else
    /// `prerendered`.
    ///
    /// # Errors
    ///
    /// `ConfigError::Missing` when `PRERENDER_OUT_DIR` is set but blank.
    pub fn prerender_out_dir() -> Result<PathBuf, ConfigError> {
        match env::var("PRERENDER_OUT_DIR") {
            Ok(dir) if dir.trim().is_empty() => Err(ConfigError::Missing("PRERENDER_OUT_DIR")),
            Ok(dir) => Ok(PathBuf::from(dir)),
            Err(_) => Ok(PathBuf::from("prerendered")),
        }
    }
}
