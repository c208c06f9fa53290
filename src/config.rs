// src/config.rs
//
// Server configuration, read from the environment at startup.
//
// Variables:
// - MATERIALS_BIND              listen address (default 0.0.0.0:8081)
// - MATERIALS_DB_PATH           SQLite file (default <data dir>/topic-materials/materials.db)
// - MATERIALS_UPLOAD_DIR        root of stored files (default <data dir>/topic-materials/uploads)
// - MATERIALS_MAX_UPLOAD_BYTES  request body cap on upload routes (default 50 MiB)
//
// An unparseable value is an error, never silently replaced by the default.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const ENV_BIND: &str = "MATERIALS_BIND";
pub const ENV_DB_PATH: &str = "MATERIALS_DB_PATH";
pub const ENV_UPLOAD_DIR: &str = "MATERIALS_UPLOAD_DIR";
pub const ENV_MAX_UPLOAD_BYTES: &str = "MATERIALS_MAX_UPLOAD_BYTES";

pub const DEFAULT_BIND: &str = "0.0.0.0:8081";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const APP_DIR_NAME: &str = "topic-materials";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} must be a positive byte count, got: {value}")]
    InvalidByteCount { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    EmptyPath { var: &'static str },

    #[error("Could not determine the user data directory; set {0}")]
    NoDataDir(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                var: ENV_BIND,
                value: bind_raw.clone(),
            })?;

        let max_upload_bytes = match lookup(ENV_MAX_UPLOAD_BYTES) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidByteCount {
                        var: ENV_MAX_UPLOAD_BYTES,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let db_path = path_or_default(&lookup, ENV_DB_PATH, "materials.db")?;
        let upload_dir = path_or_default(&lookup, ENV_UPLOAD_DIR, "uploads")?;

        Ok(Self {
            bind,
            db_path,
            upload_dir,
            max_upload_bytes,
        })
    }
}

fn path_or_default<F>(lookup: &F, var: &'static str, leaf: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::EmptyPath { var }),
        Some(raw) => Ok(PathBuf::from(raw)),
        None => {
            let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir(var))?;
            Ok(data_dir.join(APP_DIR_NAME).join(leaf))
        }
    }
}
