//! Connection configuration: a `newsgate.toml` file with `NEWSGATE_*`
//! environment overrides (env wins field by field). Explicitly outside the
//! gateway core; only the binary wiring reads this.

pub mod profile;
pub mod ssl_mode;

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

pub use profile::ConnectionProfile;
pub use ssl_mode::SslMode;

pub const CONFIG_FILE: &str = "newsgate.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid value for {var}: {message}")]
    InvalidEnv { var: &'static str, message: String },
    #[error("no connection configured: provide {CONFIG_FILE} or NEWSGATE_DB_* variables")]
    Missing,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    connection: ConnectionProfile,
}

/// Per-field override set collected from the environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvOverrides {
    pub host: Option<String>,
    pub port: Option<String>,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ssl_mode: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            host: var("NEWSGATE_DB_HOST"),
            port: var("NEWSGATE_DB_PORT"),
            database: var("NEWSGATE_DB_NAME"),
            username: var("NEWSGATE_DB_USER"),
            password: var("NEWSGATE_DB_PASSWORD"),
            ssl_mode: var("NEWSGATE_DB_SSLMODE"),
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn load_file(path: &Path) -> Result<Option<ConnectionProfile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(file.connection))
}

fn apply_overrides(
    base: Option<ConnectionProfile>,
    env: &EnvOverrides,
) -> Result<ConnectionProfile, ConfigError> {
    if base.is_none() && env.is_empty() {
        return Err(ConfigError::Missing);
    }

    let mut profile = base.unwrap_or(ConnectionProfile {
        host: "localhost".to_string(),
        port: 5432,
        database: String::new(),
        username: String::new(),
        password: String::new(),
        ssl_mode: SslMode::default(),
    });

    if let Some(host) = &env.host {
        profile.host = host.clone();
    }
    if let Some(port) = &env.port {
        profile.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
            var: "NEWSGATE_DB_PORT",
            message: format!("not a port number: {}", port),
        })?;
    }
    if let Some(database) = &env.database {
        profile.database = database.clone();
    }
    if let Some(username) = &env.username {
        profile.username = username.clone();
    }
    if let Some(password) = &env.password {
        profile.password = password.clone();
    }
    if let Some(ssl_mode) = &env.ssl_mode {
        profile.ssl_mode = SslMode::from_str(ssl_mode).map_err(|message| {
            ConfigError::InvalidEnv {
                var: "NEWSGATE_DB_SSLMODE",
                message,
            }
        })?;
    }

    if profile.database.is_empty() || profile.username.is_empty() {
        return Err(ConfigError::Missing);
    }

    Ok(profile)
}

/// Resolve the connection profile from `path` (usually [`CONFIG_FILE`]) and
/// the current environment.
pub fn load_profile(path: &Path) -> Result<ConnectionProfile, ConfigError> {
    let base = load_file(path)?;
    apply_overrides(base, &EnvOverrides::from_env())
}
