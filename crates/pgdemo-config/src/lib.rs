//! Database credential sourcing for pgdemo.
//!
//! Credentials come from one of two places: the literal defaults baked into the
//! service, or the `POSTGRES_*` environment variables. Either way the host and
//! port stay fixed at the in-cluster service address.

use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "postgres-service";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "demodb1";
pub const DEFAULT_USER: &str = "postgres";
pub const DEFAULT_PASSWORD: &str = "password";

pub const DATABASE_VAR: &str = "POSTGRES_DB";
pub const USER_VAR: &str = "POSTGRES_USER";
pub const PASSWORD_VAR: &str = "POSTGRES_PASSWORD";
pub const SOURCE_VAR: &str = "PGDEMO_CREDENTIALS";

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Unknown credential source: {0} (expected `env` or `literal`)")]
    UnknownSource(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Credential Source
// ─────────────────────────────────────────────────────────────────────────────

/// Where database credentials are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialSource {
    /// `POSTGRES_DB`, `POSTGRES_USER` and `POSTGRES_PASSWORD`.
    #[default]
    Env,
    /// The built-in defaults.
    Literal,
}

impl FromStr for CredentialSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "env" => Ok(CredentialSource::Env),
            "literal" => Ok(CredentialSource::Literal),
            other => Err(ConfigError::UnknownSource(other.to_string())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DbConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Connection settings for the PostgreSQL server. Built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.into(),
            user: DEFAULT_USER.into(),
            password: DEFAULT_PASSWORD.into(),
        }
    }
}

impl DbConfig {
    /// Reads credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads credentials through `lookup`. Values are taken exactly as given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            database: required(DATABASE_VAR)?,
            user: required(USER_VAR)?,
            password: required(PASSWORD_VAR)?,
        })
    }

    /// Picks the credential source from `PGDEMO_CREDENTIALS` (default `env`)
    /// and builds the config from it.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = lookup(SOURCE_VAR)
            .map(|s| s.parse::<CredentialSource>())
            .transpose()?
            .unwrap_or_default();

        match source {
            CredentialSource::Env => Self::from_lookup(lookup),
            CredentialSource::Literal => Ok(Self::default()),
        }
    }

    /// `user@host:port/database`, safe to log.
    pub fn target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
