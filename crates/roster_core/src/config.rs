//! Store configuration.
//!
//! # Responsibility
//! - Resolve where the roster database lives and how long SQLite may wait on
//!   a locked file.
//! - Read overrides from `ROSTER_*` environment variables.
//!
//! # Invariants
//! - `database` only contains `[A-Za-z0-9_-]`, so the resolved file always
//!   lives directly inside `data_dir`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATABASE_NAME: &str = "university_db";
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const DB_FILE_EXTENSION: &str = "sqlite3";

pub const ENV_DATA_DIR: &str = "ROSTER_DATA_DIR";
pub const ENV_DB_NAME: &str = "ROSTER_DB_NAME";
pub const ENV_BUSY_TIMEOUT_MS: &str = "ROSTER_BUSY_TIMEOUT_MS";

static DATABASE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid database name regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDatabaseName(String),
    InvalidBusyTimeout(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDatabaseName(name) => write!(
                f,
                "invalid database name `{name}`; expected letters, digits, `_` or `-`"
            ),
            Self::InvalidBusyTimeout(raw) => write!(
                f,
                "invalid {ENV_BUSY_TIMEOUT_MS} value `{raw}`; expected milliseconds"
            ),
        }
    }
}

impl Error for ConfigError {}

/// Connection configuration for `SqliteStudentStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub database: String,
    pub busy_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: std::env::temp_dir(),
            database: DEFAULT_DATABASE_NAME.to_string(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

impl StoreConfig {
    /// Config rooted at `data_dir` with the default database name.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Result<Self, ConfigError> {
        let database = database.into();
        validate_database_name(&database)?;
        self.database = database;
        Ok(self)
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Builds a config from `ROSTER_DATA_DIR`, `ROSTER_DB_NAME` and
    /// `ROSTER_BUSY_TIMEOUT_MS`. Unset or blank variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(dir) = read(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(name) = read(ENV_DB_NAME) {
            config = config.with_database(name)?;
        }
        if let Some(raw) = read(ENV_BUSY_TIMEOUT_MS) {
            let millis = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidBusyTimeout(raw.clone()))?;
            config.busy_timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }

    /// Full path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{DB_FILE_EXTENSION}", self.database))
    }
}

fn validate_database_name(name: &str) -> Result<(), ConfigError> {
    if DATABASE_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDatabaseName(name.to_string()))
    }
}
