//! Schema file location used by `init-db` and `reset-db`.
//!
//! # Environment Variables
//!
//! - `OPTIMARK_SCHEMA_PATH`: Path to the SQL schema file (default: `db/schema.sql`)

use std::env;
use std::path::PathBuf;

pub const DEFAULT_SCHEMA_PATH: &str = "db/schema.sql";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaConfig {
    pub path: PathBuf,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCHEMA_PATH),
        }
    }
}

impl SchemaConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("OPTIMARK_SCHEMA_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(|path| Self {
                path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}
