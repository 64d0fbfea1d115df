//! Database connection configuration.
//!
//! Credentials for the PostgreSQL records database, loaded from environment
//! variables (a `.env` file is honoured by the binary before this runs).
//!
//! # Environment Variables
//!
//! - `OPTIMARK_DB_HOST`: Server host (default: `localhost`)
//! - `OPTIMARK_DB_PORT`: Server port (default: `5432`)
//! - `OPTIMARK_DB_USER`: Login role (default: `optimark`)
//! - `OPTIMARK_DB_PASS`: Login password (default: empty)
//! - `OPTIMARK_DB_NAME`: Database name (default: `optimark`)
//!
//! # Example
//!
//! ```ignore
//! use optimark_config::DatabaseConfig;
//!
//! let config = DatabaseConfig::from_env();
//! let pool = optimark_db::init_db_pool(&config);
//! ```

use std::env;
use std::fmt;

/// Connection settings for the records database.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Hostname or IP address of the database server.
    pub host: String,
    /// TCP port of the database server.
    pub port: u16,
    /// Role used to log in.
    pub user: String,
    /// Password for `user`. Never printed by `Debug`.
    pub password: String,
    /// Name of the database holding the OptiMark tables.
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "optimark".into(),
            password: String::new(),
            name: "optimark".into(),
        }
    }
}

impl DatabaseConfig {
    /// Loads configuration from the process environment.
    ///
    /// Falls back to the defaults for variables that are unset, and for a
    /// port that does not parse as `u16`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("OPTIMARK_DB_HOST").unwrap_or(defaults.host),
            port: lookup("OPTIMARK_DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            user: lookup("OPTIMARK_DB_USER").unwrap_or(defaults.user),
            password: lookup("OPTIMARK_DB_PASS").unwrap_or(defaults.password),
            name: lookup("OPTIMARK_DB_NAME").unwrap_or(defaults.name),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "optimark");
        assert!(config.password.is_empty());
        assert_eq!(config.name, "optimark");
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, DatabaseConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("OPTIMARK_DB_HOST", "db.internal"),
            ("OPTIMARK_DB_PORT", "6543"),
            ("OPTIMARK_DB_USER", "registrar"),
            ("OPTIMARK_DB_PASS", "hunter2"),
            ("OPTIMARK_DB_NAME", "records"),
        ]));

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 6543);
        assert_eq!(config.user, "registrar");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.name, "records");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("OPTIMARK_DB_PORT", "not-a-port")]));
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[("OPTIMARK_DB_PASS", "hunter2")]));
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("DatabaseConfig"));
        assert!(!debug_str.contains("hunter2"));
    }
}
