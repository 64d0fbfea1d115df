//! # OptiMark DB
//!
//! Database pool and utilities for the OptiMark CLI.
//!
//! Each invocation of the binary builds a lazy single-connection pool from a
//! [`DatabaseConfig`], runs its statements, and drops the pool on exit.
//!
//! # Example
//!
//! ```ignore
//! use optimark_config::DatabaseConfig;
//! use optimark_db::init_db_pool;
//!
//! let config = DatabaseConfig::from_env();
//! let pool = init_db_pool(&config);
//! ```

pub mod schema;

use optimark_config::DatabaseConfig;
use optimark_core::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::time::Duration;

/// Builds connection options from the loaded configuration.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

/// How long a statement waits for the connection before giving up.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the connection pool used for one CLI invocation.
///
/// The pool holds at most one connection and opens it lazily on the first
/// statement, so commands that fail their own input checks never touch the
/// database. The connection is released when the pool is closed.
pub fn init_db_pool(config: &DatabaseConfig) -> PgPool {
    tracing::debug!(host = %config.host, port = config.port, database = %config.name, "Configuring database pool");

    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(connect_options(config))
}

/// Returns `true` when the error is a unique or primary-key violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Converts a failed write into an [`AppError`], reporting unique violations
/// as `AlreadyExists` with the message produced by `conflict`.
pub fn map_write_error<F>(err: sqlx::Error, conflict: F) -> AppError
where
    F: FnOnce() -> String,
{
    if is_unique_violation(&err) {
        return AppError::already_exists(anyhow::anyhow!(conflict()));
    }
    AppError::database(err)
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
