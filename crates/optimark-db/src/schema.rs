//! Schema loading for `init-db` and `reset-db`.
//!
//! The schema is a plain SQL file. Comment lines are dropped, the rest is
//! split on `;`, and every non-empty statement runs inside one transaction.

use anyhow::Context;
use optimark_config::SchemaConfig;
use optimark_core::AppError;
use sqlx::PgPool;
use tracing::{info, instrument};

/// Tables owned by the tool, dependents first.
pub const TABLES: &[&str] = &[
    "offers", "tasks", "users", "students", "staff", "semesters", "courses",
];

/// Splits a schema script into executable statements.
pub fn split_statements(sql: &str) -> Vec<String> {
    let without_comments = sql
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(String::from)
        .collect()
}

/// Executes every statement of `sql` in a single transaction.
///
/// Returns the number of statements executed.
pub async fn apply_schema(db: &PgPool, sql: &str) -> Result<usize, AppError> {
    let statements = split_statements(sql);
    let mut tx = db.begin().await.map_err(AppError::database)?;

    for statement in &statements {
        sqlx::raw_sql(statement)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to execute schema statement: {}", first_line(statement)))
            .map_err(AppError::database)?;
    }

    tx.commit().await.map_err(AppError::database)?;
    Ok(statements.len())
}

/// Loads the schema file named by `config` and applies it.
#[instrument(skip(db))]
pub async fn init_db(db: &PgPool, config: &SchemaConfig) -> Result<usize, AppError> {
    let sql = tokio::fs::read_to_string(&config.path)
        .await
        .with_context(|| format!("Failed to read schema file {}", config.path.display()))?;

    let count = apply_schema(db, &sql).await?;
    info!(statements = count, "Schema applied");
    Ok(count)
}

/// Drops every table owned by the tool.
#[instrument(skip(db))]
pub async fn clean_db(db: &PgPool) -> Result<(), AppError> {
    let statement = format!("DROP TABLE IF EXISTS {} CASCADE", TABLES.join(", "));

    sqlx::raw_sql(&statement)
        .execute(db)
        .await
        .context("Failed to drop tables")
        .map_err(AppError::database)?;

    info!(tables = TABLES.len(), "Tables dropped");
    Ok(())
}

/// Drops all tables and recreates them from the schema file.
pub async fn reset_db(db: &PgPool, config: &SchemaConfig) -> Result<usize, AppError> {
    clean_db(db).await?;
    init_db(db, config).await
}

fn first_line(statement: &str) -> &str {
    statement.lines().next().unwrap_or_default()
}
