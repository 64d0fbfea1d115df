use chrono::NaiveDate;
use optimark_db::schema::apply_schema;
use sqlx::PgPool;

/// Create every table from the bundled schema file.
pub async fn setup_schema(pool: &PgPool) {
    apply_schema(pool, include_str!("../../db/schema.sql"))
        .await
        .unwrap();
}

#[allow(dead_code)]
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
