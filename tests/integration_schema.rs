use optimark_config::SchemaConfig;
use optimark_db::schema::{TABLES, clean_db, init_db, reset_db};
use sqlx::PgPool;
use std::path::PathBuf;

fn bundled_schema() -> SchemaConfig {
    SchemaConfig {
        path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("db/schema.sql"),
    }
}

async fn existing_tables(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar::<_, String>(
        r#"SELECT table_name::TEXT FROM information_schema.tables
           WHERE table_schema = 'public'
           ORDER BY table_name"#,
    )
    .fetch_all(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = false)]
async fn test_init_db_is_idempotent(pool: PgPool) {
    let config = bundled_schema();

    let first = init_db(&pool, &config).await.unwrap();
    let second = init_db(&pool, &config).await.unwrap();
    assert_eq!(first, second);

    let tables = existing_tables(&pool).await;
    for table in TABLES {
        assert!(tables.iter().any(|t| t == table), "missing {}", table);
    }
}

#[sqlx::test(migrations = false)]
async fn test_reset_db_drops_data(pool: PgPool) {
    let config = bundled_schema();
    init_db(&pool, &config).await.unwrap();

    sqlx::query("INSERT INTO courses (code, name) VALUES ('CS101', 'Intro')")
        .execute(&pool)
        .await
        .unwrap();

    reset_db(&pool, &config).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = false)]
async fn test_clean_db_removes_tables(pool: PgPool) {
    init_db(&pool, &bundled_schema()).await.unwrap();
    clean_db(&pool).await.unwrap();

    let tables = existing_tables(&pool).await;
    for table in TABLES {
        assert!(!tables.iter().any(|t| t == table), "{} still exists", table);
    }
}

#[sqlx::test(migrations = false)]
async fn test_missing_schema_file(pool: PgPool) {
    let config = SchemaConfig {
        path: PathBuf::from("does/not/exist.sql"),
    };
    let err = init_db(&pool, &config).await.unwrap_err();
    assert!(err.to_string().contains("does/not/exist.sql"));
}
