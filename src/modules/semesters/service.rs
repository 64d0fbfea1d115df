use anyhow::anyhow;
use chrono::NaiveDate;
use optimark_core::{AppError, resolve_semester};
use optimark_db::map_write_error;
use optimark_models::{Semester, SemesterId};
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

pub struct SemesterService;

impl SemesterService {
    /// Create the semester containing `date`.
    #[instrument(skip(db))]
    pub async fn create_semester(db: &PgPool, date: NaiveDate) -> Result<Semester, AppError> {
        let semester = Semester::from(resolve_semester(date));

        sqlx::query_as::<_, Semester>(
            r#"INSERT INTO semesters (id, start_date, end_date)
               VALUES ($1, $2, $3)
               RETURNING id, start_date, end_date"#,
        )
        .bind(&semester.id)
        .bind(semester.start_date)
        .bind(semester.end_date)
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, || format!("Semester {} already exists.", semester.id)))
    }

    /// Insert `semester` unless a row with its code exists.
    ///
    /// Returns `true` when a row was inserted. Failures other than the
    /// conflict are propagated.
    #[instrument(skip(conn))]
    pub async fn ensure_semester(
        conn: &mut PgConnection,
        semester: &Semester,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO semesters (id, start_date, end_date)
               VALUES ($1, $2, $3)
               ON CONFLICT (id) DO NOTHING"#,
        )
        .bind(&semester.id)
        .bind(semester.start_date)
        .bind(semester.end_date)
        .execute(&mut *conn)
        .await
        .map_err(AppError::database)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(db))]
    pub async fn get_semester(db: &PgPool, id: &SemesterId) -> Result<Semester, AppError> {
        sqlx::query_as::<_, Semester>(
            "SELECT id, start_date, end_date FROM semesters WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("No semester found with id {}", id)))
    }

    #[instrument(skip(db))]
    pub async fn list_semesters(db: &PgPool) -> Result<Vec<Semester>, AppError> {
        sqlx::query_as::<_, Semester>(
            "SELECT id, start_date, end_date FROM semesters ORDER BY start_date DESC",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)
    }

    /// Delete a semester. Its offerings are removed by the cascade.
    #[instrument(skip(db))]
    pub async fn delete_semester(db: &PgPool, id: &SemesterId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM semesters WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("No semester found with id {}", id)));
        }
        Ok(())
    }
}
