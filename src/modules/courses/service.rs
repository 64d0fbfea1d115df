use anyhow::anyhow;
use optimark_core::AppError;
use optimark_db::map_write_error;
use optimark_models::{Course, CreateCourseDto, UpdateCourseDto};
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use crate::validator::validate_dto;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn create_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        validate_dto(&dto)?;

        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (code, name) VALUES ($1, $2) RETURNING code, name",
        )
        .bind(&dto.code)
        .bind(&dto.name)
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, || format!("Course {} already exists.", dto.code)))
    }

    /// Insert a course unless one with `code` exists. An existing course keeps
    /// its name.
    ///
    /// Returns `true` when a row was inserted.
    #[instrument(skip(conn))]
    pub async fn ensure_course(
        conn: &mut PgConnection,
        code: &str,
        name: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO courses (code, name)
               VALUES ($1, $2)
               ON CONFLICT (code) DO NOTHING"#,
        )
        .bind(code)
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(AppError::database)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(db))]
    pub async fn get_course(db: &PgPool, code: &str) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>("SELECT code, name FROM courses WHERE code = $1")
            .bind(code)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("No course found with code {}", code)))
    }

    #[instrument(skip(db))]
    pub async fn list_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT code, name FROM courses ORDER BY code")
            .fetch_all(db)
            .await
            .map_err(AppError::database)
    }

    /// Apply a partial update. Offerings follow a recode through the
    /// `ON UPDATE CASCADE` foreign key.
    #[instrument(skip(db))]
    pub async fn update_course(
        db: &PgPool,
        code: &str,
        dto: UpdateCourseDto,
    ) -> Result<Course, AppError> {
        if dto.is_empty() {
            return Err(AppError::nothing_to_update("--new-code/--name"));
        }
        validate_dto(&dto)?;

        sqlx::query_as::<_, Course>(
            r#"UPDATE courses
               SET code = COALESCE($1, code), name = COALESCE($2, name)
               WHERE code = $3
               RETURNING code, name"#,
        )
        .bind(dto.new_code.as_deref())
        .bind(dto.name.as_deref())
        .bind(code)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                format!(
                    "Course {} already exists.",
                    dto.new_code.as_deref().unwrap_or(code)
                )
            })
        })?
        .ok_or_else(|| AppError::not_found(anyhow!("No course found with code {}", code)))
    }

    #[instrument(skip(conn))]
    pub async fn rename_course(
        conn: &mut PgConnection,
        code: &str,
        name: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE courses SET name = $1 WHERE code = $2")
            .bind(name)
            .bind(code)
            .execute(&mut *conn)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("No course found with code {}", code)));
        }
        Ok(())
    }

    #[instrument(skip(conn))]
    pub async fn recode_course(
        conn: &mut PgConnection,
        code: &str,
        new_code: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE courses SET code = $1 WHERE code = $2")
            .bind(new_code)
            .bind(code)
            .execute(&mut *conn)
            .await
            .map_err(|e| map_write_error(e, || format!("Course {} already exists.", new_code)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("No course found with code {}", code)));
        }
        Ok(())
    }

    /// Delete a course. Its offerings are removed by the cascade.
    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, code: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE code = $1")
            .bind(code)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("No course found with code {}", code)));
        }
        Ok(())
    }
}
