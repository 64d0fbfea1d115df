use anyhow::anyhow;
use optimark_core::AppError;
use optimark_db::map_write_error;
use optimark_models::{CreateTaskDto, Task, TaskId, TaskStatus};
use sqlx::PgPool;
use tracing::instrument;

use crate::validator::validate_dto;

const TASK_COLUMNS: &str = "id, user_id, name, status, created_at, updated_at";

pub struct TaskService;

impl TaskService {
    /// Create a pending task with a fresh 8-character ID.
    #[instrument(skip(db))]
    pub async fn create_task(db: &PgPool, dto: CreateTaskDto) -> Result<Task, AppError> {
        validate_dto(&dto)?;

        let id = TaskId::new();
        let query = format!(
            "INSERT INTO tasks (id, user_id, name, status) VALUES ($1, $2, $3, $4) RETURNING {}",
            TASK_COLUMNS
        );

        sqlx::query_as::<_, Task>(&query)
            .bind(&id)
            .bind(&dto.user_id)
            .bind(&dto.name)
            .bind(TaskStatus::Pending)
            .fetch_one(db)
            .await
            .map_err(|e| map_write_error(e, || format!("Task {} already exists.", id)))
    }

    #[instrument(skip(db))]
    pub async fn get_task(db: &PgPool, id: &TaskId) -> Result<Task, AppError> {
        let query = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);

        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(db))]
    pub async fn list_tasks(db: &PgPool) -> Result<Vec<Task>, AppError> {
        let query = format!(
            "SELECT {} FROM tasks ORDER BY created_at DESC, id",
            TASK_COLUMNS
        );

        sqlx::query_as::<_, Task>(&query)
            .fetch_all(db)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn update_task_status(
        db: &PgPool,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<Task, AppError> {
        let query = format!(
            "UPDATE tasks SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING {}",
            TASK_COLUMNS
        );

        sqlx::query_as::<_, Task>(&query)
            .bind(status)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(db))]
    pub async fn delete_task(db: &PgPool, id: &TaskId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: &TaskId) -> AppError {
    AppError::not_found(anyhow!("No task found with ID {}", id))
}
