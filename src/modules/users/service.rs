use anyhow::anyhow;
use optimark_core::{AppError, generate_user_id, hash_password};
use optimark_db::map_write_error;
use optimark_models::{CreateUserDto, UpdateUserDto, User, UserId};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::validator::validate_dto;

pub struct UserService;

impl UserService {
    /// Create a user. The user type picks the ID prefix set: students draw
    /// from the student letters, teachers from the staff letters.
    #[instrument(skip(db, dto), fields(name = %dto.name, user_type = %dto.user_type))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<User, AppError> {
        validate_dto(&dto)?;

        let id = UserId::from(generate_user_id(&dto.name, dto.user_type.role()));
        debug!(%id, "Generated user ID");

        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, name, user_type, password)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, user_type, email, created_at, updated_at"#,
        )
        .bind(&id)
        .bind(&dto.name)
        .bind(dto.user_type)
        .bind(hash_password(&dto.password))
        .fetch_one(db)
        .await
        .map_err(|e| map_write_error(e, || format!("User {} already exists.", id)))
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: &UserId) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, name, user_type, email, created_at, updated_at
               FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(db))]
    pub async fn list_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"SELECT id, name, user_type, email, created_at, updated_at
               FROM users
               ORDER BY created_at DESC, id"#,
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)
    }

    /// Change the password and/or user type. Changing the type keeps the
    /// existing ID.
    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: &UserId, dto: UpdateUserDto) -> Result<User, AppError> {
        if dto.is_empty() {
            return Err(AppError::nothing_to_update("--password/--user-type"));
        }
        validate_dto(&dto)?;

        let password = dto.password.as_deref().map(hash_password);

        sqlx::query_as::<_, User>(
            r#"UPDATE users
               SET password = COALESCE($1, password),
                   user_type = COALESCE($2, user_type),
                   updated_at = NOW()
               WHERE id = $3
               RETURNING id, name, user_type, email, created_at, updated_at"#,
        )
        .bind(password)
        .bind(dto.user_type)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| not_found(id))
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: &UserId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
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

fn not_found(id: &UserId) -> AppError {
    AppError::not_found(anyhow!("No user found with ID {}", id))
}
