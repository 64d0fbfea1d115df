use anyhow::anyhow;
use optimark_core::{AppError, generate_user_id, hash_password};
use optimark_db::is_unique_violation;
use optimark_models::{CreateMemberDto, Member, Roster, UpdateMemberDto, UserId};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::validator::validate_dto;

const MEMBER_COLUMNS: &str = "id, name, email, enrolled_at, updated_at";

pub struct MemberService;

impl MemberService {
    /// Register a member with a freshly generated ID.
    ///
    /// The password is stored as its SHA-256 digest. A blank email is stored
    /// as NULL. There is no retry when the generated ID collides with an
    /// existing row; the caller sees `AlreadyExists` and can run the command
    /// again.
    #[instrument(skip(db, dto), fields(name = %dto.name))]
    pub async fn create_member(
        db: &PgPool,
        roster: Roster,
        dto: CreateMemberDto,
    ) -> Result<Member, AppError> {
        validate_dto(&dto)?;

        let id = UserId::from(generate_user_id(&dto.name, roster.role()));
        let email = normalize_email(dto.email.as_deref());
        debug!(%id, "Generated member ID");

        let query = format!(
            "INSERT INTO {} (id, name, email, password) VALUES ($1, $2, $3, $4) RETURNING {}",
            roster.table(),
            MEMBER_COLUMNS
        );

        sqlx::query_as::<_, Member>(&query)
            .bind(&id)
            .bind(&dto.name)
            .bind(email)
            .bind(hash_password(&dto.password))
            .fetch_one(db)
            .await
            .map_err(|e| conflict_error(e, roster, &id, email))
    }

    #[instrument(skip(db))]
    pub async fn get_member(db: &PgPool, roster: Roster, id: &UserId) -> Result<Member, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            MEMBER_COLUMNS,
            roster.table()
        );

        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| not_found(roster, id))
    }

    #[instrument(skip(db))]
    pub async fn list_members(db: &PgPool, roster: Roster) -> Result<Vec<Member>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY enrolled_at DESC, id",
            MEMBER_COLUMNS,
            roster.table()
        );

        sqlx::query_as::<_, Member>(&query)
            .fetch_all(db)
            .await
            .map_err(AppError::database)
    }

    /// Apply a partial update and bump `updated_at`.
    ///
    /// `email: Some("")` clears the email. A new password is hashed before it
    /// is stored.
    #[instrument(skip(db, dto))]
    pub async fn update_member(
        db: &PgPool,
        roster: Roster,
        id: &UserId,
        dto: UpdateMemberDto,
    ) -> Result<Member, AppError> {
        if dto.is_empty() {
            return Err(AppError::nothing_to_update("--name/--email/--password"));
        }
        validate_dto(&dto)?;

        let mut query = format!("UPDATE {} SET updated_at = NOW()", roster.table());
        let mut param_count = 1;

        if dto.name.is_some() {
            param_count += 1;
            query.push_str(&format!(", name = ${}", param_count));
        }

        if dto.email.is_some() {
            param_count += 1;
            query.push_str(&format!(", email = ${}", param_count));
        }

        if dto.password.is_some() {
            param_count += 1;
            query.push_str(&format!(", password = ${}", param_count));
        }

        query.push_str(&format!(" WHERE id = $1 RETURNING {}", MEMBER_COLUMNS));

        let email = dto.email.as_deref().and_then(|e| normalize_email(Some(e)));
        let mut query_builder = sqlx::query_as::<_, Member>(&query).bind(id);

        if let Some(name) = &dto.name {
            query_builder = query_builder.bind(name);
        }

        if dto.email.is_some() {
            query_builder = query_builder.bind(email);
        }

        if let Some(password) = &dto.password {
            query_builder = query_builder.bind(hash_password(password));
        }

        query_builder
            .fetch_optional(db)
            .await
            .map_err(|e| conflict_error(e, roster, id, email))?
            .ok_or_else(|| not_found(roster, id))
    }

    #[instrument(skip(db))]
    pub async fn delete_member(db: &PgPool, roster: Roster, id: &UserId) -> Result<(), AppError> {
        let query = format!("DELETE FROM {} WHERE id = $1", roster.table());

        let result = sqlx::query(&query)
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(not_found(roster, id));
        }
        Ok(())
    }
}

/// Treats a blank email as absent.
fn normalize_email(email: Option<&str>) -> Option<&str> {
    email.map(str::trim).filter(|e| !e.is_empty())
}

fn not_found(roster: Roster, id: &UserId) -> AppError {
    AppError::not_found(anyhow!("No {} found with ID {}", roster.label().to_lowercase(), id))
}

/// Reports a unique violation on the email column or the primary key as
/// `AlreadyExists`; anything else is a database failure.
fn conflict_error(err: sqlx::Error, roster: Roster, id: &UserId, email: Option<&str>) -> AppError {
    if !is_unique_violation(&err) {
        return AppError::database(err);
    }

    let on_email = matches!(
        &err,
        sqlx::Error::Database(db_err)
            if db_err.constraint().is_some_and(|c| c.ends_with("_email_key"))
    );

    match (on_email, email) {
        (true, Some(email)) => AppError::already_exists(anyhow!(
            "{} with email {} already exists.",
            roster.label(),
            email
        )),
        _ => AppError::already_exists(anyhow!("{} {} already exists.", roster.label(), id)),
    }
}
