use anyhow::anyhow;
use chrono::{Local, NaiveDate};
use optimark_core::{AppError, resolve_semester};
use optimark_db::map_write_error;
use optimark_models::{
    CreateOfferDto, Offer, OfferCreated, OfferWithCourse, Semester, SemesterId, UpdateOfferDto,
};
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};

use crate::modules::courses::service::CourseService;
use crate::modules::semesters::service::SemesterService;
use crate::validator::validate_dto;

pub struct OfferService;

impl OfferService {
    /// Create an offering of `dto.course_code` in the semester containing the
    /// enrollment date (today when unset).
    ///
    /// The semester and course rows are inserted when absent. An offering
    /// that already exists for the pair is reported as `AlreadyExists`.
    #[instrument(skip(db))]
    pub async fn create_offer(db: &PgPool, dto: CreateOfferDto) -> Result<OfferCreated, AppError> {
        validate_dto(&dto)?;

        let enrolled_at = dto.enrolled_at.unwrap_or_else(today);
        let semester = Semester::from(resolve_semester(enrolled_at));

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let semester_created = SemesterService::ensure_semester(&mut tx, &semester).await?;
        let course_created =
            CourseService::ensure_course(&mut tx, &dto.course_code, &dto.course_name).await?;

        debug!(
            semester = %semester.id,
            semester_created,
            course_created,
            "Offering prerequisites in place"
        );

        let offer = sqlx::query_as::<_, Offer>(
            r#"INSERT INTO offers (course_code, semester_id, enrolled_at)
               VALUES ($1, $2, $3)
               RETURNING course_code, semester_id, enrolled_at"#,
        )
        .bind(&dto.course_code)
        .bind(&semester.id)
        .bind(enrolled_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                format!(
                    "{}-{} in semester {} already exists.",
                    dto.course_code, dto.course_name, semester.id
                )
            })
        })?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(OfferCreated {
            offer,
            semester_created,
            course_created,
        })
    }

    /// Update the offering `(course_code, semester_id)`.
    ///
    /// Steps run in this order, all in one transaction:
    /// 1. `enrolled_at`: move the offering to the semester containing the new
    ///    date, creating that semester when absent
    /// 2. `course_name`: rename the course
    /// 3. `new_course_code`: recode the course; the offering follows through
    ///    the cascading foreign key
    ///
    /// With no field set this returns `NothingToUpdate` without touching the
    /// database.
    #[instrument(skip(db))]
    pub async fn update_offer(
        db: &PgPool,
        course_code: &str,
        semester_id: &SemesterId,
        dto: UpdateOfferDto,
    ) -> Result<Offer, AppError> {
        if dto.is_empty() {
            return Err(AppError::nothing_to_update("--date/--name/--new-code"));
        }
        validate_dto(&dto)?;

        let mut tx = db.begin().await.map_err(AppError::database)?;

        let mut offer = Self::lock_offer(&mut tx, course_code, semester_id).await?;

        if let Some(enrolled_at) = dto.enrolled_at {
            let semester = Semester::from(resolve_semester(enrolled_at));
            SemesterService::ensure_semester(&mut tx, &semester).await?;
            offer = Self::move_offer(&mut tx, &offer, &semester.id, enrolled_at).await?;
        }

        if let Some(name) = &dto.course_name {
            CourseService::rename_course(&mut tx, &offer.course_code, name).await?;
        }

        if let Some(new_code) = &dto.new_course_code {
            CourseService::recode_course(&mut tx, &offer.course_code, new_code).await?;
            offer.course_code = new_code.clone();
        }

        tx.commit().await.map_err(AppError::database)?;
        Ok(offer)
    }

    async fn lock_offer(
        conn: &mut PgConnection,
        course_code: &str,
        semester_id: &SemesterId,
    ) -> Result<Offer, AppError> {
        sqlx::query_as::<_, Offer>(
            r#"SELECT course_code, semester_id, enrolled_at
               FROM offers
               WHERE course_code = $1 AND semester_id = $2
               FOR UPDATE"#,
        )
        .bind(course_code)
        .bind(semester_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| not_found(course_code, semester_id))
    }

    async fn move_offer(
        conn: &mut PgConnection,
        offer: &Offer,
        semester_id: &SemesterId,
        enrolled_at: NaiveDate,
    ) -> Result<Offer, AppError> {
        sqlx::query_as::<_, Offer>(
            r#"UPDATE offers
               SET semester_id = $1, enrolled_at = $2
               WHERE course_code = $3 AND semester_id = $4
               RETURNING course_code, semester_id, enrolled_at"#,
        )
        .bind(semester_id)
        .bind(enrolled_at)
        .bind(&offer.course_code)
        .bind(&offer.semester_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                format!(
                    "{} in semester {} already exists.",
                    offer.course_code, semester_id
                )
            })
        })
    }

    #[instrument(skip(db))]
    pub async fn get_offer(
        db: &PgPool,
        course_code: &str,
        semester_id: &SemesterId,
    ) -> Result<OfferWithCourse, AppError> {
        sqlx::query_as::<_, OfferWithCourse>(
            r#"SELECT o.course_code, c.name AS course_name, o.semester_id, o.enrolled_at
               FROM offers o
               JOIN courses c ON o.course_code = c.code
               WHERE o.course_code = $1 AND o.semester_id = $2"#,
        )
        .bind(course_code)
        .bind(semester_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| not_found(course_code, semester_id))
    }

    /// List offerings, newest semester first, optionally limited to one
    /// semester.
    #[instrument(skip(db))]
    pub async fn list_offers(
        db: &PgPool,
        semester_id: Option<&SemesterId>,
    ) -> Result<Vec<OfferWithCourse>, AppError> {
        sqlx::query_as::<_, OfferWithCourse>(
            r#"SELECT o.course_code, c.name AS course_name, o.semester_id, o.enrolled_at
               FROM offers o
               JOIN courses c ON o.course_code = c.code
               WHERE $1::VARCHAR IS NULL OR o.semester_id = $1
               ORDER BY o.semester_id DESC, o.course_code"#,
        )
        .bind(semester_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn delete_offer(
        db: &PgPool,
        course_code: &str,
        semester_id: &SemesterId,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM offers WHERE course_code = $1 AND semester_id = $2")
            .bind(course_code)
            .bind(semester_id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(not_found(course_code, semester_id));
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn not_found(course_code: &str, semester_id: &SemesterId) -> AppError {
    AppError::not_found(anyhow!(
        "No offering found for {} in {}",
        course_code,
        semester_id
    ))
}
