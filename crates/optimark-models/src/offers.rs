//! Offering models and DTOs.
//!
//! An offering records a course being taught in a semester. It is keyed by
//! `(course_code, semester_id)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::ids::SemesterId;

/// An offering row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Offer {
    pub course_code: String,
    pub semester_id: SemesterId,
    /// Date the offering was enrolled; determines its semester
    pub enrolled_at: NaiveDate,
}

/// An offering joined with its course name, as shown by `offer get`/`offer list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct OfferWithCourse {
    pub course_code: String,
    pub course_name: String,
    pub semester_id: SemesterId,
    pub enrolled_at: NaiveDate,
}

/// DTO for creating an offering (and its course and semester when absent).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOfferDto {
    #[validate(length(min = 1, message = "course code is required"))]
    pub course_code: String,
    /// Used only when the course does not exist yet
    #[validate(length(min = 1, message = "course name is required"))]
    pub course_name: String,
    /// Defaults to today when unset
    pub enrolled_at: Option<NaiveDate>,
}

/// DTO for updating an offering. Each set field is applied as its own step.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOfferDto {
    /// Moves the offering to the semester containing this date
    pub enrolled_at: Option<NaiveDate>,
    /// Renames the offering's course
    #[validate(length(min = 1, message = "course name must not be empty"))]
    pub course_name: Option<String>,
    /// Recodes the offering's course
    #[validate(length(min = 1, message = "new course code must not be empty"))]
    pub new_course_code: Option<String>,
}

impl UpdateOfferDto {
    pub fn is_empty(&self) -> bool {
        self.enrolled_at.is_none() && self.course_name.is_none() && self.new_course_code.is_none()
    }
}

/// Outcome of a successful offering creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCreated {
    pub offer: Offer,
    /// The semester row was inserted by this creation
    pub semester_created: bool,
    /// The course row was inserted by this creation
    pub course_created: bool,
}
