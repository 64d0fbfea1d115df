//! Course models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A course in the catalogue, identified by its short code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Unique short code, e.g. `CS101`
    pub code: String,
    /// Human-readable course name
    pub name: String,
}

/// DTO for creating a course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, message = "course code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "course name is required"))]
    pub name: String,
}

/// DTO for a partial course update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, message = "new course code must not be empty"))]
    pub new_code: Option<String>,
    #[validate(length(min = 1, message = "course name must not be empty"))]
    pub name: Option<String>,
}

impl UpdateCourseDto {
    pub fn is_empty(&self) -> bool {
        self.new_code.is_none() && self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_code_and_name() {
        let dto = CreateCourseDto {
            code: String::new(),
            name: "Algorithms".into(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateCourseDto::default().is_empty());
        let dto = UpdateCourseDto {
            name: Some("Data Structures".into()),
            ..Default::default()
        };
        assert!(!dto.is_empty());
    }
}
