//! Staff and student models and DTOs.
//!
//! Staff and students live in separate tables with the same shape. A
//! [`Roster`] names which of the two an operation targets and which ID
//! prefix set new members draw from.

use chrono::{DateTime, Utc};
use optimark_core::Role;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::ids::UserId;

/// The member tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Roster {
    Staff,
    Students,
}

impl Roster {
    pub const fn table(self) -> &'static str {
        match self {
            Roster::Staff => "staff",
            Roster::Students => "students",
        }
    }

    /// Prefix set used when minting IDs for this roster.
    pub const fn role(self) -> Role {
        match self {
            Roster::Staff => Role::Staff,
            Roster::Students => Role::Student,
        }
    }

    /// Singular label used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            Roster::Staff => "Staff",
            Roster::Students => "Student",
        }
    }
}

/// A staff member or student. The password digest is never selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub enrolled_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a member.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemberDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub email: Option<String>,
}

/// DTO for a partial member update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
}

impl UpdateMemberDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_tables_and_roles() {
        assert_eq!(Roster::Staff.table(), "staff");
        assert_eq!(Roster::Students.table(), "students");
        assert_eq!(Roster::Staff.role(), Role::Staff);
        assert_eq!(Roster::Students.role(), Role::Student);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateMemberDto::default().is_empty());
        let dto = UpdateMemberDto {
            email: Some(String::new()),
            ..Default::default()
        };
        assert!(!dto.is_empty());
    }

    #[test]
    fn test_create_requires_password() {
        let dto = CreateMemberDto {
            name: "Alice".into(),
            password: String::new(),
            email: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
