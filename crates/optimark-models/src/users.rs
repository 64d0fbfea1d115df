//! Generic user accounts.
//!
//! Users carry a [`UserType`] column instead of living in a per-role table;
//! the type selects the ID prefix set at creation time.

use chrono::{DateTime, Utc};
use optimark_core::Role;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Teacher,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Student, UserType::Teacher];

    pub const fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
        }
    }

    pub const fn role(self) -> Role {
        match self {
            UserType::Student => Role::Student,
            UserType::Teacher => Role::Staff,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("User type must be one of: student, teacher (got '{}')", s))
    }
}

impl_text_enum!(UserType);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub user_type: UserType,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub user_type: UserType,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
    pub user_type: Option<UserType>,
}

impl UpdateUserDto {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.user_type.is_none()
    }
}
