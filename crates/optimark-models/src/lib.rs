//! # OptiMark Models
//!
//! Domain models and DTOs for the OptiMark records database.
//!
//! Row types derive [`sqlx::FromRow`]; create/update DTOs derive
//! [`validator::Validate`] for presence checks on required fields.
//!
//! # Modules
//!
//! - [`courses`]: Course catalogue
//! - [`semesters`]: Semesters derived from calendar dates
//! - [`offers`]: Courses offered in a semester
//! - [`members`]: Staff and students
//! - [`users`]: Generic user accounts with a user type
//! - [`tasks`]: Task records and statuses
//! - [`ids`]: Strongly-typed identifier newtypes

#[macro_use]
mod text_enum;

pub mod courses;
pub mod ids;
pub mod members;
pub mod offers;
pub mod semesters;
pub mod tasks;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use courses::{Course, CreateCourseDto, UpdateCourseDto};
pub use ids::{SemesterId, TaskId, UserId};
pub use members::{CreateMemberDto, Member, Roster, UpdateMemberDto};
pub use offers::{CreateOfferDto, Offer, OfferCreated, OfferWithCourse, UpdateOfferDto};
pub use semesters::Semester;
pub use tasks::{CreateTaskDto, Task, TaskStatus};
pub use users::{CreateUserDto, UpdateUserDto, User, UserType};
