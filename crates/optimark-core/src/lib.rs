//! # OptiMark Core
//!
//! Core types, errors, and derivation helpers for the OptiMark records tool.
//!
//! This crate has no database dependency. Everything in it is either a plain
//! type or a pure function (apart from the random salt drawn by
//! [`user_id::generate_user_id`]):
//!
//! - [`errors`]: Application error type with an [`ErrorKind`] per failure class
//! - [`password`]: One-way password digest used for credential storage
//! - [`semester`]: Mapping of a calendar date to its semester code and range
//! - [`user_id`]: Human-readable 8-character user identifiers
//!
//! # Example
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use optimark_core::{Role, generate_user_id, hash_password, resolve_semester};
//!
//! let id = generate_user_id("alice", Role::Student);
//! let digest = hash_password("secret123");
//!
//! let date = NaiveDate::from_ymd_opt(2024, 9, 15).unwrap();
//! let period = resolve_semester(date);
//! assert_eq!(period.id, "2425S1");
//! ```

pub mod errors;
pub mod password;
pub mod semester;
pub mod user_id;

// Re-export commonly used items at crate root
pub use errors::{AppError, ErrorKind};
pub use password::hash_password;
pub use semester::{SemesterPeriod, Term, resolve_semester};
pub use user_id::{Role, derive_user_id, generate_user_id};
