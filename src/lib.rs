//! # OptiMark
//!
//! Command-line administration tool for the OptiMark academic records
//! database: courses, semesters, course offerings, staff, students, generic
//! user accounts, and tasks, all stored in PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Clap command tree, dispatch, and the fake-data seeder
//! ├── modules/          # Feature modules
//! │   ├── courses/     # Course catalogue
//! │   ├── semesters/   # Semesters derived from calendar dates
//! │   ├── offers/      # Offerings and their create/update orchestration
//! │   ├── members/     # Staff and students
//! │   ├── users/       # Generic user accounts
//! │   └── tasks/       # Task records
//! ├── output.rs         # Plain-text tables and records
//! └── validator.rs      # DTO presence checks
//! ```
//!
//! Each feature module has the same two files:
//!
//! - `service.rs`: SQL and business rules, one `XService` unit struct
//! - `command.rs`: Clap subcommands and stdout rendering
//!
//! Domain types live in the `optimark-models` crate; pure helpers (ID
//! generation, semester resolution, password hashing, errors) live in
//! `optimark-core`.
//!
//! ## Identifiers
//!
//! Staff, student, and user IDs are 8 characters: a prefix letter (`A B E H`
//! for students, `S P M` for staff and teachers), six digits, and a suffix
//! letter. Semester IDs are 6 characters such as `2425S1`: the two-digit
//! start and end years of the academic year followed by the term.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Failure (not found, conflict, database error, ...) |
//! | 2 | An update command was given no field to change |

pub mod cli;
pub mod modules;
pub mod output;
pub mod validator;

// Re-export workspace crates for convenience
pub use optimark_config;
pub use optimark_core;
pub use optimark_db;
pub use optimark_models;
