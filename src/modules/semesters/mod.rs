//! Semesters module.
//!
//! Semester rows are always derived from a calendar date; there is no way to
//! create one from a free-text code.

pub mod command;
pub mod service;
