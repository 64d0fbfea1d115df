//! Courses module.
//!
//! CRUD for the course catalogue, plus the create-if-absent, rename, and
//! recode steps used by the offering orchestration.

pub mod command;
pub mod service;
