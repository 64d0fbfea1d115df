//! Offerings module.
//!
//! Creating or moving an offering also makes sure the semester and course it
//! points at exist. Each orchestration runs in a single transaction, so a
//! failure part-way leaves no partial state behind.

pub mod command;
pub mod service;
