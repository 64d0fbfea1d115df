//! Generic user accounts typed as student or teacher.

pub mod command;
pub mod service;
