//! Task records owned by a user.

pub mod command;
pub mod service;
