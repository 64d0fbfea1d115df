//! Staff and student rosters.
//!
//! Both tables share one service and one command set; a [`Roster`] value
//! selects the table and the ID prefix set.
//!
//! [`Roster`]: optimark_models::Roster

pub mod command;
pub mod service;
