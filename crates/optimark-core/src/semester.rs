//! Semester codes.
//!
//! The academic year has three fixed periods:
//!
//! | Months   | Term | Range           | Code                        |
//! |----------|------|-----------------|-----------------------------|
//! | Aug–Dec  | S1   | Aug 1 – Dec 31  | `{yy}{yy+1}S1`              |
//! | Jan–Apr  | S2   | Jan 1 – Apr 30  | `{yy-1}{yy}S2`              |
//! | May–Jul  | S3   | May 1 – Jul 31  | `{yy-1}{yy}S3`              |
//!
//! Years are rendered as two digits modulo 100, so `1999-09-01` resolves to
//! `9900S1`.

use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    S1,
    S2,
    S3,
}

impl Term {
    pub fn from_month(month: u32) -> Self {
        match month {
            8..=12 => Term::S1,
            1..=4 => Term::S2,
            _ => Term::S3,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Term::S1 => "S1",
            Term::S2 => "S2",
            Term::S3 => "S3",
        };
        f.write_str(tag)
    }
}

/// A resolved semester: its 6-character code and inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterPeriod {
    pub id: String,
    pub term: Term,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Maps a calendar date to the semester containing it.
pub fn resolve_semester(date: NaiveDate) -> SemesterPeriod {
    let year = date.year();
    let term = Term::from_month(date.month());

    let (first_year, second_year, start, end) = match term {
        Term::S1 => (year, year + 1, (8, 1), (12, 31)),
        Term::S2 => (year - 1, year, (1, 1), (4, 30)),
        Term::S3 => (year - 1, year, (5, 1), (7, 31)),
    };

    SemesterPeriod {
        id: format!("{:02}{:02}{}", two_digit(first_year), two_digit(second_year), term),
        term,
        start: calendar_date(year, start),
        end: calendar_date(year, end),
    }
}

fn two_digit(year: i32) -> i32 {
    year.rem_euclid(100)
}

fn calendar_date(year: i32, (month, day): (u32, u32)) -> NaiveDate {
    // The month/day pairs above exist in every year chrono can represent,
    // and `year` comes from a valid date.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
