//! Semester models.
//!
//! A semester row is always built from a [`SemesterPeriod`] so that its code
//! and date range agree with the resolver.

use chrono::NaiveDate;
use optimark_core::SemesterPeriod;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ids::SemesterId;

/// A semester with its inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Semester {
    /// 6-character code, e.g. `2425S1`
    pub id: SemesterId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<SemesterPeriod> for Semester {
    fn from(period: SemesterPeriod) -> Self {
        Self {
            id: SemesterId::from(period.id),
            start_date: period.start,
            end_date: period.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optimark_core::resolve_semester;

    #[test]
    fn test_from_period() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let semester = Semester::from(resolve_semester(date));

        assert_eq!(semester.id.as_str(), "2425S2");
        assert_eq!(semester.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(semester.end_date, NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    }
}
