use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// A calendar month, the unit the scan walks backward over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidDate(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn containing(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> AppResult<Self> {
        let (year, month) =
            date::parse_year_month(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Self::new(year, month)
    }

    /// First and last day of the month.
    pub fn bounds(&self) -> AppResult<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let last = date::month_last_day(self.year, self.month);
        match (first, last) {
            (Some(f), Some(l)) => Ok((f, l)),
            _ => Err(AppError::InvalidDate(self.to_string())),
        }
    }

    /// The month before this one, wrapping January into December of the previous year.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
