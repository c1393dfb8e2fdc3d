//! Transaction dates as accepted by the ledger.
//!
//! Input is validated against the `YYYY-MM-DD` text form with a loose range
//! check: month 1-12 and day 1-31, regardless of month length. Conversion to
//! a calendar date is lenient, so a day past the end of its month rolls over
//! into the next one (`2024-02-31` becomes `2024-03-02`).

use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::errors::LedgerError;

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// A validated, not necessarily real, calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDate {
    year: i32,
    month: u32,
    day: u32,
}

impl EntryDate {
    /// Parses `DDDD-DD-DD` text, checking shape before range.
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        let format_error = || LedgerError::InvalidDateFormat(input.to_string());

        if !matches_pattern(input) {
            return Err(format_error());
        }

        let mut parts = input.split('-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format_error());
        };
        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        let day: u32 = day.parse().map_err(|_| format_error())?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(LedgerError::InvalidDateRange {
                date: input.to_string(),
                month,
                day,
            });
        }

        Ok(Self { year, month, day })
    }

    /// Resolves the calendar date, rolling overflowing days into the next month.
    ///
    /// Returns `None` only for components outside what `chrono` can represent.
    pub fn to_calendar(&self) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        first.checked_add_signed(Duration::days(i64::from(self.day) - 1))
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn matches_pattern(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_date() {
        let date = EntryDate::parse("2024-03-01").unwrap();
        assert_eq!((date.year, date.month, date.day), (2024, 3, 1));
        assert_eq!(date.to_string(), "2024-03-01");
    }

    #[test]
    fn rejects_wrong_digit_count() {
        assert_eq!(
            EntryDate::parse("2024-1-1"),
            Err(LedgerError::InvalidDateFormat("2024-1-1".into()))
        );
        assert!(matches!(
            EntryDate::parse("02024-01-01"),
            Err(LedgerError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn rejects_non_digits() {
        for input in ["abcd-01-01", "2024/01/01", "2024-01-0a", "", " 2024-01-01"] {
            assert!(
                matches!(EntryDate::parse(input), Err(LedgerError::InvalidDateFormat(_))),
                "expected format error for {input:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(matches!(
            EntryDate::parse("2024-13-01"),
            Err(LedgerError::InvalidDateRange { month: 13, day: 1, .. })
        ));
        assert!(matches!(
            EntryDate::parse("2024-00-10"),
            Err(LedgerError::InvalidDateRange { month: 0, .. })
        ));
        assert!(matches!(
            EntryDate::parse("2024-05-32"),
            Err(LedgerError::InvalidDateRange { day: 32, .. })
        ));
        assert!(matches!(
            EntryDate::parse("2024-05-00"),
            Err(LedgerError::InvalidDateRange { day: 0, .. })
        ));
    }

    #[test]
    fn accepts_day_past_month_end_and_rolls_over() {
        let date = EntryDate::parse("2024-02-31").expect("permissive day check");
        let calendar = date.to_calendar().unwrap();
        assert_eq!(calendar, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());

        let date = EntryDate::parse("2023-12-31").unwrap();
        assert_eq!(
            date.to_calendar(),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }
}
