//! Calendar date handling for schedule calculations.
//!
//! Dates are plain proleptic-Gregorian civil dates. The schedule algorithm
//! only ever needs the day-of-year, so no Julian date machinery is involved.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Cumulative days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A validated Gregorian calendar date.
///
/// Usable without the `chrono` dependency; under the `chrono` feature it
/// converts from [`chrono::NaiveDate`] losslessly. Ordering is chronological.
///
/// # Example
/// ```
/// # use salat_times::time::CivilDate;
/// let date = CivilDate::new(2024, 6, 21).unwrap();
/// assert_eq!(date.day_of_year(), 173); // leap year shifts the solstice by one
///
/// assert!(CivilDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Creates a date from year, month (1-12), day of month.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does
    /// not exist in that month (leap years accounted for).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the one-based day of year (1-365, or 1-366 in leap years).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        let leap_shift = if self.month > 2 && is_leap_year(self.year) {
            1
        } else {
            0
        };
        DAYS_BEFORE_MONTH[(self.month - 1) as usize] + self.day + leap_shift
    }

    /// Converts to a [`chrono::NaiveDate`].
    ///
    /// `None` only for years outside chrono's representable range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CivilDate {
    fn from(date: chrono::NaiveDate) -> Self {
        // chrono dates are valid civil dates by construction
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl core::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Gregorian leap year rule.
pub(crate) const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Anchors day-relative hours onto a calendar date as an absolute UTC instant.
///
/// Hours below zero or past 24 land on the adjacent day, which happens for
/// coordinates near the antimeridian.
#[cfg(feature = "chrono")]
pub(crate) fn datetime_at_hours(
    date: chrono::NaiveDate,
    hours: crate::types::DayHours,
) -> chrono::DateTime<chrono::Utc> {
    const MS_PER_HOUR: f64 = 3_600_000.0;

    let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = crate::math::round(hours.hours() * MS_PER_HOUR) as i64;
    midnight + chrono::Duration::milliseconds(millis)
}
