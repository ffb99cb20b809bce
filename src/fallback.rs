//! Fixed fallback schedule for days without a computable solar schedule.
//!
//! Serves two situations: no usable coordinate is known, or the real
//! computation reported degenerate solar geometry (polar day or night).
//! The fallback keeps the daily structure intact so classification and
//! scheduling continue to work; its instants are plain clock anchors with
//! no solar meaning.

use crate::time::CivilDate;
use crate::types::{DailyPrayerTimes, DayHours};

// Dawn 05:00, sunrise 06:30, noon 12:00, afternoon 15:30, sunset 18:00,
// nightfall 19:30
const FAJR_HOURS: f64 = 5.0;
const SUNRISE_HOURS: f64 = 6.5;
const DHUHR_HOURS: f64 = 12.0;
const ASR_HOURS: f64 = 15.5;
const MAGHRIB_HOURS: f64 = 18.0;
const ISHA_HOURS: f64 = 19.5;

/// Produces the fixed fallback schedule for a date, as hours.
///
/// Never fails: the hours are constants for every date and every place,
/// chosen as a temperate-latitude compromise. Callers interpret them as
/// local wall clock hours.
#[must_use]
pub fn default_hours(date: CivilDate) -> DailyPrayerTimes<DayHours> {
    DailyPrayerTimes::new(
        date,
        DayHours::from_hours(FAJR_HOURS),
        DayHours::from_hours(SUNRISE_HOURS),
        DayHours::from_hours(DHUHR_HOURS),
        DayHours::from_hours(ASR_HOURS),
        DayHours::from_hours(MAGHRIB_HOURS),
        DayHours::from_hours(ISHA_HOURS),
    )
}

/// Produces the fixed fallback schedule for a date, as UTC datetimes.
///
/// The constant hours are pinned to the date in UTC so the result feeds
/// the same classification functions as a computed schedule.
#[cfg(feature = "chrono")]
#[must_use]
pub fn default_times(date: chrono::NaiveDate) -> DailyPrayerTimes<chrono::DateTime<chrono::Utc>> {
    use crate::time::datetime_at_hours;

    let hours = default_hours(CivilDate::from(date));

    DailyPrayerTimes::new(
        hours.date(),
        datetime_at_hours(date, *hours.fajr()),
        datetime_at_hours(date, *hours.sunrise()),
        datetime_at_hours(date, *hours.dhuhr()),
        datetime_at_hours(date, *hours.asr()),
        datetime_at_hours(date, *hours.maghrib()),
        datetime_at_hours(date, *hours.isha()),
    )
}
