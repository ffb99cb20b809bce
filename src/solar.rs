//! Day-level solar position terms from Spencer's Fourier series.
//!
//! A daily prayer schedule needs two quantities per calendar day: the solar
//! declination and the equation of time. Both vary slowly enough that a
//! single value per day is accurate to well under a minute of clock time,
//! so the series is evaluated once per date from the day of year alone.
//!
//! Reference: J. W. Spencer, "Fourier series representation of the position
//! of the sun", Search 2 (5), 1971, p. 172.

use crate::math::{cos, radians_to_degrees, sin, PI};

/// Fractional year angle in radians for a day of year (1-based).
fn fractional_year(day_of_year: u32) -> f64 {
    2.0 * PI * (f64::from(day_of_year) - 1.0) / 365.0
}

/// Calculates solar declination in degrees for a day of year.
///
/// Positive when the sun is north of the equator, ranging roughly ±23.45°
/// over the year. Accuracy of the series is about 0.01 rad (0.6°), ample
/// for minute-level prayer times.
#[must_use]
pub fn declination(day_of_year: u32) -> f64 {
    let g = fractional_year(day_of_year);

    let declination_radians = 0.006918 - 0.399912 * cos(g) + 0.070257 * sin(g)
        - 0.006758 * cos(2.0 * g)
        + 0.000907 * sin(2.0 * g)
        - 0.002697 * cos(3.0 * g)
        + 0.00148 * sin(3.0 * g);

    radians_to_degrees(declination_radians)
}

/// Calculates the equation of time in minutes for a day of year.
///
/// Positive when the sundial runs ahead of the clock. The annual range is
/// roughly -14 to +16 minutes, shifting apparent solar noon away from
/// 12:00 mean time.
#[must_use]
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let g = fractional_year(day_of_year);

    229.18
        * (0.000075 + 0.001868 * cos(g)
            - 0.032077 * sin(g)
            - 0.014615 * cos(2.0 * g)
            - 0.040849 * sin(2.0 * g))
}
