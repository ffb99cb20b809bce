//! Daily prayer schedule computation.
//!
//! Times come from the classic hour angle method: apparent solar noon is
//! mean noon shifted by longitude and the equation of time, and every other
//! event is noon plus or minus the hour angle at which the sun crosses that
//! event's altitude. Declination and the equation of time are taken once
//! per calendar day from [`crate::solar`].
//!
//! When the sun never crosses an event's altitude on the requested day
//! (polar day, polar night, or high-latitude summer where twilight never
//! ends), the computation reports
//! [`DegenerateSolarGeometry`](crate::Error::DegenerateSolarGeometry)
//! naming the first affected event. No clamped or substituted time is ever
//! produced.

use crate::error::Error;
use crate::math::{acos, atan, cos, degrees_to_radians, radians_to_degrees, sin, tan};
use crate::method::{CalculationMethod, IshaRule};
use crate::solar;
use crate::time::CivilDate;
use crate::types::{DailyPrayerTimes, DayHours, GeoCoordinate, Prayer};
use crate::Result;

/// Geometric altitude of the solar center at sunrise and sunset: 34' of
/// atmospheric refraction plus 16' of solar radius below the horizon.
const HORIZON_ALTITUDE: f64 = -0.833;

/// Calculates the six instants of a day as hours since midnight UTC.
///
/// This is the numeric core: no clock types, no timezones. Hours can fall
/// outside 0..24 near the antimeridian, where the local solar day straddles
/// the UTC date boundary; see [`DayHours::day_and_hours`].
///
/// # Errors
/// Returns [`Error::DegenerateSolarGeometry`] naming the first event whose
/// altitude the sun never crosses on this day at this latitude.
///
/// # Example
/// ```
/// # use salat_times::{schedule, CalculationMethod, CivilDate, GeoCoordinate};
/// let mecca = GeoCoordinate::new(21.4225, 39.8262)?;
/// let date = CivilDate::new(2024, 6, 21)?;
/// let times = schedule::compute_hours(date, mecca, CalculationMethod::UmmAlQura)?;
/// assert!(times.fajr() < times.sunrise());
/// # Ok::<(), salat_times::Error>(())
/// ```
pub fn compute_hours(
    date: CivilDate,
    coordinate: GeoCoordinate,
    method: CalculationMethod,
) -> Result<DailyPrayerTimes<DayHours>> {
    let parameters = method.parameters();
    let latitude = coordinate.latitude();
    let day_of_year = date.day_of_year();
    let declination = solar::declination(day_of_year);
    let equation_of_time = solar::equation_of_time_minutes(day_of_year);

    // Apparent solar noon in hours UTC
    let noon = 12.0 - coordinate.longitude() / 15.0 - equation_of_time / 60.0;

    let fajr_offset = event_offset_hours(latitude, declination, -parameters.fajr_angle())
        .ok_or_else(|| Error::degenerate_solar_geometry(Prayer::Fajr))?;
    let horizon_offset = event_offset_hours(latitude, declination, HORIZON_ALTITUDE)
        .ok_or_else(|| Error::degenerate_solar_geometry(Prayer::Sunrise))?;
    let asr_offset =
        event_offset_hours(latitude, declination, asr_altitude(latitude, declination, method))
            .ok_or_else(|| Error::degenerate_solar_geometry(Prayer::Asr))?;

    let maghrib = noon + horizon_offset;
    let isha = match parameters.isha_rule() {
        IshaRule::TwilightAngle(angle) => {
            noon + event_offset_hours(latitude, declination, -angle)
                .ok_or_else(|| Error::degenerate_solar_geometry(Prayer::Isha))?
        }
        IshaRule::FixedInterval(minutes) => maghrib + minutes / 60.0,
    };

    Ok(DailyPrayerTimes::new(
        date,
        DayHours::from_hours(noon - fajr_offset),
        DayHours::from_hours(noon - horizon_offset),
        DayHours::from_hours(noon),
        DayHours::from_hours(noon + asr_offset),
        DayHours::from_hours(maghrib),
        DayHours::from_hours(isha),
    ))
}

/// Calculates the six instants of a day as UTC datetimes.
///
/// Thin layer over [`compute_hours`]: the numeric hours are attached to the
/// calendar date with millisecond precision, rolling across the UTC date
/// boundary where needed.
///
/// # Errors
/// Returns [`Error::DegenerateSolarGeometry`] naming the first event whose
/// altitude the sun never crosses on this day at this latitude.
#[cfg(feature = "chrono")]
pub fn compute(
    date: chrono::NaiveDate,
    coordinate: GeoCoordinate,
    method: CalculationMethod,
) -> Result<DailyPrayerTimes<chrono::DateTime<chrono::Utc>>> {
    use crate::time::datetime_at_hours;

    let civil_date = CivilDate::from(date);
    let hours = compute_hours(civil_date, coordinate, method)?;

    Ok(DailyPrayerTimes::new(
        civil_date,
        datetime_at_hours(date, *hours.fajr()),
        datetime_at_hours(date, *hours.sunrise()),
        datetime_at_hours(date, *hours.dhuhr()),
        datetime_at_hours(date, *hours.asr()),
        datetime_at_hours(date, *hours.maghrib()),
        datetime_at_hours(date, *hours.isha()),
    ))
}

/// Hours between apparent noon and the sun crossing the given altitude.
///
/// `None` when the crossing does not happen on this day, including the
/// polar case where the cosine denominator vanishes.
fn event_offset_hours(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);
    let h = degrees_to_radians(altitude);

    let cos_hour_angle = (sin(h) - sin(phi) * sin(delta)) / (cos(phi) * cos(delta));
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return None;
    }

    Some(radians_to_degrees(acos(cos_hour_angle)) / 15.0)
}

/// Altitude in degrees at which the asr shadow condition is met.
///
/// An object's shadow equals its noon shadow plus `shadow_factor` times its
/// height when the sun stands at `atan(1 / (factor + tan |lat - decl|))`.
fn asr_altitude(latitude: f64, declination: f64, method: CalculationMethod) -> f64 {
    let shadow_factor = method.parameters().asr_juristic().shadow_factor();
    let noon_distance = degrees_to_radians((latitude - declination).abs());

    radians_to_degrees(atan(1.0 / (shadow_factor + tan(noon_distance))))
}
