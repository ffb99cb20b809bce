#![cfg(feature = "chrono")]

//! Degenerate geometry at high latitudes and the fallback that covers it.

use chrono::{Duration, NaiveDate};
use salat_times::{
    classify, fallback, schedule, CalculationMethod, Error, GeoCoordinate, Prayer, PrayerPeriod,
    RoutineSlot,
};

fn tromso() -> GeoCoordinate {
    GeoCoordinate::new(69.6492, 18.9553).unwrap()
}

#[test]
fn midnight_sun_reports_fajr_as_the_first_impossible_event() {
    // Under the midnight sun the 18° twilight never ends, so dawn is the
    // first event that cannot be placed
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    let error =
        schedule::compute(date, tromso(), CalculationMethod::MuslimWorldLeague).unwrap_err();

    assert_eq!(error, Error::degenerate_solar_geometry(Prayer::Fajr));
    assert!(error.is_degenerate_solar_geometry());
}

#[test]
fn polar_night_reports_sunrise_while_twilight_still_exists() {
    // In December the sun stays below the horizon all day, but it still
    // dips far enough for 18° twilight: dawn exists, sunrise does not
    let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();

    let error =
        schedule::compute(date, tromso(), CalculationMethod::MuslimWorldLeague).unwrap_err();

    assert_eq!(error, Error::degenerate_solar_geometry(Prayer::Sunrise));
}

#[test]
fn no_partial_schedule_escapes_a_degenerate_day() {
    // The API yields either six instants or an error; a caller can never
    // observe a schedule with holes
    let summer = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    for method in CalculationMethod::ALL {
        let result = schedule::compute(summer, tromso(), method);
        assert!(
            result.is_err(),
            "{method} should be degenerate under the midnight sun"
        );
    }
}

#[test]
fn fallback_schedule_carries_classification_through_polar_days() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

    assert!(schedule::compute(date, tromso(), CalculationMethod::MuslimWorldLeague).is_err());

    let times = fallback::default_times(date);

    assert!(times.fajr() < times.sunrise());
    assert!(times.maghrib() < times.isha());

    let mid_morning = *times.sunrise() + Duration::hours(2);
    assert_eq!(
        classify::current_prayer(&mid_morning, &times),
        PrayerPeriod::Sunrise
    );
    assert_eq!(
        classify::routine_slot(&mid_morning, &times),
        RoutineSlot::Morning
    );

    let evening = *times.isha() + Duration::hours(1);
    assert_eq!(classify::routine_slot(&evening, &times), RoutineSlot::Night);
}

#[test]
fn fallback_hours_are_the_documented_constants() {
    let date = salat_times::CivilDate::new(2024, 1, 1).unwrap();
    let times = fallback::default_hours(date);

    assert_eq!(times.fajr().hours(), 5.0);
    assert_eq!(times.sunrise().hours(), 6.5);
    assert_eq!(times.dhuhr().hours(), 12.0);
    assert_eq!(times.asr().hours(), 15.5);
    assert_eq!(times.maghrib().hours(), 18.0);
    assert_eq!(times.isha().hours(), 19.5);
}
