//! Classification of instants against a day's schedule.
//!
//! Two views of the same six boundaries, serving two different questions.
//! [`current_prayer`] answers "which prayer's time is it": the liturgical
//! period an instant falls into. [`routine_slot`] and [`after_prayer_slot`]
//! answer "which window of the daily routine is this": the coarser slots a
//! scheduling layer hangs sessions on.
//!
//! Every region is a half-open interval, closed at the instant that opens
//! it. The instant of fajr itself already belongs to the fajr period.
//!
//! All three functions are generic over the instant representation, so they
//! work unchanged on numeric [`DayHours`](crate::DayHours) schedules and on
//! chrono datetimes.

use crate::types::{DailyPrayerTimes, PrayerPeriod, RoutineSlot};

/// Determines which prayer period an instant falls into.
///
/// The six instants split the day into seven regions: the pre-dawn night
/// tail, one period opened by each canonical prayer, and the forenoon
/// between sunrise and noon where no prayer is current.
///
/// Instants before the day's fajr are reported as
/// [`PrayerPeriod::BeforeFajr`] regardless of how far back they lie; the
/// schedule of the previous day is not consulted.
pub fn current_prayer<T: PartialOrd>(instant: &T, times: &DailyPrayerTimes<T>) -> PrayerPeriod {
    if instant < times.fajr() {
        PrayerPeriod::BeforeFajr
    } else if instant < times.sunrise() {
        PrayerPeriod::Fajr
    } else if instant < times.dhuhr() {
        PrayerPeriod::Sunrise
    } else if instant < times.asr() {
        PrayerPeriod::Dhuhr
    } else if instant < times.maghrib() {
        PrayerPeriod::Asr
    } else if instant < times.isha() {
        PrayerPeriod::Maghrib
    } else {
        PrayerPeriod::Isha
    }
}

/// Determines the post-prayer window an instant falls into, if any.
///
/// `Some` exactly while a canonical prayer's period is running: from that
/// prayer's instant until the next boundary (for isha, until the end of the
/// day). `None` in the pre-dawn night and the forenoon.
pub fn after_prayer_slot<T: PartialOrd>(
    instant: &T,
    times: &DailyPrayerTimes<T>,
) -> Option<RoutineSlot> {
    match current_prayer(instant, times) {
        PrayerPeriod::BeforeFajr | PrayerPeriod::Sunrise => None,
        PrayerPeriod::Fajr => Some(RoutineSlot::AfterFajr),
        PrayerPeriod::Dhuhr => Some(RoutineSlot::AfterDhuhr),
        PrayerPeriod::Asr => Some(RoutineSlot::AfterAsr),
        PrayerPeriod::Maghrib => Some(RoutineSlot::AfterMaghrib),
        PrayerPeriod::Isha => Some(RoutineSlot::AfterIsha),
    }
}

/// Determines the routine slot an instant falls into. Total: every instant
/// lands in some slot.
///
/// This is the scheduling view of the day: the pre-dawn hours and
/// everything from isha onward are one `Night` window, the forenoon is
/// `Morning`, and the span from asr to maghrib is `Evening` rather than an
/// after-asr window. `AfterAsr` and `AfterIsha` are therefore only ever
/// produced by [`after_prayer_slot`], which asks a narrower question about
/// the same interval.
pub fn routine_slot<T: PartialOrd>(instant: &T, times: &DailyPrayerTimes<T>) -> RoutineSlot {
    match current_prayer(instant, times) {
        PrayerPeriod::BeforeFajr | PrayerPeriod::Isha => RoutineSlot::Night,
        PrayerPeriod::Fajr => RoutineSlot::AfterFajr,
        PrayerPeriod::Sunrise => RoutineSlot::Morning,
        PrayerPeriod::Dhuhr => RoutineSlot::AfterDhuhr,
        PrayerPeriod::Asr => RoutineSlot::Evening,
        PrayerPeriod::Maghrib => RoutineSlot::AfterMaghrib,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::CivilDate;
    use crate::types::DayHours;

    fn sample_times() -> DailyPrayerTimes<DayHours> {
        DailyPrayerTimes::new(
            CivilDate::new(2024, 6, 21).unwrap(),
            DayHours::from_hours(5.0),
            DayHours::from_hours(6.5),
            DayHours::from_hours(12.0),
            DayHours::from_hours(15.5),
            DayHours::from_hours(18.0),
            DayHours::from_hours(19.5),
        )
    }

    fn at(hours: f64) -> DayHours {
        DayHours::from_hours(hours)
    }

    #[test]
    fn test_each_period_mid_interval() {
        let times = sample_times();

        assert_eq!(current_prayer(&at(3.0), &times), PrayerPeriod::BeforeFajr);
        assert_eq!(current_prayer(&at(5.5), &times), PrayerPeriod::Fajr);
        assert_eq!(current_prayer(&at(9.0), &times), PrayerPeriod::Sunrise);
        assert_eq!(current_prayer(&at(13.0), &times), PrayerPeriod::Dhuhr);
        assert_eq!(current_prayer(&at(16.0), &times), PrayerPeriod::Asr);
        assert_eq!(current_prayer(&at(18.5), &times), PrayerPeriod::Maghrib);
        assert_eq!(current_prayer(&at(22.0), &times), PrayerPeriod::Isha);
    }

    #[test]
    fn test_boundaries_belong_to_the_opening_instant() {
        let times = sample_times();

        assert_eq!(current_prayer(&at(4.999), &times), PrayerPeriod::BeforeFajr);
        assert_eq!(current_prayer(&at(5.0), &times), PrayerPeriod::Fajr);
        assert_eq!(current_prayer(&at(6.5), &times), PrayerPeriod::Sunrise);
        assert_eq!(current_prayer(&at(12.0), &times), PrayerPeriod::Dhuhr);
        assert_eq!(current_prayer(&at(15.5), &times), PrayerPeriod::Asr);
        assert_eq!(current_prayer(&at(18.0), &times), PrayerPeriod::Maghrib);
        assert_eq!(current_prayer(&at(19.499), &times), PrayerPeriod::Maghrib);
        assert_eq!(current_prayer(&at(19.5), &times), PrayerPeriod::Isha);
    }

    #[test]
    fn test_after_prayer_slot_gaps() {
        let times = sample_times();

        assert_eq!(after_prayer_slot(&at(3.0), &times), None);
        assert_eq!(after_prayer_slot(&at(9.0), &times), None);

        assert_eq!(
            after_prayer_slot(&at(5.0), &times),
            Some(RoutineSlot::AfterFajr)
        );
        assert_eq!(
            after_prayer_slot(&at(16.0), &times),
            Some(RoutineSlot::AfterAsr)
        );
        assert_eq!(
            after_prayer_slot(&at(23.9), &times),
            Some(RoutineSlot::AfterIsha)
        );
    }

    #[test]
    fn test_routine_slot_covers_the_whole_day() {
        let times = sample_times();

        assert_eq!(routine_slot(&at(0.0), &times), RoutineSlot::Night);
        assert_eq!(routine_slot(&at(5.5), &times), RoutineSlot::AfterFajr);
        assert_eq!(routine_slot(&at(9.0), &times), RoutineSlot::Morning);
        assert_eq!(routine_slot(&at(13.0), &times), RoutineSlot::AfterDhuhr);
        assert_eq!(routine_slot(&at(16.0), &times), RoutineSlot::Evening);
        assert_eq!(routine_slot(&at(18.5), &times), RoutineSlot::AfterMaghrib);
        assert_eq!(routine_slot(&at(19.5), &times), RoutineSlot::Night);
        assert_eq!(routine_slot(&at(23.99), &times), RoutineSlot::Night);
    }

    #[test]
    fn test_routine_slot_never_uses_narrow_windows() {
        let times = sample_times();

        let mut hours = 0.0;
        while hours < 24.0 {
            let slot = routine_slot(&at(hours), &times);
            assert!(
                !matches!(slot, RoutineSlot::AfterAsr | RoutineSlot::AfterIsha),
                "{hours}: {slot:?}"
            );
            hours += 0.25;
        }
    }

    #[test]
    fn test_views_agree_on_which_prayer_is_current() {
        let times = sample_times();

        let mut hours = 0.0;
        while hours < 24.0 {
            let instant = at(hours);
            let from_slot = after_prayer_slot(&instant, &times)
                .and_then(|slot| slot.follows_prayer());
            let from_period = current_prayer(&instant, &times).prayer();
            assert_eq!(from_slot, from_period, "at {hours}");
            hours += 0.25;
        }
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_classification_works_on_datetimes() {
        use chrono::{TimeZone, Utc};

        let base = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let hour = |h: i64| base + chrono::Duration::hours(h);
        let times = DailyPrayerTimes::new(
            CivilDate::new(2024, 6, 21).unwrap(),
            hour(5),
            hour(7),
            hour(12),
            hour(15),
            hour(18),
            hour(20),
        );

        assert_eq!(current_prayer(&hour(6), &times), PrayerPeriod::Fajr);
        assert_eq!(routine_slot(&hour(22), &times), RoutineSlot::Night);
        assert_eq!(
            after_prayer_slot(&hour(16), &times),
            Some(RoutineSlot::AfterAsr)
        );
    }
}
