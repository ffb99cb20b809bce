//! Core value types for prayer schedules.

use crate::error::check_coordinates;
use crate::math::floor;
use crate::time::CivilDate;
use crate::Result;

/// A validated geographic coordinate in decimal degrees.
///
/// Immutable once constructed; out-of-range (or non-finite) values are
/// rejected up front so the schedule calculation never sees them.
///
/// Implements `Eq` and `Hash` (with ±0.0 normalized), so a
/// `(CivilDate, GeoCoordinate, CalculationMethod)` tuple works directly as a
/// cache key for memoized schedules.
///
/// # Example
/// ```
/// # use salat_times::GeoCoordinate;
/// let mecca = GeoCoordinate::new(21.4225, 39.8262).unwrap();
/// assert_eq!(mecca.latitude(), 21.4225);
///
/// assert!(GeoCoordinate::new(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from latitude and longitude in decimal degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for values outside
    /// ±90° / ±180° (non-finite values included).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in decimal degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in decimal degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

// Construction rejects NaN, so equality is total
impl Eq for GeoCoordinate {}

impl core::hash::Hash for GeoCoordinate {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
        let latitude = if self.latitude == 0.0 {
            0.0
        } else {
            self.latitude
        };
        let longitude = if self.longitude == 0.0 {
            0.0
        } else {
            self.longitude
        };
        latitude.to_bits().hash(state);
        longitude.to_bits().hash(state);
    }
}

/// Hours since midnight UTC of the schedule's calendar date.
///
/// Values can extend beyond a single day: near the antimeridian the local
/// solar day straddles the UTC date boundary, so an instant can land on the
/// previous day (negative hours) or the next one (≥ 24.0).
///
/// # Example
/// ```
/// # use salat_times::DayHours;
/// let dhuhr = DayHours::from_hours(9.37); // 09:22 UTC
/// let (day_offset, hours) = dhuhr.day_and_hours();
/// assert_eq!(day_offset, 0);
/// assert!((hours - 9.37).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayHours(f64);

impl DayHours {
    /// Creates a new `DayHours` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where `day_offset` counts
    /// whole days from the calculation date.
    ///
    /// # Example
    /// ```
    /// # use salat_times::DayHours;
    /// let (day_offset, hours) = DayHours::from_hours(-0.5).day_and_hours();
    /// assert_eq!(day_offset, -1);
    /// assert!((hours - 23.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}

/// The six named instants of a daily schedule.
///
/// Five canonical prayers plus sunrise, in chronological order. Sunrise is
/// not itself a prayer; it bounds the fajr window and anchors the forenoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    /// Dawn prayer.
    Fajr,
    /// Sunrise (ends the fajr window; not a canonical prayer).
    Sunrise,
    /// Noon prayer.
    Dhuhr,
    /// Afternoon prayer.
    Asr,
    /// Sunset prayer.
    Maghrib,
    /// Night prayer.
    Isha,
}

impl Prayer {
    /// All six instants in chronological order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Gets the lowercase event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }

    /// Checks whether this instant is one of the five canonical prayers.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Self::Sunrise)
    }
}

impl core::fmt::Display for Prayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The period of the day an instant falls into, bounded by the six instants.
///
/// Each of the six instants opens one half-open interval (closed at its own
/// instant, open at the next); `BeforeFajr` covers the pre-dawn tail of the
/// night, after the previous day's isha. The `Sunrise` period is the
/// forenoon, where no canonical prayer is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrayerPeriod {
    /// Night tail before dawn (the previous day's isha period has passed).
    BeforeFajr,
    /// From fajr until sunrise.
    Fajr,
    /// Forenoon: from sunrise until solar noon.
    Sunrise,
    /// From dhuhr until asr.
    Dhuhr,
    /// From asr until maghrib.
    Asr,
    /// From maghrib until isha.
    Maghrib,
    /// From isha to the end of the day.
    Isha,
}

impl PrayerPeriod {
    /// Gets the canonical prayer whose time is current in this period.
    ///
    /// `None` for the pre-dawn night and the forenoon, where no canonical
    /// prayer is current.
    #[must_use]
    pub const fn prayer(&self) -> Option<Prayer> {
        match self {
            Self::BeforeFajr | Self::Sunrise => None,
            Self::Fajr => Some(Prayer::Fajr),
            Self::Dhuhr => Some(Prayer::Dhuhr),
            Self::Asr => Some(Prayer::Asr),
            Self::Maghrib => Some(Prayer::Maghrib),
            Self::Isha => Some(Prayer::Isha),
        }
    }
}

/// One of the eight daily windows the scheduling layer groups sessions by.
///
/// Coarser than [`PrayerPeriod`] and partly non-prayer-anchored: `Morning`,
/// `Evening` and `Night` are schedule windows, the `After*` slots follow the
/// five canonical prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutineSlot {
    /// Forenoon window from sunrise until noon.
    Morning,
    /// Window opened by the fajr prayer.
    AfterFajr,
    /// Window opened by the dhuhr prayer.
    AfterDhuhr,
    /// Window opened by the asr prayer.
    AfterAsr,
    /// Window opened by the maghrib prayer.
    AfterMaghrib,
    /// Window opened by the isha prayer.
    AfterIsha,
    /// Late-afternoon window from asr until maghrib.
    Evening,
    /// Night window: from isha onward and the pre-dawn hours.
    Night,
}

impl RoutineSlot {
    /// All eight slots.
    pub const ALL: [Self; 8] = [
        Self::Morning,
        Self::AfterFajr,
        Self::AfterDhuhr,
        Self::AfterAsr,
        Self::AfterMaghrib,
        Self::AfterIsha,
        Self::Evening,
        Self::Night,
    ];

    /// Gets the prayer this slot directly follows, if it is prayer-anchored.
    #[must_use]
    pub const fn follows_prayer(&self) -> Option<Prayer> {
        match self {
            Self::AfterFajr => Some(Prayer::Fajr),
            Self::AfterDhuhr => Some(Prayer::Dhuhr),
            Self::AfterAsr => Some(Prayer::Asr),
            Self::AfterMaghrib => Some(Prayer::Maghrib),
            Self::AfterIsha => Some(Prayer::Isha),
            Self::Morning | Self::Evening | Self::Night => None,
        }
    }
}

/// The six instants of one calendar day for one coordinate and method.
///
/// Generic over the instant representation: the numeric core produces
/// `DailyPrayerTimes<DayHours>`, the `chrono` layer
/// `DailyPrayerTimes<DateTime<Utc>>` (and `DateTime<Tz>` after a display
/// conversion). Immutable after construction and safe to cache indefinitely
/// keyed by `(date, coordinate, method)`.
///
/// The strict ordering fajr < sunrise < dhuhr < asr < maghrib < isha is
/// asserted at construction; a violation is a defect in the solar
/// computation, never a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyPrayerTimes<T> {
    date: CivilDate,
    fajr: T,
    sunrise: T,
    dhuhr: T,
    asr: T,
    maghrib: T,
    isha: T,
}

impl<T: PartialOrd> DailyPrayerTimes<T> {
    /// Assembles a day's schedule, asserting the strict ordering invariant.
    pub(crate) fn new(
        date: CivilDate,
        fajr: T,
        sunrise: T,
        dhuhr: T,
        asr: T,
        maghrib: T,
        isha: T,
    ) -> Self {
        assert!(
            fajr < sunrise
                && sunrise < dhuhr
                && dhuhr < asr
                && asr < maghrib
                && maghrib < isha,
            "prayer times out of order for {date}"
        );
        Self {
            date,
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
        }
    }
}

impl<T> DailyPrayerTimes<T> {
    /// Gets the calendar date this schedule belongs to.
    #[must_use]
    pub const fn date(&self) -> CivilDate {
        self.date
    }

    /// Gets the fajr instant.
    #[must_use]
    pub const fn fajr(&self) -> &T {
        &self.fajr
    }

    /// Gets the sunrise instant.
    #[must_use]
    pub const fn sunrise(&self) -> &T {
        &self.sunrise
    }

    /// Gets the dhuhr (solar noon) instant.
    #[must_use]
    pub const fn dhuhr(&self) -> &T {
        &self.dhuhr
    }

    /// Gets the asr instant.
    #[must_use]
    pub const fn asr(&self) -> &T {
        &self.asr
    }

    /// Gets the maghrib (sunset) instant.
    #[must_use]
    pub const fn maghrib(&self) -> &T {
        &self.maghrib
    }

    /// Gets the isha instant.
    #[must_use]
    pub const fn isha(&self) -> &T {
        &self.isha
    }

    /// Gets the instant of the given event.
    #[must_use]
    pub const fn time_of(&self, prayer: Prayer) -> &T {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}

#[cfg(feature = "chrono")]
impl DailyPrayerTimes<chrono::DateTime<chrono::Utc>> {
    /// Converts all six instants into the given timezone for display.
    ///
    /// The conversion never shifts the instants themselves; computation
    /// stays UTC-anchored and timezone choice is purely presentational.
    #[must_use]
    pub fn with_timezone<Tz: chrono::TimeZone>(&self, tz: &Tz) -> DailyPrayerTimes<chrono::DateTime<Tz>> {
        DailyPrayerTimes {
            date: self.date,
            fajr: self.fajr.with_timezone(tz),
            sunrise: self.sunrise.with_timezone(tz),
            dhuhr: self.dhuhr.with_timezone(tz),
            asr: self.asr.with_timezone(tz),
            maghrib: self.maghrib.with_timezone(tz),
            isha: self.isha.with_timezone(tz),
        }
    }
}
