//! Error types for the prayer schedule library.

use crate::types::Prayer;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building a prayer schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// A calculation method name not present in the registry.
    ///
    /// Surfaces at the parsing boundary only; the method set itself is a
    /// closed enum and cannot hold unknown values.
    UnknownCalculationMethod,
    /// The sun never crosses the elevation angle required for one of the
    /// prayer events on this date at this latitude (polar day or night).
    ///
    /// Recoverable: callers switch to the fallback schedule.
    DegenerateSolarGeometry {
        /// The prayer event with no hour-angle solution.
        prayer: Prayer,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::UnknownCalculationMethod => {
                write!(f, "unknown calculation method name")
            }
            Self::DegenerateSolarGeometry { prayer } => {
                write!(
                    f,
                    "no solar crossing for {prayer} at this latitude and date (polar day or night)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates a degenerate solar geometry error for the given prayer event.
    #[must_use]
    pub const fn degenerate_solar_geometry(prayer: Prayer) -> Self {
        Self::DegenerateSolarGeometry { prayer }
    }

    /// Checks whether this error is the recoverable polar day/night case.
    ///
    /// Callers that get `true` here are expected to fall back to the fixed
    /// default schedule rather than surface the error.
    #[must_use]
    pub const fn is_degenerate_solar_geometry(&self) -> bool {
        matches!(self, Self::DegenerateSolarGeometry { .. })
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}
