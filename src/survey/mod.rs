//! Survey Station Store
//!
//! Ordered, validated, read-only sequence of survey stations. Construction is
//! the only place survey data is checked; once a `SurveyStations` exists the
//! engine can fold over it without any further failure paths.
//!
//! ## Rejected input
//!
//! - fewer than two stations (no course length to compute)
//! - measured depth that does not strictly increase (zero course length)
//! - inclination outside [0, 180] or azimuth outside [0, 360)
//! - NaN or infinite values

pub mod csv_source;

use thiserror::Error;

use crate::engine;
use crate::types::{SurveyStation, Trajectory, WellParameters};

/// Minimum number of stations that yields at least one course length.
pub const MIN_STATIONS: usize = 2;

/// Upper bound of the inclination range (inclusive).
pub const MAX_INCLINATION_DEG: f64 = 180.0;

/// Upper bound of the azimuth range (exclusive).
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// ============================================================================
// Errors
// ============================================================================

/// Error raised for malformed or insufficient survey input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurveyError {
    #[error("Invalid survey data: {0}")]
    InvalidSurveyData(#[from] InvalidCause),
}

impl SurveyError {
    #[must_use]
    pub const fn cause(&self) -> &InvalidCause {
        match self {
            Self::InvalidSurveyData(cause) => cause,
        }
    }
}

/// Why a survey was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidCause {
    #[error("need at least {required} stations, got {found}")]
    TooFewStations { found: usize, required: usize },

    #[error("measured depth must increase: station {index} at {depth} follows {previous}")]
    NonIncreasingDepth {
        index: usize,
        previous: f64,
        depth: f64,
    },

    #[error("station {index}: inclination {value} outside [0, 180]")]
    InclinationOutOfRange { index: usize, value: f64 },

    #[error("station {index}: azimuth {value} outside [0, 360)")]
    AzimuthOutOfRange { index: usize, value: f64 },

    #[error("station {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },

    #[error("well parameter {0} is not a finite number")]
    NonFiniteParameter(&'static str),

    #[error("target azimuth {0} outside [0, 360)")]
    TargetAzimuthOutOfRange(f64),
}

// ============================================================================
// Store
// ============================================================================

/// Validated, ordered survey stations for one wellbore.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyStations {
    stations: Vec<SurveyStation>,
}

impl SurveyStations {
    /// Validate and take ownership of an ordered station sequence.
    pub fn new(stations: Vec<SurveyStation>) -> Result<Self, SurveyError> {
        validate(&stations)?;
        Ok(Self { stations })
    }

    /// Build from raw `(measured_depth, inclination_deg, azimuth_deg)` triples.
    pub fn from_triples<I>(triples: I) -> Result<Self, SurveyError>
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        Self::new(triples.into_iter().map(SurveyStation::from).collect())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SurveyStation] {
        &self.stations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed store; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SurveyStation> {
        self.stations.iter()
    }

    /// Total along-hole length from the first to the last station.
    #[must_use]
    pub fn total_course_length(&self) -> f64 {
        match (self.stations.first(), self.stations.last()) {
            (Some(first), Some(last)) => last.measured_depth - first.measured_depth,
            _ => 0.0,
        }
    }

    /// Run the minimum-curvature fold over these stations.
    ///
    /// The stations were validated on construction; only the parameters are
    /// checked here, before any point is produced.
    pub fn trajectory(&self, params: &WellParameters) -> Result<Trajectory, SurveyError> {
        validate_parameters(params)?;
        Ok(engine::fold_stations(&self.stations, params))
    }
}

impl<'a> IntoIterator for &'a SurveyStations {
    type Item = &'a SurveyStation;
    type IntoIter = std::slice::Iter<'a, SurveyStation>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

impl TryFrom<Vec<SurveyStation>> for SurveyStations {
    type Error = SurveyError;

    fn try_from(stations: Vec<SurveyStation>) -> Result<Self, Self::Error> {
        Self::new(stations)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check a station sequence against the store's invariants.
///
/// Stops at the first problem found, scanning stations in order.
pub fn validate(stations: &[SurveyStation]) -> Result<(), SurveyError> {
    if stations.len() < MIN_STATIONS {
        return Err(InvalidCause::TooFewStations {
            found: stations.len(),
            required: MIN_STATIONS,
        }
        .into());
    }

    for (index, station) in stations.iter().enumerate() {
        validate_station(index, station)?;

        if index > 0 {
            let previous = stations[index - 1].measured_depth;
            if station.measured_depth <= previous {
                return Err(InvalidCause::NonIncreasingDepth {
                    index,
                    previous,
                    depth: station.measured_depth,
                }
                .into());
            }
        }
    }

    Ok(())
}

fn validate_station(index: usize, station: &SurveyStation) -> Result<(), SurveyError> {
    let inc = station.inclination.value();
    let azi = station.azimuth.value();

    if !station.measured_depth.is_finite() {
        return Err(InvalidCause::NonFinite { index, field: "measured_depth" }.into());
    }
    if !inc.is_finite() {
        return Err(InvalidCause::NonFinite { index, field: "inclination" }.into());
    }
    if !azi.is_finite() {
        return Err(InvalidCause::NonFinite { index, field: "azimuth" }.into());
    }
    if !(0.0..=MAX_INCLINATION_DEG).contains(&inc) {
        return Err(InvalidCause::InclinationOutOfRange { index, value: inc }.into());
    }
    if !(0.0..FULL_CIRCLE_DEG).contains(&azi) {
        return Err(InvalidCause::AzimuthOutOfRange { index, value: azi }.into());
    }

    Ok(())
}

/// Reject parameters that would poison every accumulated value or fall
/// outside the compass range the sign window is built for.
pub fn validate_parameters(params: &WellParameters) -> Result<(), SurveyError> {
    if !params.surface_x.is_finite() {
        return Err(InvalidCause::NonFiniteParameter("surface_x").into());
    }
    if !params.surface_y.is_finite() {
        return Err(InvalidCause::NonFiniteParameter("surface_y").into());
    }
    let target = params.target_azimuth.value();
    if !target.is_finite() {
        return Err(InvalidCause::NonFiniteParameter("target_azimuth").into());
    }
    // The sign window is only defined for a compass bearing
    if !(0.0..FULL_CIRCLE_DEG).contains(&target) {
        return Err(InvalidCause::TargetAzimuthOutOfRange(target).into());
    }
    Ok(())
}
