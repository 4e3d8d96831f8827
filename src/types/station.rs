//! Survey input types

use serde::{Deserialize, Serialize};

use super::Degrees;

/// One directional survey station
///
/// Depth is along-hole (ft or m, whichever unit the log uses); angles are in
/// degrees exactly as recorded by the survey tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Measured depth along the wellbore
    pub measured_depth: f64,
    /// Inclination from vertical, [0, 180]
    pub inclination: Degrees,
    /// Azimuth from north, [0, 360)
    pub azimuth: Degrees,
}

impl SurveyStation {
    #[must_use]
    pub const fn new(measured_depth: f64, inclination: f64, azimuth: f64) -> Self {
        Self {
            measured_depth,
            inclination: Degrees(inclination),
            azimuth: Degrees(azimuth),
        }
    }
}

impl From<(f64, f64, f64)> for SurveyStation {
    fn from((md, inc, azi): (f64, f64, f64)) -> Self {
        Self::new(md, inc, azi)
    }
}

/// Surface location and vertical-section reference for one wellbore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellParameters {
    /// Surface hole location easting (absolute grid X)
    pub surface_x: f64,
    /// Surface hole location northing (absolute grid Y)
    pub surface_y: f64,
    /// Azimuth of the vertical-section plane
    pub target_azimuth: Degrees,
}

impl WellParameters {
    #[must_use]
    pub const fn new(surface_x: f64, surface_y: f64, target_azimuth: f64) -> Self {
        Self {
            surface_x,
            surface_y,
            target_azimuth: Degrees(target_azimuth),
        }
    }
}

impl Default for WellParameters {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
