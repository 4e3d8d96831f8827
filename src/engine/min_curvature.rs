//! Minimum-curvature course calculations
//!
//! Geometry of a single course (the hole between two consecutive survey
//! stations). Everything here is a pure function of the two stations.
//!
//! ## Formulas
//!
//! ```text
//! β    = acos( sin I1 · sin I2 · cos(A2 − A1) + cos I1 · cos I2 )
//! DLS  = degrees(β) · 100 / CL
//! RF   = tan(β/2) · 2/β          (1 when β = 0)
//! ΔTVD = CL/2 · (cos I1 + cos I2) · RF
//! ΔE   = CL/2 · (sin I1 sin A1 + sin I2 sin A2) · RF
//! ΔN   = CL/2 · (sin I1 cos A1 + sin I2 cos A2) · RF
//! ```

use crate::types::{Radians, SurveyStation};

/// Course length over which dogleg severity is normalised.
pub const DLS_COURSE_UNIT: f64 = 100.0;

/// Geometry of one course between two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseGeometry {
    /// Along-hole length of the course
    pub course_length: f64,
    /// Total angular change β
    pub dogleg: Radians,
    /// Degrees per 100 units of course length
    pub dogleg_severity: f64,
    /// Minimum-curvature ratio factor
    pub ratio_factor: f64,
    pub delta_tvd: f64,
    pub delta_easting: f64,
    pub delta_northing: f64,
}

/// Clamp a cosine into the domain of `acos`.
///
/// Rounding pushes the dogleg cosine slightly past ±1 for nearly straight or
/// nearly reversed courses.
#[must_use]
pub fn clamp_cosine(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Dogleg angle between two hole directions.
#[must_use]
pub fn dogleg_angle(inc1: Radians, azi1: Radians, inc2: Radians, azi2: Radians) -> Radians {
    let cos_dogleg = inc1.sin() * inc2.sin() * (azi2 - azi1).cos() + inc1.cos() * inc2.cos();
    Radians(clamp_cosine(cos_dogleg).acos())
}

/// Dogleg severity in degrees per `DLS_COURSE_UNIT`.
#[must_use]
pub fn dogleg_severity(dogleg: Radians, course_length: f64) -> f64 {
    dogleg.to_degrees().value() * DLS_COURSE_UNIT / course_length
}

/// Ratio factor for a dogleg; must be fed the same β used for DLS.
#[must_use]
pub fn ratio_factor(dogleg: Radians) -> f64 {
    if dogleg.value() == 0.0 {
        1.0
    } else {
        (dogleg.value() / 2.0).tan() * (2.0 / dogleg.value())
    }
}

/// Compute the full course geometry from `from` to `to`.
///
/// Stations must already be validated (finite, strictly increasing depth).
#[must_use]
pub fn course_geometry(from: &SurveyStation, to: &SurveyStation) -> CourseGeometry {
    let course_length = to.measured_depth - from.measured_depth;

    let inc1 = from.inclination.to_radians();
    let azi1 = from.azimuth.to_radians();
    let inc2 = to.inclination.to_radians();
    let azi2 = to.azimuth.to_radians();

    // Same direction at both ends: straight hole.
    let dogleg = if from.inclination == to.inclination && from.azimuth == to.azimuth {
        Radians::ZERO
    } else {
        dogleg_angle(inc1, azi1, inc2, azi2)
    };

    let dls = dogleg_severity(dogleg, course_length);
    let rf = ratio_factor(dogleg);
    let half_course = course_length / 2.0;

    let delta_tvd = half_course * (inc1.cos() + inc2.cos()) * rf;
    let delta_easting = half_course * (inc1.sin() * azi1.sin() + inc2.sin() * azi2.sin()) * rf;
    let delta_northing = half_course * (inc1.sin() * azi1.cos() + inc2.sin() * azi2.cos()) * rf;

    CourseGeometry {
        course_length,
        dogleg,
        dogleg_severity: dls,
        ratio_factor: rf,
        delta_tvd,
        delta_easting,
        delta_northing,
    }
}
