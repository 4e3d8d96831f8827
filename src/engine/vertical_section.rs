//! Closure and vertical-section calculations
//!
//! Vertical section is accumulated as a running sum of magnitude changes. The
//! sign of each increment is decided by whether the current station's azimuth
//! lies strictly inside a 180°-wide window built from the target azimuth.
//! The window construction has three cases depending on where the target
//! sits on the compass. Stations whose azimuth falls inside the window
//! contribute a negative increment.

use std::f64::consts::FRAC_PI_2;

use crate::types::{Degrees, Radians};

/// Half-width of the azimuth sign window.
const WINDOW_HALF_WIDTH_DEG: f64 = 90.0;

const FULL_CIRCLE_DEG: f64 = 360.0;

/// Horizontal distance from surface to the current position.
#[must_use]
pub fn closure_distance(easting: f64, northing: f64) -> f64 {
    northing.hypot(easting)
}

/// Closure bearing `atan(easting / northing)`.
///
/// With zero northing the ratio is undefined; the bearing is then +90° for
/// positive easting, −90° for negative easting and 0 at the surface location.
#[must_use]
pub fn closure_direction(easting: f64, northing: f64) -> Radians {
    if northing == 0.0 {
        if easting > 0.0 {
            Radians(FRAC_PI_2)
        } else if easting < 0.0 {
            Radians(-FRAC_PI_2)
        } else {
            Radians::ZERO
        }
    } else {
        Radians((easting / northing).atan())
    }
}

/// Closure projected onto the target-azimuth plane, before sign correction.
#[must_use]
pub fn projected_section(closure_distance: f64, closure_direction: Radians, target: Degrees) -> f64 {
    let mut dir_diff = target.to_radians() - closure_direction;
    if dir_diff.to_degrees().value() >= FULL_CIRCLE_DEG {
        dir_diff = dir_diff - Degrees(FULL_CIRCLE_DEG).to_radians();
    }
    closure_distance * dir_diff.cos()
}

/// Azimuth window that negates vertical-section increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignWindow {
    /// Lower bound in degrees (exclusive)
    pub lower: f64,
    /// Upper bound in degrees (exclusive)
    pub upper: f64,
}

impl SignWindow {
    /// Build the window for a target azimuth.
    #[must_use]
    pub fn for_target(target: Degrees) -> Self {
        let t = target.value();
        if t > 270.0 {
            Self {
                lower: t + WINDOW_HALF_WIDTH_DEG - FULL_CIRCLE_DEG,
                upper: t - WINDOW_HALF_WIDTH_DEG,
            }
        } else if t < 90.0 {
            Self {
                lower: t + WINDOW_HALF_WIDTH_DEG,
                upper: t - WINDOW_HALF_WIDTH_DEG + FULL_CIRCLE_DEG,
            }
        } else {
            Self {
                lower: t - WINDOW_HALF_WIDTH_DEG,
                upper: t + WINDOW_HALF_WIDTH_DEG,
            }
        }
    }

    /// Strict containment; azimuths on either bound are outside.
    #[must_use]
    pub fn contains(&self, azimuth: Degrees) -> bool {
        azimuth.value() > self.lower && azimuth.value() < self.upper
    }
}

/// Signed vertical-section increment for one station.
///
/// `previous_section` is the cumulative vertical section at the previous
/// station, not the previous raw projection.
#[must_use]
pub fn section_increment(
    projected: f64,
    previous_section: f64,
    azimuth: Degrees,
    window: &SignWindow,
) -> f64 {
    let delta = (projected.abs() - previous_section.abs()).abs();
    if window.contains(azimuth) {
        -delta
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_distance_is_hypot() {
        assert_eq!(closure_distance(3.0, 4.0), 5.0);
        assert_eq!(closure_distance(0.0, 0.0), 0.0);
        assert_eq!(closure_distance(-3.0, -4.0), 5.0);
    }

    #[test]
    fn test_closure_direction_zero_northing() {
        assert_eq!(closure_direction(125.0, 0.0), Radians(FRAC_PI_2));
        assert_eq!(closure_direction(-125.0, 0.0), Radians(-FRAC_PI_2));
        assert_eq!(closure_direction(0.0, 0.0), Radians::ZERO);
        assert_eq!(closure_direction(-125.0, -0.0), Radians(-FRAC_PI_2));
    }

    #[test]
    fn test_closure_direction_is_plain_atan() {
        // atan, not atan2: south-west and north-east collapse to the same bearing
        let ne = closure_direction(100.0, 100.0);
        let sw = closure_direction(-100.0, -100.0);
        assert!((ne.to_degrees().value() - 45.0).abs() < 1e-12);
        assert_eq!(ne, sw);
    }

    #[test]
    fn test_projected_section_on_target() {
        let vs = projected_section(1000.0, Degrees(30.0).to_radians(), Degrees(30.0));
        assert!((vs - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_projected_section_perpendicular() {
        let vs = projected_section(1000.0, Degrees(0.0).to_radians(), Degrees(90.0));
        assert!(vs.abs() < 1e-9);
    }

    #[test]
    fn test_projected_section_wraps_once() {
        // 350° target against a -30° closure gives a 380° difference
        let wrapped = projected_section(1000.0, Degrees(-30.0).to_radians(), Degrees(350.0));
        let expected = 1000.0 * 20.0_f64.to_radians().cos();
        assert!((wrapped - expected).abs() < 1e-9);
    }

    #[test]
    fn test_window_target_above_270() {
        let w = SignWindow::for_target(Degrees(345.44));
        assert!((w.lower - 75.44).abs() < 1e-9);
        assert!((w.upper - 255.44).abs() < 1e-9);
    }

    #[test]
    fn test_window_target_below_90() {
        let w = SignWindow::for_target(Degrees(30.0));
        assert_eq!(w.lower, 120.0);
        assert_eq!(w.upper, 300.0);
    }

    #[test]
    fn test_window_target_middle() {
        let w = SignWindow::for_target(Degrees(180.0));
        assert_eq!(w.lower, 90.0);
        assert_eq!(w.upper, 270.0);

        // 90 and 270 themselves fall in the middle case
        assert_eq!(SignWindow::for_target(Degrees(90.0)), SignWindow { lower: 0.0, upper: 180.0 });
        assert_eq!(SignWindow::for_target(Degrees(270.0)), SignWindow { lower: 180.0, upper: 360.0 });
    }

    #[test]
    fn test_window_is_strict() {
        let w = SignWindow::for_target(Degrees(0.0));
        assert_eq!(w, SignWindow { lower: 90.0, upper: 270.0 });
        assert!(!w.contains(Degrees(90.0)));
        assert!(!w.contains(Degrees(270.0)));
        assert!(w.contains(Degrees(90.000_001)));
        assert!(w.contains(Degrees(180.0)));
        assert!(!w.contains(Degrees(0.0)));
    }

    #[test]
    fn test_section_increment_sign() {
        let w = SignWindow::for_target(Degrees(0.0));
        assert_eq!(section_increment(150.0, 100.0, Degrees(10.0), &w), 50.0);
        assert_eq!(section_increment(150.0, 100.0, Degrees(180.0), &w), -50.0);
    }

    #[test]
    fn test_section_increment_uses_magnitudes() {
        let w = SignWindow::for_target(Degrees(0.0));
        // |(|-80| - |-100|)| = 20
        assert_eq!(section_increment(-80.0, -100.0, Degrees(0.0), &w), 20.0);
        assert_eq!(section_increment(-80.0, 100.0, Degrees(200.0), &w), -20.0);
    }
}
