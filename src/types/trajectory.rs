//! Computed trajectory types

use serde::{Deserialize, Serialize};

use super::Degrees;

/// One computed trajectory record, index-aligned with its survey station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Measured depth of the station this point was computed for
    pub measured_depth: f64,
    /// Dogleg severity (degrees per 100 units of course length)
    pub dogleg_severity: f64,
    /// Minimum-curvature ratio factor (1.0 for a straight segment)
    pub ratio_factor: f64,
    /// True vertical depth
    pub tvd: f64,
    /// Cumulative east displacement from surface
    pub easting: f64,
    /// Cumulative north displacement from surface
    pub northing: f64,
    /// Absolute grid X (surface X + easting)
    pub x: f64,
    /// Absolute grid Y (surface Y + northing)
    pub y: f64,
    /// Horizontal distance from surface location
    pub closure_distance: f64,
    /// Bearing of the closure, `atan(easting / northing)`
    pub closure_direction: Degrees,
    /// Signed cumulative vertical section
    pub vertical_section: f64,
}

/// A point on the 3-D wellbore path, for plan/perspective views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanPoint {
    pub easting: f64,
    pub northing: f64,
    pub tvd: f64,
}

/// A point on the TVD vs vertical-section profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionPoint {
    pub tvd: f64,
    pub vertical_section: f64,
}

/// Ordered result of a minimum-curvature run
///
/// Holds exactly one point per input station. Points are never modified
/// after the engine produces them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub(crate) const fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<TrajectoryPoint> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// (easting, northing, tvd) triples for a 3-D view
    #[must_use]
    pub fn plan_points(&self) -> Vec<PlanPoint> {
        self.points
            .iter()
            .map(|p| PlanPoint {
                easting: p.easting,
                northing: p.northing,
                tvd: p.tvd,
            })
            .collect()
    }

    /// (tvd, vs) pairs for a section view
    #[must_use]
    pub fn section_points(&self) -> Vec<SectionPoint> {
        self.points
            .iter()
            .map(|p| SectionPoint {
                tvd: p.tvd,
                vertical_section: p.vertical_section,
            })
            .collect()
    }

    /// Highest dogleg severity anywhere along the path
    #[must_use]
    pub fn max_dogleg_severity(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.dogleg_severity)
            .fold(0.0, f64::max)
    }

    /// Subsea TVD for every point given the kelly-bushing elevation.
    ///
    /// Positive values are above sea level.
    #[must_use]
    pub fn subsea_tvd(&self, kb_elevation: f64) -> Vec<f64> {
        self.points.iter().map(|p| kb_elevation - p.tvd).collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(md: f64, tvd: f64, vs: f64, dls: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            measured_depth: md,
            dogleg_severity: dls,
            ratio_factor: 1.0,
            tvd,
            easting: md * 0.1,
            northing: md * 0.2,
            x: md * 0.1,
            y: md * 0.2,
            closure_distance: 0.0,
            closure_direction: Degrees::ZERO,
            vertical_section: vs,
        }
    }

    #[test]
    fn test_projections_keep_order() {
        let t = Trajectory::from_points(vec![
            point(0.0, 0.0, 0.0, 0.0),
            point(100.0, 99.0, 5.0, 2.0),
            point(200.0, 190.0, 12.0, 3.5),
        ]);

        let plan = t.plan_points();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[2].easting, 20.0);
        assert_eq!(plan[2].tvd, 190.0);

        let section = t.section_points();
        assert_eq!(section[1].vertical_section, 5.0);
        assert_eq!(section[1].tvd, 99.0);
    }

    #[test]
    fn test_max_dogleg_severity() {
        let t = Trajectory::from_points(vec![
            point(0.0, 0.0, 0.0, 0.0),
            point(100.0, 99.0, 5.0, 4.25),
            point(200.0, 190.0, 12.0, 3.5),
        ]);
        assert_eq!(t.max_dogleg_severity(), 4.25);
    }

    #[test]
    fn test_subsea_tvd() {
        let t = Trajectory::from_points(vec![point(0.0, 0.0, 0.0, 0.0), point(3000.0, 3000.0, 0.0, 0.0)]);
        assert_eq!(t.subsea_tvd(2709.5), vec![2709.5, -290.5]);
    }
}
