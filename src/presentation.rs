//! Presentation interfaces
//!
//! The engine never draws anything. Plotting front-ends implement one or both
//! of these traits and receive ready-made point lists plus axis bounds.
//!
//! - `PlanView`: 3-D wellbore path as (easting, northing, tvd)
//! - `SectionView`: TVD against vertical section, depth axis pointing down

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::types::{PlanPoint, SectionPoint, Trajectory};

/// Consumer of the 3-D wellbore path.
pub trait PlanView {
    fn draw_path(&mut self, points: &[PlanPoint], bounds: &PlanBounds);
}

/// Consumer of the TVD vs vertical-section profile.
pub trait SectionView {
    fn draw_section(&mut self, points: &[SectionPoint], bounds: &SectionBounds);
}

// ============================================================================
// Bounds
// ============================================================================

/// Margins applied around the section profile.
///
/// Defaults frame the bottom of the well: the depth axis spans 50 units above
/// to 40 units below the deepest TVD, the section axis is padded 500 units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionPadding {
    pub tvd_above: f64,
    pub tvd_below: f64,
    pub vs: f64,
}

impl Default for SectionPadding {
    fn default() -> Self {
        Self {
            tvd_above: defaults::SECTION_TVD_PAD_ABOVE,
            tvd_below: defaults::SECTION_TVD_PAD_BELOW,
            vs: defaults::SECTION_VS_PAD,
        }
    }
}

/// Axis limits for a section view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionBounds {
    pub tvd_min: f64,
    pub tvd_max: f64,
    pub vs_min: f64,
    pub vs_max: f64,
    /// Depth increases downward on screen
    pub depth_inverted: bool,
}

impl SectionBounds {
    /// Auto-scale from the data. Returns `None` for an empty profile.
    #[must_use]
    pub fn from_points(points: &[SectionPoint], padding: &SectionPadding) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let max_tvd = points.iter().map(|p| p.tvd).fold(f64::NEG_INFINITY, f64::max);
        let min_vs = points
            .iter()
            .map(|p| p.vertical_section)
            .fold(f64::INFINITY, f64::min);
        let max_vs = points
            .iter()
            .map(|p| p.vertical_section)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            tvd_min: max_tvd - padding.tvd_above,
            tvd_max: max_tvd + padding.tvd_below,
            vs_min: min_vs - padding.vs,
            vs_max: max_vs + padding.vs,
            depth_inverted: true,
        })
    }
}

/// Data extents of the 3-D path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanBounds {
    pub easting_min: f64,
    pub easting_max: f64,
    pub northing_min: f64,
    pub northing_max: f64,
    pub tvd_min: f64,
    pub tvd_max: f64,
    pub depth_inverted: bool,
}

impl PlanBounds {
    #[must_use]
    pub fn from_points(points: &[PlanPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            easting_min: first.easting,
            easting_max: first.easting,
            northing_min: first.northing,
            northing_max: first.northing,
            tvd_min: first.tvd,
            tvd_max: first.tvd,
            depth_inverted: true,
        };

        Some(points.iter().skip(1).fold(init, |b, p| Self {
            easting_min: b.easting_min.min(p.easting),
            easting_max: b.easting_max.max(p.easting),
            northing_min: b.northing_min.min(p.northing),
            northing_max: b.northing_max.max(p.northing),
            tvd_min: b.tvd_min.min(p.tvd),
            tvd_max: b.tvd_max.max(p.tvd),
            depth_inverted: true,
        }))
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Feed a trajectory to a plan view and a section view.
///
/// Empty trajectories are skipped; neither view is called.
pub fn render(
    trajectory: &Trajectory,
    plan: &mut dyn PlanView,
    section: &mut dyn SectionView,
    padding: &SectionPadding,
) {
    let plan_points = trajectory.plan_points();
    if let Some(bounds) = PlanBounds::from_points(&plan_points) {
        plan.draw_path(&plan_points, &bounds);
    }

    let section_points = trajectory.section_points();
    if let Some(bounds) = SectionBounds::from_points(&section_points, padding) {
        section.draw_section(&section_points, &bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::types::{SurveyStation, WellParameters};

    #[derive(Default)]
    struct Recorder {
        plan: Vec<PlanPoint>,
        plan_bounds: Option<PlanBounds>,
        section: Vec<SectionPoint>,
        section_bounds: Option<SectionBounds>,
    }

    impl PlanView for Recorder {
        fn draw_path(&mut self, points: &[PlanPoint], bounds: &PlanBounds) {
            self.plan = points.to_vec();
            self.plan_bounds = Some(*bounds);
        }
    }

    impl SectionView for Recorder {
        fn draw_section(&mut self, points: &[SectionPoint], bounds: &SectionBounds) {
            self.section = points.to_vec();
            self.section_bounds = Some(*bounds);
        }
    }

    #[test]
    fn test_section_bounds_padding() {
        let points = [
            SectionPoint { tvd: 0.0, vertical_section: 0.0 },
            SectionPoint { tvd: 7000.0, vertical_section: -120.0 },
            SectionPoint { tvd: 7250.0, vertical_section: 4800.0 },
        ];
        let b = SectionBounds::from_points(&points, &SectionPadding::default()).unwrap();
        assert_eq!(b.tvd_min, 7200.0);
        assert_eq!(b.tvd_max, 7290.0);
        assert_eq!(b.vs_min, -620.0);
        assert_eq!(b.vs_max, 5300.0);
        assert!(b.depth_inverted);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(SectionBounds::from_points(&[], &SectionPadding::default()).is_none());
        assert!(PlanBounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_plan_bounds_extents() {
        let points = [
            PlanPoint { easting: 0.0, northing: 0.0, tvd: 0.0 },
            PlanPoint { easting: -40.0, northing: 300.0, tvd: 900.0 },
            PlanPoint { easting: 25.0, northing: 120.0, tvd: 1200.0 },
        ];
        let b = PlanBounds::from_points(&points).unwrap();
        assert_eq!((b.easting_min, b.easting_max), (-40.0, 25.0));
        assert_eq!((b.northing_min, b.northing_max), (0.0, 300.0));
        assert_eq!((b.tvd_min, b.tvd_max), (0.0, 1200.0));
    }

    #[test]
    fn test_render_feeds_both_views() {
        let stations: Vec<SurveyStation> = [(0.0, 0.0, 0.0), (1000.0, 30.0, 90.0), (2000.0, 45.0, 90.0)]
            .into_iter()
            .map(SurveyStation::from)
            .collect();
        let trajectory = compute(&stations, &WellParameters::new(0.0, 0.0, 90.0)).unwrap();

        let mut plan = Recorder::default();
        let mut section = Recorder::default();
        render(&trajectory, &mut plan, &mut section, &SectionPadding::default());

        assert_eq!(plan.plan.len(), 3);
        assert_eq!(section.section.len(), 3);
        assert!(plan.plan_bounds.unwrap().easting_max > 0.0);
        let bounds = section.section_bounds.unwrap();
        assert!(bounds.tvd_max > bounds.tvd_min);
    }
}
