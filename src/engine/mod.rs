//! Minimum-Curvature Engine
//!
//! Deterministic trajectory computation from directional survey stations.
//! All math here is pure geometry: no I/O, no shared state.
//!
//! ## Entry points
//! - `compute()` - validate raw stations and parameters, then fold
//! - `SurveyStations::trajectory()` - check parameters, fold a validated store
//! - `compute_many()` - check every well's parameters, then fold in parallel
//!
//! ## Fold
//!
//! The first point is a fixed seed built from station zero. Every later point
//! is produced by `step()` from the previous `FoldState` and the two stations
//! bounding the course, so the whole run is a strict left-to-right fold.

pub mod min_curvature;
pub mod vertical_section;

pub use min_curvature::{
    clamp_cosine, course_geometry, dogleg_angle, dogleg_severity, ratio_factor, CourseGeometry,
};
pub use vertical_section::{
    closure_direction, closure_distance, projected_section, section_increment, SignWindow,
};

use rayon::prelude::*;
use tracing::debug;

use crate::survey::{self, SurveyError, SurveyStations};
use crate::types::{Degrees, SurveyStation, Trajectory, TrajectoryPoint, WellParameters};

// ============================================================================
// Fold State
// ============================================================================

/// Running sums carried from one station to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldState {
    pub tvd: f64,
    pub easting: f64,
    pub northing: f64,
    pub vertical_section: f64,
}

impl FoldState {
    /// Initial state at the first station: TVD equals its measured depth.
    #[must_use]
    pub const fn seed(first: &SurveyStation) -> Self {
        Self {
            tvd: first.measured_depth,
            easting: 0.0,
            northing: 0.0,
            vertical_section: 0.0,
        }
    }
}

/// The deterministic first trajectory point.
#[must_use]
pub const fn seed_point(first: &SurveyStation, params: &WellParameters) -> TrajectoryPoint {
    TrajectoryPoint {
        measured_depth: first.measured_depth,
        dogleg_severity: 0.0,
        ratio_factor: 1.0,
        tvd: first.measured_depth,
        easting: 0.0,
        northing: 0.0,
        x: params.surface_x,
        y: params.surface_y,
        closure_distance: 0.0,
        closure_direction: Degrees::ZERO,
        vertical_section: 0.0,
    }
}

/// Advance the fold by one course, from `prev` to `curr`.
///
/// Returns the new state together with the point emitted for `curr`.
#[must_use]
pub fn step(
    state: FoldState,
    prev: &SurveyStation,
    curr: &SurveyStation,
    params: &WellParameters,
    window: &SignWindow,
) -> (FoldState, TrajectoryPoint) {
    let course = course_geometry(prev, curr);

    let tvd = state.tvd + course.delta_tvd;
    let easting = state.easting + course.delta_easting;
    let northing = state.northing + course.delta_northing;

    let cdist = closure_distance(easting, northing);
    let cdir = closure_direction(easting, northing);

    let projected = projected_section(cdist, cdir, params.target_azimuth);
    let vertical_section = state.vertical_section
        + section_increment(projected, state.vertical_section, curr.azimuth, window);

    let next = FoldState {
        tvd,
        easting,
        northing,
        vertical_section,
    };

    let point = TrajectoryPoint {
        measured_depth: curr.measured_depth,
        dogleg_severity: course.dogleg_severity,
        ratio_factor: course.ratio_factor,
        tvd,
        easting,
        northing,
        x: params.surface_x + easting,
        y: params.surface_y + northing,
        closure_distance: cdist,
        closure_direction: cdir.to_degrees(),
        vertical_section,
    };

    (next, point)
}

// ============================================================================
// Public API
// ============================================================================

/// Compute the full trajectory for a raw station sequence.
///
/// Fails with `InvalidSurveyData` before producing any output when the
/// stations or parameters are unusable.
pub fn compute(stations: &[SurveyStation], params: &WellParameters) -> Result<Trajectory, SurveyError> {
    survey::validate(stations)?;
    survey::validate_parameters(params)?;
    Ok(fold_stations(stations, params))
}

/// Compute trajectories for independent wellbores in parallel.
///
/// Output order matches input order. Every well's parameters are checked
/// before any folding starts; the first invalid well fails the whole batch.
pub fn compute_many(wells: &[(SurveyStations, WellParameters)]) -> Result<Vec<Trajectory>, SurveyError> {
    for (_, params) in wells {
        survey::validate_parameters(params)?;
    }
    Ok(wells
        .par_iter()
        .map(|(stations, params)| fold_stations(stations.as_slice(), params))
        .collect())
}

/// Fold over stations that are known to be valid.
pub(crate) fn fold_stations(stations: &[SurveyStation], params: &WellParameters) -> Trajectory {
    let Some(first) = stations.first() else {
        return Trajectory::from_points(Vec::new());
    };

    let window = SignWindow::for_target(params.target_azimuth);
    let mut points = Vec::with_capacity(stations.len());
    points.push(seed_point(first, params));

    let mut state = FoldState::seed(first);
    for pair in stations.windows(2) {
        let (next, point) = step(state, &pair[0], &pair[1], params, &window);
        state = next;
        points.push(point);
    }

    let trajectory = Trajectory::from_points(points);
    debug!(
        stations = trajectory.len(),
        final_tvd = state.tvd,
        final_vs = state.vertical_section,
        max_dls = trajectory.max_dogleg_severity(),
        "Trajectory computed"
    );
    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::InvalidCause;

    fn stations(triples: &[(f64, f64, f64)]) -> Vec<SurveyStation> {
        triples.iter().copied().map(SurveyStation::from).collect()
    }

    #[test]
    fn test_seed_point() {
        let params = WellParameters::new(1_507_302.1, 816_452.02, 345.44);
        let out = compute(&stations(&[(120.0, 0.3, 10.0), (220.0, 0.5, 12.0)]), &params).unwrap();

        let seed = out.points()[0];
        assert_eq!(seed.tvd, 120.0);
        assert_eq!(seed.easting, 0.0);
        assert_eq!(seed.northing, 0.0);
        assert_eq!(seed.dogleg_severity, 0.0);
        assert_eq!(seed.ratio_factor, 1.0);
        assert_eq!(seed.x, 1_507_302.1);
        assert_eq!(seed.y, 816_452.02);
        assert_eq!(seed.vertical_section, 0.0);
    }

    #[test]
    fn test_output_aligned_with_input() {
        let input = stations(&[
            (0.0, 0.0, 0.0),
            (500.0, 2.0, 45.0),
            (1000.0, 8.0, 50.0),
            (1500.0, 15.0, 55.0),
        ]);
        let out = compute(&input, &WellParameters::default()).unwrap();
        assert_eq!(out.len(), input.len());
        for (station, point) in input.iter().zip(out.iter()) {
            assert_eq!(station.measured_depth, point.measured_depth);
        }
    }

    #[test]
    fn test_vertical_well_exact() {
        let out = compute(
            &stations(&[(0.0, 0.0, 0.0), (100.0, 0.0, 0.0), (350.0, 0.0, 90.0), (1000.0, 0.0, 200.0)]),
            &WellParameters::default(),
        )
        .unwrap();
        let tvds: Vec<f64> = out.iter().map(|p| p.tvd).collect();
        assert_eq!(tvds, vec![0.0, 100.0, 350.0, 1000.0]);
        assert!(out.iter().all(|p| p.easting == 0.0 && p.northing == 0.0));
        assert!(out.iter().all(|p| p.vertical_section == 0.0));
    }

    #[test]
    fn test_step_threads_state() {
        let params = WellParameters::default();
        let window = SignWindow::for_target(params.target_azimuth);
        let a = SurveyStation::new(0.0, 0.0, 0.0);
        let b = SurveyStation::new(100.0, 10.0, 0.0);
        let c = SurveyStation::new(200.0, 20.0, 0.0);

        let (s1, p1) = step(FoldState::seed(&a), &a, &b, &params, &window);
        let (s2, p2) = step(s1, &b, &c, &params, &window);

        assert_eq!(p1.tvd, s1.tvd);
        assert_eq!(p2.northing, s2.northing);
        assert!(p2.northing > p1.northing);
        assert!(p2.vertical_section > p1.vertical_section);
    }

    #[test]
    fn test_step_is_pure() {
        let params = WellParameters::new(10.0, 20.0, 45.0);
        let window = SignWindow::for_target(params.target_azimuth);
        let a = SurveyStation::new(1000.0, 12.0, 40.0);
        let b = SurveyStation::new(1095.0, 14.5, 43.0);
        let state = FoldState { tvd: 990.0, easting: 50.0, northing: 60.0, vertical_section: 70.0 };

        assert_eq!(step(state, &a, &b, &params, &window), step(state, &a, &b, &params, &window));
    }

    #[test]
    fn test_compute_rejects_before_output() {
        let err = compute(&stations(&[(0.0, 0.0, 0.0)]), &WellParameters::default()).unwrap_err();
        assert!(matches!(err, SurveyError::InvalidSurveyData(_)));

        let params = WellParameters::new(f64::NAN, 0.0, 0.0);
        assert!(compute(&stations(&[(0.0, 0.0, 0.0), (10.0, 0.0, 0.0)]), &params).is_err());
    }

    #[test]
    fn test_compute_many_preserves_order() {
        let shallow = SurveyStations::from_triples([(0.0, 0.0, 0.0), (100.0, 0.0, 0.0)]).unwrap();
        let deep = SurveyStations::from_triples([(0.0, 0.0, 0.0), (9000.0, 0.0, 0.0)]).unwrap();
        let wells = vec![
            (shallow, WellParameters::default()),
            (deep, WellParameters::default()),
        ];

        let out = compute_many(&wells).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].last().unwrap().tvd, 100.0);
        assert_eq!(out[1].last().unwrap().tvd, 9000.0);
    }

    #[test]
    fn test_compute_many_rejects_non_finite_target() {
        let good = SurveyStations::from_triples([(0.0, 0.0, 0.0), (1000.0, 30.0, 90.0)]).unwrap();
        let wells = vec![
            (good.clone(), WellParameters::new(0.0, 0.0, 90.0)),
            (good, WellParameters::new(0.0, 0.0, f64::NAN)),
        ];

        let err = compute_many(&wells).unwrap_err();
        assert_eq!(err.cause(), &InvalidCause::NonFiniteParameter("target_azimuth"));
    }
}
