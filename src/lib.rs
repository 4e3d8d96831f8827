//! wellpath: minimum-curvature wellbore trajectory engine
//!
//! Turns an ordered list of directional survey stations (measured depth,
//! inclination, azimuth) into a positioned trajectory: TVD, easting and
//! northing offsets, grid coordinates, dogleg severity, ratio factor,
//! closure distance/direction and vertical section.
//!
//! ## Architecture
//!
//! - **Survey**: validated station store plus the CSV reader
//! - **Engine**: pure per-wellbore fold over consecutive station pairs
//! - **Presentation**: plan/section view traits and axis bounds
//! - **Export**: CSV / JSON writers
//! - **Config**: per-well TOML configuration
//!
//! ## Usage
//!
//! ```
//! use wellpath::{compute, SurveyStation, WellParameters};
//!
//! let stations = [
//!     SurveyStation::new(0.0, 0.0, 0.0),
//!     SurveyStation::new(1000.0, 0.0, 0.0),
//! ];
//! let trajectory = compute(&stations, &WellParameters::new(0.0, 0.0, 0.0)).unwrap();
//! assert_eq!(trajectory.len(), 2);
//! assert_eq!(trajectory.points()[1].tvd, 1000.0);
//! ```

pub mod config;
pub mod engine;
pub mod export;
pub mod presentation;
pub mod survey;
pub mod types;

// Re-export well configuration
pub use config::WellConfig;

// Re-export the engine entry points
pub use engine::{compute, compute_many};

// Re-export survey store and errors
pub use survey::csv_source::{load_survey_csv, parse_survey_csv, SurveyCsvOptions, SurveyLoadError};
pub use survey::{InvalidCause, SurveyError, SurveyStations};

// Re-export commonly used types
pub use types::{
    Degrees, PlanPoint, Radians, SectionPoint, SurveyStation, Trajectory, TrajectoryPoint,
    WellParameters,
};
