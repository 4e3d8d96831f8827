//! Shared data structures for wellbore trajectory computation
//!
//! - `Degrees` / `Radians`: unit-tagged angles
//! - `SurveyStation`, `WellParameters`: engine inputs
//! - `TrajectoryPoint`, `Trajectory`: engine outputs
//! - `PlanPoint`, `SectionPoint`: projections handed to presentation layers

mod angle;
mod station;
mod trajectory;

pub use angle::*;
pub use station::*;
pub use trajectory::*;
