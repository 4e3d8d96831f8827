//! Well Configuration Module
//!
//! Per-well inputs loaded from TOML: surface location, target azimuth, KB
//! elevation, survey file layout, section-view margins and output format.
//!
//! ## Loading Order
//!
//! 1. `WELLPATH_CONFIG` environment variable (path to TOML file)
//! 2. `well_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! Configuration is passed explicitly to whoever needs it; there is no
//! process-wide config instance.

mod well_config;
pub mod defaults;
pub mod validation;

pub use well_config::*;
