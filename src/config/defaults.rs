//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "WELLPATH_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "well_config.toml";

// ============================================================================
// Survey Input
// ============================================================================

/// Field separator for survey listings.
pub const SURVEY_DELIMITER: char = ',';

// ============================================================================
// Section View
// ============================================================================

/// Depth-axis margin above the deepest TVD.
pub const SECTION_TVD_PAD_ABOVE: f64 = 50.0;

/// Depth-axis margin below the deepest TVD.
pub const SECTION_TVD_PAD_BELOW: f64 = 40.0;

/// Margin on both ends of the vertical-section axis.
pub const SECTION_VS_PAD: f64 = 500.0;

// ============================================================================
// Plausibility
// ============================================================================

/// Kelly-bushing elevations outside this band are flagged as suspicious.
///
/// Covers offshore floaters (negative datum offsets) up to high-altitude land rigs.
pub const KB_ELEVATION_TYPICAL_RANGE: (f64, f64) = (-1_500.0, 16_000.0);
