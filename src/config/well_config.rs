//! Well Configuration - survey inputs and output preferences as TOML values
//!
//! Each struct implements `Default`, so an empty or partial file is always
//! usable; only the keys present in the file override the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use crate::export::OutputFormat;
use crate::presentation::SectionPadding;
use crate::survey::csv_source::SurveyCsvOptions;
use crate::types::WellParameters;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one wellbore.
///
/// Load with `WellConfig::load()` which searches:
/// 1. `$WELLPATH_CONFIG` env var
/// 2. `./well_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellConfig {
    /// Well identification, surface location and section reference
    #[serde(default)]
    pub well: WellInfo,

    /// Survey listing layout
    #[serde(default)]
    pub survey: SurveySourceConfig,

    /// Section-view margins handed to presentation layers
    #[serde(default)]
    pub section_view: SectionViewConfig,

    /// Export destination and format
    #[serde(default)]
    pub output: OutputConfig,
}

impl WellConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WELLPATH_CONFIG` environment variable
    /// 2. `./well_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), well = %config.well.name, "Loaded well config from WELLPATH_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WELLPATH_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLPATH_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./well_config.toml
        let local = PathBuf::from(defaults::LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(well = %config.well.name, "Loaded well config from ./well_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./well_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No well_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings and otherwise ignored.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Well config saved");
        Ok(())
    }

    /// Validate physical ranges; suspicious values are logged, impossible
    /// ones are returned as errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_physical_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Engine parameters for this well.
    #[must_use]
    pub const fn params(&self) -> WellParameters {
        WellParameters::new(
            self.well.surface_x,
            self.well.surface_y,
            self.well.target_azimuth_deg,
        )
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            Self::Serialize(e) => write!(f, "Config serialization error: {e}"),
            Self::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Well Info
// ============================================================================

/// Identification and geometry of the wellbore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellInfo {
    /// Well name / identifier
    #[serde(default = "default_well_name")]
    pub name: String,

    /// Field name
    #[serde(default)]
    pub field: String,

    /// Surface hole location, grid X
    #[serde(default)]
    pub surface_x: f64,

    /// Surface hole location, grid Y
    #[serde(default)]
    pub surface_y: f64,

    /// Azimuth of the vertical-section plane (degrees)
    #[serde(default)]
    pub target_azimuth_deg: f64,

    /// Kelly-bushing elevation above sea level; enables subsea TVD output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kb_elevation: Option<f64>,
}

fn default_well_name() -> String {
    "DEFAULT".to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: String::new(),
            surface_x: 0.0,
            surface_y: 0.0,
            target_azimuth_deg: 0.0,
            kb_elevation: None,
        }
    }
}

// ============================================================================
// Survey Source
// ============================================================================

/// Where and how to read the survey listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySourceConfig {
    /// Survey CSV path (may be overridden on the command line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// First non-comment line is a header
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Field separator; must be exactly one character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_has_header() -> bool { true }
fn default_delimiter() -> String { defaults::SURVEY_DELIMITER.to_string() }

impl SurveySourceConfig {
    /// Reader options; falls back to the default delimiter when unset.
    #[must_use]
    pub fn csv_options(&self) -> SurveyCsvOptions {
        SurveyCsvOptions {
            has_header: self.has_header,
            delimiter: self.delimiter.chars().next().unwrap_or(defaults::SURVEY_DELIMITER),
        }
    }
}

impl Default for SurveySourceConfig {
    fn default() -> Self {
        Self {
            path: None,
            has_header: default_has_header(),
            delimiter: default_delimiter(),
        }
    }
}

// ============================================================================
// Section View
// ============================================================================

/// Margins around the TVD vs vertical-section profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionViewConfig {
    /// Depth-axis margin above the deepest TVD
    #[serde(default = "default_tvd_pad_above")]
    pub tvd_pad_above: f64,

    /// Depth-axis margin below the deepest TVD
    #[serde(default = "default_tvd_pad_below")]
    pub tvd_pad_below: f64,

    /// Margin on both ends of the section axis
    #[serde(default = "default_vs_pad")]
    pub vs_pad: f64,
}

fn default_tvd_pad_above() -> f64 { defaults::SECTION_TVD_PAD_ABOVE }
fn default_tvd_pad_below() -> f64 { defaults::SECTION_TVD_PAD_BELOW }
fn default_vs_pad() -> f64 { defaults::SECTION_VS_PAD }

impl SectionViewConfig {
    #[must_use]
    pub const fn padding(&self) -> SectionPadding {
        SectionPadding {
            tvd_above: self.tvd_pad_above,
            tvd_below: self.tvd_pad_below,
            vs: self.vs_pad,
        }
    }
}

impl Default for SectionViewConfig {
    fn default() -> Self {
        Self {
            tvd_pad_above: default_tvd_pad_above(),
            tvd_pad_below: default_tvd_pad_below(),
            vs_pad: default_vs_pad(),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

/// Export destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// csv or json
    #[serde(default)]
    pub format: OutputFormat,

    /// Output file; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
