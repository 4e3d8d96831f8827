//! Config validation
//!
//! - Unknown keys: the raw document is walked as a `toml::Table` before serde
//!   sees it. Anything not in `KNOWN_KEYS` becomes a warning, with the nearest
//!   known key offered when it is within `MAX_SUGGESTION_DISTANCE` edits.
//! - Physical ranges: values serde accepted but a survey cannot use.

use super::defaults;
use crate::survey::FULL_CIRCLE_DEG;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<&'static str>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suggestion {
            Some(s) => write!(f, "{} (did you mean '{s}'?)", self.message),
            None => f.write_str(&self.message),
        }
    }
}

// ============================================================================
// Unknown Keys
// ============================================================================

/// Every dotted key path `WellConfig` understands, tables included.
///
/// Kept in step with the structs in well_config.rs by hand.
pub const KNOWN_KEYS: &[&str] = &[
    "well",
    "well.name",
    "well.field",
    "well.surface_x",
    "well.surface_y",
    "well.target_azimuth_deg",
    "well.kb_elevation",
    "survey",
    "survey.path",
    "survey.has_header",
    "survey.delimiter",
    "section_view",
    "section_view.tvd_pad_above",
    "section_view.tvd_pad_below",
    "section_view.vs_pad",
    "output",
    "output.format",
    "output.path",
];

/// Largest edit distance still worth suggesting.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Dotted paths of every key in a document, parents before children.
pub fn dotted_keys(table: &toml::Table) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending: Vec<(String, &toml::Table)> = vec![(String::new(), table)];

    while let Some((prefix, table)) = pending.pop() {
        for (key, value) in table {
            let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
            if let toml::Value::Table(child) = value {
                pending.push((path.clone(), child));
            }
            out.push(path);
        }
    }
    out
}

/// Edit distance over chars, single rolling row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + usize::from(ca != cb));
            diag = above;
        }
    }
    row[b.len()]
}

/// Nearest known key to `unknown`; ties go to the alphabetically first key.
pub fn closest_known_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|&k| (edit_distance(unknown, k), k))
        .filter(|&(d, _)| d <= MAX_SUGGESTION_DISTANCE)
        .min()
        .map(|(_, k)| k)
}

/// Warnings for keys `WellConfig` would silently ignore.
///
/// Unparsable documents yield nothing here; serde reports them afterwards.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(table) = raw_toml.parse::<toml::Table>() else {
        return Vec::new();
    };

    dotted_keys(&table)
        .into_iter()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|key| ValidationWarning {
            message: format!("Unknown config key '{key}'"),
            suggestion: closest_known_key(&key),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed WellConfig.
///
/// Returns (errors, warnings): errors are impossible values that must
/// prevent a run; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(
    config: &super::WellConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let w = &config.well;

    // Same bearing rule the engine applies to its parameters
    let tgt = w.target_azimuth_deg;
    if !tgt.is_finite() || !(0.0..FULL_CIRCLE_DEG).contains(&tgt) {
        errors.push(format!(
            "well.target_azimuth_deg = {tgt} is outside compass range [0, 360)"
        ));
    }

    for (name, value) in [("well.surface_x", w.surface_x), ("well.surface_y", w.surface_y)] {
        if !value.is_finite() {
            errors.push(format!("{name} = {value} must be a finite number"));
        }
    }

    if let Some(kb) = w.kb_elevation {
        if !kb.is_finite() {
            errors.push(format!("well.kb_elevation = {kb} must be a finite number"));
        } else {
            let (lo, hi) = defaults::KB_ELEVATION_TYPICAL_RANGE;
            if kb < lo || kb > hi {
                warnings.push(ValidationWarning {
                    field: "well.kb_elevation".to_string(),
                    message: format!(
                        "kb_elevation = {kb:.1} is outside typical range ({lo:.0} to {hi:.0})"
                    ),
                    suggestion: None,
                });
            }
        }
    }

    // Delimiter must be a single character
    if config.survey.delimiter.chars().count() != 1 {
        errors.push(format!(
            "survey.delimiter = {:?} must be exactly one character",
            config.survey.delimiter
        ));
    }

    // Section margins: negative padding would cut into the data
    let sv = &config.section_view;
    for (name, value) in [
        ("section_view.tvd_pad_above", sv.tvd_pad_above),
        ("section_view.tvd_pad_below", sv.tvd_pad_below),
        ("section_view.vs_pad", sv.vs_pad),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!("{name} = {value} must be a finite, non-negative number"));
        }
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
