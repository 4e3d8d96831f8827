//! Trajectory export
//!
//! Writes a computed trajectory as CSV or pretty JSON, one record per survey
//! station. Subsea TVD is included only when a KB elevation is known.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Trajectory;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// One exported record.
#[derive(Debug, Clone, Serialize)]
struct ExportRow {
    measured_depth: f64,
    tvd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    subsea_tvd: Option<f64>,
    easting: f64,
    northing: f64,
    x: f64,
    y: f64,
    dogleg_severity: f64,
    ratio_factor: f64,
    closure_distance: f64,
    closure_direction: f64,
    vertical_section: f64,
}

fn rows(trajectory: &Trajectory, kb_elevation: Option<f64>) -> Vec<ExportRow> {
    let subsea = kb_elevation.map(|kb| trajectory.subsea_tvd(kb));
    trajectory
        .iter()
        .enumerate()
        .map(|(i, p)| ExportRow {
            measured_depth: p.measured_depth,
            tvd: p.tvd,
            subsea_tvd: subsea.as_ref().map(|s| s[i]),
            easting: p.easting,
            northing: p.northing,
            x: p.x,
            y: p.y,
            dogleg_severity: p.dogleg_severity,
            ratio_factor: p.ratio_factor,
            closure_distance: p.closure_distance,
            closure_direction: p.closure_direction.value(),
            vertical_section: p.vertical_section,
        })
        .collect()
}

/// Write the trajectory as CSV with a header row.
pub fn write_csv<W: Write>(
    trajectory: &Trajectory,
    kb_elevation: Option<f64>,
    mut out: W,
) -> Result<(), ExportError> {
    let mut header = vec!["md", "tvd"];
    if kb_elevation.is_some() {
        header.push("tvdss");
    }
    header.extend([
        "easting", "northing", "x", "y", "dls", "rf", "closure_dist", "closure_dir", "vs",
    ]);
    writeln!(out, "{}", header.join(","))?;

    for r in rows(trajectory, kb_elevation) {
        write!(out, "{:.2},{:.2}", r.measured_depth, r.tvd)?;
        if let Some(tvdss) = r.subsea_tvd {
            write!(out, ",{tvdss:.2}")?;
        }
        writeln!(
            out,
            ",{:.2},{:.2},{:.2},{:.2},{:.2},{:.6},{:.2},{:.2},{:.2}",
            r.easting,
            r.northing,
            r.x,
            r.y,
            r.dogleg_severity,
            r.ratio_factor,
            r.closure_distance,
            r.closure_direction,
            r.vertical_section
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Write the trajectory as a pretty-printed JSON array.
pub fn write_json<W: Write>(
    trajectory: &Trajectory,
    kb_elevation: Option<f64>,
    mut out: W,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, &rows(trajectory, kb_elevation))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write in the requested format.
pub fn write<W: Write>(
    trajectory: &Trajectory,
    format: OutputFormat,
    kb_elevation: Option<f64>,
    out: W,
) -> Result<(), ExportError> {
    match format {
        OutputFormat::Csv => write_csv(trajectory, kb_elevation, out),
        OutputFormat::Json => write_json(trajectory, kb_elevation, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use crate::types::{SurveyStation, WellParameters};

    fn sample() -> Trajectory {
        let stations: Vec<SurveyStation> = [(0.0, 0.0, 0.0), (1000.0, 0.0, 0.0), (1100.0, 3.0, 90.0)]
            .into_iter()
            .map(SurveyStation::from)
            .collect();
        compute(&stations, &WellParameters::new(100.0, 200.0, 90.0)).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&sample(), None, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "md,tvd,easting,northing,x,y,dls,rf,closure_dist,closure_dir,vs"
        );
        assert!(lines[1].starts_with("0.00,0.00,0.00,0.00,100.00,200.00,0.00,1.000000"));
        assert!(lines[2].starts_with("1000.00,1000.00,"));
    }

    #[test]
    fn test_csv_includes_subsea_when_kb_known() {
        let mut buf = Vec::new();
        write_csv(&sample(), Some(2709.5), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("md,tvd,tvdss,"));
        assert!(lines[2].starts_with("1000.00,1000.00,1709.50,"));
    }

    #[test]
    fn test_json_array() {
        let mut buf = Vec::new();
        write(&sample(), OutputFormat::Json, None, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let arr = value.as_array().unwrap();

        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1]["tvd"], 1000.0);
        assert!(arr[1].get("subsea_tvd").is_none());
        assert_eq!(arr[0]["x"], 100.0);
    }

    #[test]
    fn test_format_serde_lowercase() {
        let f: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, OutputFormat::Json);
    }
}
