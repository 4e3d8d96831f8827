//! wellpath - minimum-curvature trajectory from a directional survey
//!
//! # Usage
//!
//! ```bash
//! # Compute from a survey listing, CSV to stdout
//! wellpath --survey data/sample_survey.csv --target-azimuth 345.44
//!
//! # Full per-well config, JSON to a file
//! wellpath --config well_config.toml --format json --output trajectory.json
//! ```
//!
//! # Environment Variables
//!
//! - `WELLPATH_CONFIG`: Path to the well config TOML (default: ./well_config.toml)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

use wellpath::config::WellConfig;
use wellpath::export::{self, OutputFormat};
use wellpath::presentation::{self, PlanBounds, PlanView, SectionBounds, SectionView};
use wellpath::survey::csv_source;
use wellpath::types::{PlanPoint, SectionPoint};

#[derive(Parser, Debug)]
#[command(name = "wellpath")]
#[command(about = "Minimum-curvature wellbore trajectory from survey stations")]
#[command(version)]
struct CliArgs {
    /// Survey CSV (depth, inclination, azimuth); overrides [survey].path
    #[arg(long, value_name = "CSV")]
    survey: Option<PathBuf>,

    /// Well config TOML; otherwise $WELLPATH_CONFIG or ./well_config.toml
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Vertical-section plane azimuth in degrees
    #[arg(long, value_name = "DEG")]
    target_azimuth: Option<f64>,

    /// Surface hole grid X
    #[arg(long)]
    surface_x: Option<f64>,

    /// Surface hole grid Y
    #[arg(long)]
    surface_y: Option<f64>,

    /// Kelly-bushing elevation; adds subsea TVD to the export
    #[arg(long)]
    kb: Option<f64>,

    /// Export format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (stdout when absent)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Survey file has no header row
    #[arg(long)]
    no_header: bool,
}

impl CliArgs {
    /// Command-line values win over the config file.
    fn apply(&self, config: &mut WellConfig) {
        if let Some(path) = &self.survey {
            config.survey.path = Some(path.clone());
        }
        if let Some(tgt) = self.target_azimuth {
            config.well.target_azimuth_deg = tgt;
        }
        if let Some(x) = self.surface_x {
            config.well.surface_x = x;
        }
        if let Some(y) = self.surface_y {
            config.well.surface_y = y;
        }
        if self.kb.is_some() {
            config.well.kb_elevation = self.kb;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(path) = &self.output {
            config.output.path = Some(path.clone());
        }
        if self.no_header {
            config.survey.has_header = false;
        }
    }
}

// ============================================================================
// Log-only views
// ============================================================================

/// Reports view extents through the log instead of drawing.
struct SummaryView;

impl PlanView for SummaryView {
    fn draw_path(&mut self, points: &[PlanPoint], bounds: &PlanBounds) {
        info!(
            points = points.len(),
            easting = %format!("{:.1}..{:.1}", bounds.easting_min, bounds.easting_max),
            northing = %format!("{:.1}..{:.1}", bounds.northing_min, bounds.northing_max),
            tvd = %format!("{:.1}..{:.1}", bounds.tvd_min, bounds.tvd_max),
            "Plan view extents"
        );
    }
}

impl SectionView for SummaryView {
    fn draw_section(&mut self, points: &[SectionPoint], bounds: &SectionBounds) {
        info!(
            points = points.len(),
            tvd = %format!("{:.1}..{:.1}", bounds.tvd_min, bounds.tvd_max),
            vs = %format!("{:.1}..{:.1}", bounds.vs_min, bounds.vs_max),
            "Section view axes"
        );
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the export
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => WellConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WellConfig::load(),
    };
    args.apply(&mut config);
    config.validate().context("invalid well configuration")?;

    info!(
        "Well: {} | Field: {} | Target azimuth: {:.2}°",
        config.well.name,
        if config.well.field.is_empty() { "unset" } else { &config.well.field },
        config.well.target_azimuth_deg
    );

    let survey_path = config
        .survey
        .path
        .clone()
        .context("no survey file given (use --survey or [survey].path)")?;
    let stations = csv_source::load_survey_csv(&survey_path, &config.survey.csv_options())
        .with_context(|| format!("reading survey {}", survey_path.display()))?;

    let params = config.params();
    let trajectory = stations
        .trajectory(&params)
        .context("invalid well parameters")?;

    if let Some(last) = trajectory.last() {
        info!(
            md = last.measured_depth,
            tvd = %format!("{:.2}", last.tvd),
            closure = %format!("{:.2} @ {:.2}°", last.closure_distance, last.closure_direction.value()),
            vs = %format!("{:.2}", last.vertical_section),
            max_dls = %format!("{:.2}", trajectory.max_dogleg_severity()),
            "Trajectory computed"
        );
    }

    presentation::render(
        &trajectory,
        &mut SummaryView,
        &mut SummaryView,
        &config.section_view.padding(),
    );

    let kb = config.well.kb_elevation;
    let format = config.output.format;
    match &config.output.path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            export::write(&trajectory, format, kb, BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), ?format, "Trajectory exported");
        }
        None => {
            let stdout = io::stdout();
            export::write(&trajectory, format, kb, stdout.lock()).context("writing to stdout")?;
        }
    }

    Ok(())
}
