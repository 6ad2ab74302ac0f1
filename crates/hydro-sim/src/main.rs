//! Hydro-Sim: hydrostatic force on a submerged vertical plate.
//!
//! Opens the interactive diagram, or prints the readouts with `--report`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use hydro_core::constants::{DEFAULT_STEPS, FORCE_REFERENCE, MAX_STEPS, STANDARD_GRAVITY};
use hydro_core::{compute, ForceScale, PlateParams, Readouts};
use hydro_render::AppConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// How the force arrow's length is normalized on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ArrowScale {
    /// Full length at `--force-reference` newtons.
    Fixed,
    /// Relative to ρ·g·h·A for the current plate.
    Geometry,
}

#[derive(Parser, Debug)]
#[command(
    name = "hydro-sim",
    version,
    about = "Hydrostatic pressure on a vertical plate",
    allow_negative_numbers = true
)]
struct Cli {
    /// Fluid density (kg/m³).
    #[arg(long, env = "HYDRO_RHO", default_value_t = 1000.0)]
    rho: f64,

    /// Gravitational acceleration (m/s²).
    #[arg(short, long, env = "HYDRO_GRAVITY", default_value_t = STANDARD_GRAVITY)]
    gravity: f64,

    /// Plate height (m); the top edge sits at the free surface.
    #[arg(long, env = "HYDRO_HEIGHT", default_value_t = 2.0)]
    height: f64,

    /// Plate area (m²).
    #[arg(short, long, env = "HYDRO_AREA", default_value_t = 1.0)]
    area: f64,

    /// Number of pressure samples along the plate.
    #[arg(short, long, env = "HYDRO_STEPS", default_value_t = DEFAULT_STEPS,
          value_parser = clap::value_parser!(u32).range(1..=MAX_STEPS as i64))]
    steps: u32,

    /// Force arrow normalization.
    #[arg(long, env = "HYDRO_FORCE_SCALE", value_enum, default_value_t = ArrowScale::Fixed)]
    force_scale: ArrowScale,

    /// Reference force for `--force-scale fixed` (N).
    #[arg(long, env = "HYDRO_FORCE_REFERENCE", default_value_t = FORCE_REFERENCE)]
    force_reference: f64,

    /// Pixel-density factor for the diagram.
    #[arg(long, env = "HYDRO_SCALE", default_value_t = 1.0)]
    scale: f32,

    /// Directory PNG exports are written to.
    #[arg(long, env = "HYDRO_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Print the readouts and exit instead of opening a window.
    #[arg(long)]
    report: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn params(&self) -> PlateParams {
        PlateParams {
            rho: self.rho,
            g: self.gravity,
            height: self.height,
            area: self.area,
            steps: self.steps,
        }
    }

    fn config(&self) -> Result<AppConfig> {
        for (name, value) in [
            ("rho", self.rho),
            ("gravity", self.gravity),
            ("height", self.height),
            ("area", self.area),
            ("force-reference", self.force_reference),
        ] {
            if !value.is_finite() {
                bail!("--{name} must be a finite number, got {value}");
            }
        }
        if self.force_reference <= 0.0 {
            bail!("--force-reference must be positive");
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            bail!("--scale must be positive");
        }

        let force_scale = match self.force_scale {
            ArrowScale::Fixed => ForceScale::FixedReference {
                newtons: self.force_reference,
            },
            ArrowScale::Geometry => ForceScale::GeometryMaximum,
        };
        Ok(AppConfig {
            initial: self.params(),
            force_scale,
            scale: self.scale,
            export_dir: self.export_dir.clone(),
        })
    }
}

fn report(params: &PlateParams) -> String {
    let readouts = Readouts::new(params, &compute(params));
    format!(
        "{}\nBase pressure:      {}\nResultant force:    {}\nCenter of pressure: {}\n\n{}",
        readouts.summary,
        readouts.base_pressure,
        readouts.force,
        readouts.center_of_pressure,
        readouts.interpretation
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::ERROR
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    let config = cli.config()?;

    if cli.report {
        println!("{}", report(&config.initial));
        return Ok(());
    }

    tracing::info!(params = ?config.initial, "opening simulator window");
    hydro_render::run(config).map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
