//! Metro Rail Resampler (CLI).
//!
//! Liest eine Wegpunkt-Datei, verteilt Samples in fester Schrittweite und
//! schreibt Samples, Richtungen und Marker-Transforms als JSON.

use anyhow::Context;
use clap::Parser;
use metro_rail_resampler::{
    load_waypoint_file, save_rail_line, BlendMode, RailLine, ResamplerOptions,
};
use std::path::PathBuf;

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(name = "metro-rail-resample", version, about)]
struct Args {
    /// Wegpunkt-Datei (JSON)
    input: PathBuf,

    /// Ausgabe-Datei (Standard: <input>.rail.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Schrittweite, überschreibt die Optionen-Datei
    #[arg(long)]
    step_size: Option<f32>,

    /// Blend-Faktor auf [0, 1] begrenzen
    #[arg(long)]
    clamp_blend: bool,

    /// Optionen-Datei (Standard: neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Metro Rail Resampler v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(ResamplerOptions::config_path);
    let mut options = ResamplerOptions::load_from_file(&config_path);
    if let Some(step_size) = args.step_size {
        options.step_size = step_size;
    }
    if args.clamp_blend {
        options.blend_mode = BlendMode::Clamped;
    }

    let file = load_waypoint_file(&args.input)?;
    let line = RailLine::build(file.line_id, &file.waypoints, &options.resampler())
        .with_context(|| format!("Resample fehlgeschlagen: {}", args.input.display()))?;

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("rail.json"));
    save_rail_line(&line, &options.marker, &output)?;

    log::info!(
        "Linie {}: {} Wegpunkte → {} Samples, Länge {:.2}",
        line.line_id,
        file.waypoints.len(),
        line.sample_count(),
        line.length()
    );
    Ok(())
}
