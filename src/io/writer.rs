//! Writer für resampelte Rail-Linien (JSON).

use crate::core::{MarkerStyle, RailLine, RailMarker};
use anyhow::{Context, Result};
use glam::Vec3;
use serde::Serialize;

/// Ausgabe-Dokument einer Rail-Linie inklusive Marker-Transforms.
#[derive(Debug, Serialize)]
struct RailLineDocument<'a> {
    line_id: u32,
    samples: &'a [Vec3],
    directions: &'a [Vec3],
    marker_color: [f32; 4],
    markers: Vec<RailMarker>,
}

/// Serialisiert eine Rail-Linie samt Markern als JSON-String.
pub fn write_rail_line(line: &RailLine, style: &MarkerStyle) -> Result<String> {
    let document = RailLineDocument {
        line_id: line.line_id,
        samples: &line.samples,
        directions: &line.directions,
        marker_color: style.color,
        markers: line.markers(style),
    };
    serde_json::to_string_pretty(&document).context("Rail-Linie konnte nicht serialisiert werden")
}

/// Schreibt eine Rail-Linie als JSON-Datei.
pub fn save_rail_line(line: &RailLine, style: &MarkerStyle, path: &std::path::Path) -> Result<()> {
    let content = write_rail_line(line, style)?;
    std::fs::write(path, content)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
    log::info!(
        "Linie {} mit {} Samples gespeichert nach: {}",
        line.line_id,
        line.sample_count(),
        path.display()
    );
    Ok(())
}
