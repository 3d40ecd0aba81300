//! Parser für Wegpunkt-Dateien (JSON).

use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::Deserialize;

/// Inhalt einer Wegpunkt-Datei.
///
/// ```json
/// { "line_id": 3, "waypoints": [[0, 0, 0], [1, 0, 0], [1, 1, 0]] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WaypointFile {
    /// Linien-ID (optional, Standard 0)
    #[serde(default)]
    pub line_id: u32,
    /// Wegpunkte in Walk-Reihenfolge
    pub waypoints: Vec<Vec3>,
}

/// Parsed eine Wegpunkt-Datei aus einem JSON-String.
pub fn parse_waypoint_file(json: &str) -> Result<WaypointFile> {
    let file: WaypointFile =
        serde_json::from_str(json).context("Wegpunkt-Datei konnte nicht gelesen werden")?;

    if file.waypoints.is_empty() {
        bail!("Wegpunkt-Datei enthaelt keine Wegpunkte");
    }

    Ok(file)
}

/// Lädt eine Wegpunkt-Datei von der Festplatte.
pub fn load_waypoint_file(path: &std::path::Path) -> Result<WaypointFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    let file = parse_waypoint_file(&content)
        .with_context(|| format!("Ungueltige Wegpunkt-Datei: {}", path.display()))?;

    log::info!(
        "Linie {} mit {} Wegpunkten geladen aus: {}",
        file.line_id,
        file.waypoints.len(),
        path.display()
    );
    Ok(file)
}
