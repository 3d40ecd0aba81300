//! Zentrale Konfiguration für den Rail-Resampler.
//!
//! `ResamplerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{BlendMode, MarkerStyle, PathResampler};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Walk ────────────────────────────────────────────────────────────

/// Standard-Schrittweite zwischen zwei Samples (Welteinheiten).
pub const DEFAULT_STEP_SIZE: f32 = 0.1;

// ── Marker ──────────────────────────────────────────────────────────

/// Standard-Farbe der Rail-Marker (RGBA: Weiß).
pub const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Standard-Skalierung der Rail-Marker (Breite, Höhe, Tiefe).
pub const MARKER_SCALE: [f32; 3] = [0.1, 1.0, 0.025];

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "metro_rail_resampler.toml";

/// Alle zur Laufzeit änderbaren Resampler-Optionen.
/// Wird als `metro_rail_resampler.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResamplerOptions {
    /// Bogenlänge zwischen zwei Samples
    pub step_size: f32,
    /// Behandlung des Blend-Faktors am Segmentübergang
    #[serde(default)]
    pub blend_mode: BlendMode,
    /// Aussehen der Rail-Marker
    #[serde(default)]
    pub marker: MarkerStyle,
}

impl Default for ResamplerOptions {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            blend_mode: BlendMode::default(),
            marker: MarkerStyle::default(),
        }
    }
}

impl ResamplerOptions {
    /// Liest und parst eine TOML-Datei, Fehler tragen den Pfad als Kontext.
    pub fn read_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))
    }

    /// Wie [`Self::read_from_file`], fällt aber bei jedem Fehler auf die
    /// Standardwerte zurück. Nur eine vorhandene, kaputte Datei wird gewarnt.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "Keine Optionen unter {} gefunden, Schrittweite {}",
                path.display(),
                DEFAULT_STEP_SIZE
            );
            return Self::default();
        }
        match Self::read_from_file(path) {
            Ok(options) => {
                log::info!(
                    "Optionen geladen aus {}: Schrittweite {}, Blend {:?}",
                    path.display(),
                    options.step_size,
                    options.blend_mode
                );
                options
            }
            Err(e) => {
                log::warn!("{:#}, verwende Standardwerte", e);
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content =
            toml::to_string_pretty(self).context("Optionen nicht als TOML darstellbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// `metro_rail_resampler.toml` im Verzeichnis der Binary, sonst im
    /// Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME)
    }

    /// Baut den Resampler aus Schrittweite und Blend-Modus.
    pub fn resampler(&self) -> PathResampler {
        PathResampler::new(self.step_size).with_blend_mode(self.blend_mode)
    }
}
