//! Resampelte Rail-Linie mit Linien-ID, Samples und Richtungen.

use super::error::ResampleError;
use super::marker::{MarkerStyle, RailMarker};
use super::resampler::PathResampler;
use crate::shared::polyline::polyline_length;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Eine resampelte Linie.
///
/// `samples` und `directions` sind immer gleich lang.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailLine {
    /// Vom Autor vergebene Linien-ID
    pub line_id: u32,
    /// Samples in Fahrtrichtung
    pub samples: Vec<Vec3>,
    /// Vorwärtsrichtung je Sample (nicht normalisiert)
    pub directions: Vec<Vec3>,
}

impl RailLine {
    /// Resampled `waypoints` und leitet die Richtungen ab.
    pub fn build(
        line_id: u32,
        waypoints: &[Vec3],
        resampler: &PathResampler,
    ) -> Result<Self, ResampleError> {
        let path = resampler.resample(waypoints)?;
        let directions = path.directions();

        log::debug!(
            "Linie {}: {} Wegpunkte → {} Samples",
            line_id,
            waypoints.len(),
            path.samples.len()
        );

        Ok(Self {
            line_id,
            samples: path.samples,
            directions,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Länge der Sample-Polyline.
    pub fn length(&self) -> f32 {
        polyline_length(&self.samples)
    }

    /// Ein Marker je Sample, ausgerichtet an der jeweiligen Richtung.
    pub fn markers(&self, style: &MarkerStyle) -> Vec<RailMarker> {
        self.samples
            .iter()
            .zip(&self.directions)
            .map(|(&position, &direction)| RailMarker::new(position, direction, style))
            .collect()
    }
}
