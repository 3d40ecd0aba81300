//! Validierte, geordnete Wegpunkt-Folge als Eingabe des Resamplers.

use super::error::InvalidInputReason;
use super::walk::Segment;
use glam::Vec3;

/// Geordnete Wegpunkt-Positionen, geprüft auf Mindestanzahl, Endlichkeit
/// und Segmente mit Länge > 0.
///
/// Leiht die Positionen des Aufrufers nur; die Reihenfolge ist die Walk-Reihenfolge.
#[derive(Debug, Clone, Copy)]
pub struct WaypointPath<'a> {
    positions: &'a [Vec3],
}

impl<'a> WaypointPath<'a> {
    /// Prüft die Wegpunkte und kapselt sie für den Walk.
    pub fn new(positions: &'a [Vec3]) -> Result<Self, InvalidInputReason> {
        if positions.len() < 2 {
            return Err(InvalidInputReason::TooFewWaypoints {
                count: positions.len(),
            });
        }

        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(InvalidInputReason::NonFiniteWaypoint { index });
        }

        if let Some(index) = positions
            .windows(2)
            .position(|w| w[0].distance_squared(w[1]) == 0.0)
        {
            return Err(InvalidInputReason::CoincidentWaypoints { index });
        }

        Ok(Self { positions })
    }

    /// Anzahl der Wegpunkte (immer >= 2).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Immer false, da die Validierung mindestens zwei Wegpunkte verlangt.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Anzahl der Segmente (`len() - 1`).
    pub fn segment_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Segment `index` (Wegpunkt `index` → `index + 1`).
    ///
    /// Der Aufrufer garantiert `index < segment_count()`.
    pub fn segment(&self, index: usize) -> Segment {
        Segment::new(self.positions[index], self.positions[index + 1])
    }

    /// true, wenn nach Segment `index` noch ein weiteres folgt.
    pub fn has_segment_after(&self, index: usize) -> bool {
        index + 1 < self.segment_count()
    }

    /// Summe aller Segmentlängen.
    pub fn total_length(&self) -> f32 {
        crate::shared::polyline::polyline_length(self.positions)
    }
}
