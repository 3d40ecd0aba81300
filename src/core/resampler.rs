//! Bogenlängen-Walk: verteilt Samples in fester Schrittweite entlang einer
//! Wegpunkt-Linie und glättet das Heading an Segmentübergängen.
//!
//! Ablauf pro Sample:
//! 1. Restvektor zum Ende des aktuellen Segments bestimmen.
//! 2. Ist der Rest kürzer als ein Schritt, auf das nächste Segment wechseln
//!    (Position springt auf dessen Start) oder den Walk beenden.
//! 3. Heading Richtung Segmentende mischen, Gewicht `t` nach [`BlendMode`].
//! 4. Einen Schritt entlang des neuen Headings gehen und das Sample ausgeben.
//!
//! Der Rest < Schrittweite am Linienende wird verworfen.

use super::error::{InvalidInputReason, ResampleError, MAX_EXPECTED_SAMPLES};
use super::walk::{BlendMode, WalkState};
use super::waypoints::WaypointPath;
use crate::shared::options::DEFAULT_STEP_SIZE;
use glam::Vec3;

/// Faktor auf die erwartete Sample-Anzahl, ab dem der Walk als divergiert gilt.
const WALK_BUDGET_FACTOR: usize = 4;
/// Fester Zuschlag auf das Walk-Budget.
const WALK_BUDGET_SLACK: usize = 16;

/// Ergebnis eines Resample-Laufs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledPath {
    /// Samples in Walk-Reihenfolge; das erste ist immer der erste Wegpunkt
    pub samples: Vec<Vec3>,
    /// Heading beim Start (Richtung des ersten Segments)
    pub initial_heading: Vec3,
}

impl ResampledPath {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Vorwärtsrichtung je Sample, siehe [`derive_directions`].
    ///
    /// Bei nur einem Sample wird das Start-Heading verwendet.
    pub fn directions(&self) -> Vec<Vec3> {
        if self.samples.len() == 1 {
            return vec![self.initial_heading];
        }
        derive_directions(&self.samples)
    }
}

/// Verteilt Samples in fester Schrittweite entlang einer Wegpunkt-Linie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathResampler {
    step_size: f32,
    blend_mode: BlendMode,
}

impl Default for PathResampler {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            blend_mode: BlendMode::default(),
        }
    }
}

impl PathResampler {
    /// Erstellt einen Resampler mit ungeklemmtem Blend.
    pub fn new(step_size: f32) -> Self {
        Self {
            step_size,
            blend_mode: BlendMode::Unclamped,
        }
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Führt den Walk über `waypoints` aus.
    ///
    /// Schlägt mit [`ResampleError::InvalidInput`] fehl bei weniger als zwei
    /// Wegpunkten, nicht-positiver Schrittweite, nicht-endlichen Positionen,
    /// aufeinanderliegenden Nachbarn oder mehr als [`MAX_EXPECTED_SAMPLES`]
    /// Schritten. Es gibt keine Teil-Ausgabe.
    ///
    /// Der Segmentwechsel prüft `Rest < Schrittweite` ohne Toleranz. Geht die
    /// Länge rechnerisch genau auf, entscheidet die f32-Rundung: Auf `[0, 1]`
    /// mit Schritt 0.1 liegt das zehnte Sample bei 0.9000001, der Rest
    /// 0.0999999 ist kürzer als ein Schritt und die Linie endet dort mit
    /// 10 Samples statt bei 1.0.
    pub fn resample(&self, waypoints: &[Vec3]) -> Result<ResampledPath, ResampleError> {
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(InvalidInputReason::NonPositiveStep {
                step_size: self.step_size,
            }
            .into());
        }
        let path = WaypointPath::new(waypoints)?;

        let total_length = path.total_length();
        let expected = total_length / self.step_size;
        // NaN/Inf fallen ebenfalls durch den Vergleich
        if !(expected <= MAX_EXPECTED_SAMPLES) {
            return Err(InvalidInputReason::TooManySamples { expected }.into());
        }
        let budget = walk_budget(total_length, self.step_size, path.len());

        let mut state = WalkState::start(&path);
        let initial_heading = state.heading;
        let mut samples = Vec::with_capacity((expected as usize + 2).min(budget));
        samples.push(state.position);

        'walk: loop {
            let mut diff = state.remaining(&path);
            while diff.length() < self.step_size {
                if !state.advance_segment(&path) {
                    break 'walk;
                }
                diff = state.remaining(&path);
            }

            let remaining = diff.length();
            let t = self.blend_mode.factor(
                remaining,
                self.step_size,
                state.segment(&path).length(),
            );
            samples.push(state.step(diff / remaining, t, self.step_size));

            if samples.len() > budget {
                log::warn!(
                    "Walk abgebrochen nach {} Samples (Budget {}), Segment {} von {}",
                    samples.len(),
                    budget,
                    state.segment_index,
                    path.segment_count()
                );
                return Err(ResampleError::Diverged {
                    emitted: samples.len(),
                });
            }
        }

        log::debug!(
            "Resample: {} Wegpunkte, Länge {:.3} → {} Samples (Schritt {}, {:?})",
            path.len(),
            total_length,
            samples.len(),
            self.step_size,
            self.blend_mode
        );

        Ok(ResampledPath {
            samples,
            initial_heading,
        })
    }
}

/// Resampled `waypoints` mit Schrittweite `step_size` und ungeklemmtem Blend.
pub fn resample(waypoints: &[Vec3], step_size: f32) -> Result<ResampledPath, ResampleError> {
    PathResampler::new(step_size).resample(waypoints)
}

/// Vorwärtsrichtung je Sample: Differenz zum Nachfolger, beim letzten Sample
/// die Differenz zum Vorgänger.
///
/// Nicht normalisiert. Leere Eingabe liefert eine leere Liste, ein einzelnes
/// Sample hat keine Richtung und liefert `Vec3::ZERO`.
pub fn derive_directions(samples: &[Vec3]) -> Vec<Vec3> {
    match samples.len() {
        0 => Vec::new(),
        1 => vec![Vec3::ZERO],
        n => (0..n)
            .map(|i| {
                if i + 1 < n {
                    samples[i + 1] - samples[i]
                } else {
                    samples[i] - samples[i - 1]
                }
            })
            .collect(),
    }
}

/// Maximale Sample-Anzahl, bevor der Walk als divergiert gilt.
///
/// Sättigt bei `usize::MAX` statt überzulaufen.
fn walk_budget(total_length: f32, step_size: f32, waypoint_count: usize) -> usize {
    let expected = (total_length / step_size).ceil() as usize;
    WALK_BUDGET_FACTOR
        .saturating_mul(expected.saturating_add(waypoint_count))
        .saturating_add(WALK_BUDGET_SLACK)
}
