//! Wertetypen des Bogenlängen-Walks: Segment und Walk-Zustand.

use super::waypoints::WaypointPath;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gerades Teilstück zwischen zwei aufeinanderfolgenden Wegpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Startposition (Wegpunkt i)
    pub start: Vec3,
    /// Endposition (Wegpunkt i + 1)
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Vollständiger Vektor `end - start`.
    pub fn vector(&self) -> Vec3 {
        self.end - self.start
    }

    /// Volle Segmentlänge.
    pub fn length(&self) -> f32 {
        self.vector().length()
    }

    /// Einheitsrichtung des Segments.
    pub fn direction(&self) -> Vec3 {
        self.vector().normalize_or_zero()
    }
}

/// Wie der Blend-Faktor `t` beim Heading-Übergang behandelt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `t` wird unverändert verwendet (kann < 0 oder > 1 werden)
    #[default]
    Unclamped,
    /// `t` wird auf `[0, 1]` begrenzt, das Heading bleibt eine echte Interpolation
    Clamped,
}

impl BlendMode {
    /// Blend-Faktor für die Restdistanz `remaining` im Segment der Länge `segment_length`.
    ///
    /// `t = 1 - (remaining - step) / segment_length`
    pub fn factor(self, remaining: f32, step_size: f32, segment_length: f32) -> f32 {
        let t = 1.0 - (remaining - step_size) / segment_length;
        match self {
            Self::Unclamped => t,
            Self::Clamped => t.clamp(0.0, 1.0),
        }
    }
}

/// Transienter Zustand des Walks.
///
/// Wird beim Start aus der Wegpunkt-Folge erzeugt und pro Sample bzw.
/// Segmentwechsel fortgeschrieben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkState {
    /// Index des aktuellen Segments
    pub segment_index: usize,
    /// Aktuelle Position (ggf. mitten im Segment oder leicht neben der Linie)
    pub position: Vec3,
    /// Aktuelles Heading (Einheitsvektor)
    pub heading: Vec3,
}

impl WalkState {
    /// Startzustand: erster Wegpunkt, Heading entlang des ersten Segments.
    pub fn start(path: &WaypointPath<'_>) -> Self {
        let segment = path.segment(0);
        Self {
            segment_index: 0,
            position: segment.start,
            heading: segment.direction(),
        }
    }

    /// Aktuelles Segment.
    pub fn segment(&self, path: &WaypointPath<'_>) -> Segment {
        path.segment(self.segment_index)
    }

    /// Vektor von der aktuellen Position zum Ende des aktuellen Segments.
    pub fn remaining(&self, path: &WaypointPath<'_>) -> Vec3 {
        self.segment(path).end - self.position
    }

    /// Wechselt auf das nächste Segment und setzt die Position auf dessen Start.
    ///
    /// Gibt false zurück, wenn kein weiteres Segment existiert.
    pub fn advance_segment(&mut self, path: &WaypointPath<'_>) -> bool {
        if !path.has_segment_after(self.segment_index) {
            return false;
        }
        self.segment_index += 1;
        self.position = path.segment(self.segment_index).start;
        true
    }

    /// Mischt das Heading Richtung `target` und geht einen Schritt weiter.
    ///
    /// Degeneriert die Mischung zum Nullvektor (genau gegenläufige Headings),
    /// wird direkt `target` übernommen.
    pub fn step(&mut self, target: Vec3, t: f32, step_size: f32) -> Vec3 {
        self.heading = self.heading.lerp(target, t).try_normalize().unwrap_or_else(|| {
            log::warn!(
                "Heading-Blend degeneriert in Segment {}, verwende Zielrichtung",
                self.segment_index
            );
            target
        });
        self.position += self.heading * step_size;
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_factor_reaches_one_at_step_distance() {
        let t = BlendMode::Unclamped.factor(0.5, 0.5, 1.0);
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unclamped_factor_goes_negative_on_short_segments() {
        // Restdistanz weit größer als Segment + Schritt → t < 0
        let t = BlendMode::Unclamped.factor(5.0, 0.1, 1.0);
        assert!(t < 0.0);
        let clamped = BlendMode::Clamped.factor(5.0, 0.1, 1.0);
        assert_eq!(clamped, 0.0);
    }

    #[test]
    fn test_clamped_factor_keeps_heading_inside_blend() {
        // Position hinter dem Segmentstart, Heading quer zum Ziel:
        // Restdistanz 2 > Segment 1 + Schritt 0.1, also t ≈ -0.9
        let points = [Vec3::ZERO, Vec3::X];
        let path = WaypointPath::new(&points).unwrap();
        let mut behind = WalkState::start(&path);
        behind.position = Vec3::new(-1.0, 0.0, 0.0);
        behind.heading = Vec3::Y;

        let diff = behind.remaining(&path);
        let remaining = diff.length();
        let segment_length = behind.segment(&path).length();
        let t_free = BlendMode::Unclamped.factor(remaining, 0.1, segment_length);
        let t_clamped = BlendMode::Clamped.factor(remaining, 0.1, segment_length);
        assert!((t_free + 0.9).abs() < 1e-5);
        assert_eq!(t_clamped, 0.0);

        let mut free = behind;
        free.step(diff / remaining, t_free, 0.1);
        let mut clamped = behind;
        clamped.step(diff / remaining, t_clamped, 0.1);

        // Ungeklemmt extrapoliert das Heading vom Ziel weg
        assert!(free.heading.x < 0.0, "Heading {:?}", free.heading);
        assert!(free.heading.dot(Vec3::X) < 0.0);
        // Geklemmt bleibt es zwischen altem Heading und Ziel
        assert_eq!(clamped.heading, Vec3::Y);
        assert_eq!(clamped.position, Vec3::new(-1.0, 0.1, 0.0));
        assert_ne!(free.heading, clamped.heading);
    }

    #[test]
    fn test_advance_segment_snaps_to_segment_start() {
        let points = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        let path = WaypointPath::new(&points).unwrap();
        let mut state = WalkState::start(&path);
        state.position = Vec3::new(0.95, 0.0, 0.0);

        assert!(state.advance_segment(&path));
        assert_eq!(state.segment_index, 1);
        assert_eq!(state.position, Vec3::X);
        assert!(!state.advance_segment(&path));
    }

    #[test]
    fn test_opposite_heading_with_half_blend_falls_back_to_target() {
        let points = [Vec3::ZERO, Vec3::X];
        let path = WaypointPath::new(&points).unwrap();
        let mut state = WalkState::start(&path);

        let pos = state.step(Vec3::NEG_X, 0.5, 0.25);

        assert_eq!(state.heading, Vec3::NEG_X);
        assert_eq!(pos, Vec3::new(-0.25, 0.0, 0.0));
    }
}
