//! Rail-Marker: Transform je Sample zur Platzierung von Schwellen/Markern.
//!
//! Nur Daten; Mesh, Material und Rendering liegen beim Host.

use crate::shared::options::{MARKER_COLOR, MARKER_SCALE};
use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Aussehen der Rail-Marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Farbe (RGBA)
    pub color: [f32; 4],
    /// Nicht-uniforme Skalierung (Breite, Höhe, Tiefe)
    pub scale: [f32; 3],
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: MARKER_COLOR,
            scale: MARKER_SCALE,
        }
    }
}

/// Transform eines einzelnen Rail-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailMarker {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl RailMarker {
    /// Marker an `position`, lokale +Z-Achse entlang `direction`.
    pub fn new(position: Vec3, direction: Vec3, style: &MarkerStyle) -> Self {
        Self {
            translation: position,
            rotation: look_rotation(direction),
            scale: Vec3::from_array(style.scale),
        }
    }

    /// Vorwärtsachse des Markers in Weltkoordinaten.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Rotation, die +Z auf `direction` und +Y möglichst nach oben abbildet.
///
/// Parallel zu +Y wird +Z als Up-Hinweis verwendet; Nullrichtung → Identität.
pub fn look_rotation(direction: Vec3) -> Quat {
    let Some(forward) = direction.try_normalize() else {
        return Quat::IDENTITY;
    };

    let up_hint = if forward.cross(Vec3::Y).length_squared() < 1e-12 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = up_hint.cross(forward).normalize();
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize()
}
