//! Reine Polyline-Geometrie (Länge, Bogenlängen-Projektion).
//!
//! Layer-neutral: wird von `core` und den Tests gleichermaßen verwendet.

use glam::Vec3;

/// Länge einer Polyline (Summe der Segmentlängen).
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Bogenlänge des Polyline-Punkts, der `point` am nächsten liegt.
///
/// Bei gleich weit entfernten Kandidaten gewinnt das frühere Segment.
/// Leere oder einpunktige Polylines liefern 0.
pub fn arc_length_projection(points: &[Vec3], point: Vec3) -> f32 {
    let mut best_distance = f32::INFINITY;
    let mut best_arc = 0.0;
    let mut walked = 0.0;

    for w in points.windows(2) {
        let segment = w[1] - w[0];
        let length_sq = segment.length_squared();
        let length = length_sq.sqrt();

        let u = if length_sq > 0.0 {
            ((point - w[0]).dot(segment) / length_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let distance = point.distance(w[0] + segment * u);

        if distance < best_distance {
            best_distance = distance;
            best_arc = walked + u * length;
        }
        walked += length;
    }

    best_arc
}
