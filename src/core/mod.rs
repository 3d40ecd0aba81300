//! Core-Domänentypen: Wegpunkte, Walk, Resampler, Rail-Linien und Marker.

pub mod error;
pub mod marker;
pub mod rail_line;
/// Bogenlängen-Resampler
///
/// Verteilt Samples in fester Schrittweite entlang einer Wegpunkt-Linie:
/// - PathResampler: Walk über alle Segmente mit Heading-Blend
/// - ResampledPath: Samples plus Start-Heading
/// - derive_directions: Vorwärtsrichtung je Sample
pub mod resampler;
pub mod walk;
pub mod waypoints;

pub use error::{InvalidInputReason, ResampleError, MAX_EXPECTED_SAMPLES};
pub use marker::{look_rotation, MarkerStyle, RailMarker};
pub use rail_line::RailLine;
pub use resampler::{derive_directions, resample, PathResampler, ResampledPath};
pub use walk::{BlendMode, Segment, WalkState};
pub use waypoints::WaypointPath;
