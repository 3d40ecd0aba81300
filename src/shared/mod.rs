//! Geteilte Typen und Hilfsfunktionen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Polyline-Geometrie, die von `core`, `io`
//! und der Binary gemeinsam genutzt werden.
pub mod options;
pub mod polyline;

pub use options::ResamplerOptions;
pub use options::{DEFAULT_STEP_SIZE, MARKER_COLOR, MARKER_SCALE};
pub use polyline::{arc_length_projection, polyline_length};
