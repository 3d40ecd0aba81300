//! Metro Rail Resampler Library.
//! Verteilt Samples in fester Bogenlänge entlang autorisierter Wegpunkt-Linien.

pub mod core;
pub mod io;
pub mod shared;

pub use crate::core::{
    derive_directions, resample, BlendMode, InvalidInputReason, MarkerStyle, PathResampler,
    RailLine, RailMarker, ResampleError, ResampledPath,
};
pub use crate::io::{load_waypoint_file, save_rail_line, WaypointFile};
pub use crate::shared::{polyline_length, ResamplerOptions, DEFAULT_STEP_SIZE};
