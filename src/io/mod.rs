//! Datei-Ein-/Ausgabe für die Binary: Wegpunkt-Dateien lesen, Rail-Linien schreiben.

pub mod reader;
pub mod writer;

pub use reader::{load_waypoint_file, parse_waypoint_file, WaypointFile};
pub use writer::{save_rail_line, write_rail_line};
