#![no_main]

use libfuzzer_sys::fuzz_target;
use metro_rail_resampler::io::parse_waypoint_file;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_waypoint_file(text);
    }
});
