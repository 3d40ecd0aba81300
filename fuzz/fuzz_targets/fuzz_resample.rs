#![no_main]

use glam::Vec3;
use libfuzzer_sys::fuzz_target;
use metro_rail_resampler::{PathResampler, ResampleError};

fuzz_target!(|data: &[u8]| {
    let values: Vec<f32> = data
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    let Some((&step_size, coords)) = values.split_first() else {
        return;
    };
    let points: Vec<Vec3> = coords
        .chunks_exact(3)
        .take(64)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect();

    // Riesige Koordinaten bei winziger Schrittweite sprengen sonst den Speicher
    if !(step_size > 1e-3) || points.iter().any(|p| p.abs().max_element() > 1e4) {
        return;
    }

    match PathResampler::new(step_size).resample(&points) {
        Ok(path) => {
            assert_eq!(path.samples[0], points[0]);
            assert_eq!(path.directions().len(), path.len());
        }
        Err(ResampleError::InvalidInput(_)) | Err(ResampleError::Diverged { .. }) => {}
    }
});
