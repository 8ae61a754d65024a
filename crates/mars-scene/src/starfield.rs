//! Background starfield: deterministic points on a large sphere.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One star point.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Brightness in [0.0, 1.0] where 1.0 is the brightest visible star.
    pub brightness: f32,
    pub color: [f32; 3],
    /// Point size in pixels.
    pub size: f32,
}

/// Scatter `count` stars uniformly over a sphere of `radius`.
///
/// Deterministic for a given seed.
pub fn generate_starfield(seed: u64, count: u32, radius: f32) -> Vec<Star> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
            let direction = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());

            // Power-law: many dim, few bright.
            let brightness = rng.random::<f32>().powf(4.0);
            let warmth = rng.random::<f32>();
            let color = [
                0.85 + 0.15 * warmth,
                0.85 + 0.1 * (1.0 - (warmth - 0.5).abs() * 2.0),
                1.0 - 0.2 * warmth,
            ];

            Star {
                position: direction * radius,
                brightness: 0.2 + 0.8 * brightness,
                color,
                size: 1.0 + brightness * 2.0,
            }
        })
        .collect()
}
