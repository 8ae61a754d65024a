//! Impact craters stamped as radial gradients.

use rand::Rng;

use crate::raster::{BlendMode, ColorStop, Gradient, RasterImage};

/// One crater in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crater {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Gradients used when stamping craters.
#[derive(Clone, Debug, PartialEq)]
pub struct CraterStyle {
    /// Albedo ramp: dark floor, bright ejecta rim, transparent falloff.
    pub albedo: Gradient,
    /// Height ramp, overlay-blended: below mid-gray lowers, above raises.
    pub bump: Gradient,
}

impl Default for CraterStyle {
    fn default() -> Self {
        Self {
            albedo: Gradient::new(vec![
                ColorStop::new(0.0, 40, 20, 12, 0.55),
                ColorStop::new(0.55, 70, 36, 22, 0.3),
                ColorStop::new(0.8, 230, 170, 120, 0.35),
                ColorStop::new(1.0, 230, 170, 120, 0.0),
            ]),
            bump: Gradient::new(vec![
                ColorStop::gray(0.0, 0.15, 0.8),
                ColorStop::gray(0.6, 0.35, 0.5),
                ColorStop::gray(0.85, 0.9, 0.7),
                ColorStop::gray(1.0, 0.5, 0.0),
            ]),
        }
    }
}

impl Crater {
    /// Draw into the albedo and bump rasters. Both must share dimensions.
    ///
    /// Craters overlapping the left/right edge continue on the other side.
    pub fn stamp(&self, albedo: &mut RasterImage, bump: &mut RasterImage, style: &CraterStyle) {
        albedo.draw_radial_gradient(
            self.x,
            self.y,
            self.radius,
            &style.albedo,
            BlendMode::Normal,
            true,
        );
        bump.draw_radial_gradient(
            self.x,
            self.y,
            self.radius,
            &style.bump,
            BlendMode::Overlay,
            true,
        );
    }
}

/// Place `count` craters uniformly over a `width` x `height` raster.
///
/// Radii are drawn between `radius_range` fractions of the width, skewed
/// toward small craters (cube of a uniform sample), and never below one
/// pixel.
pub fn scatter_craters<R: Rng + ?Sized>(
    rng: &mut R,
    count: u32,
    width: u32,
    height: u32,
    radius_range: (f32, f32),
) -> Vec<Crater> {
    let (lo, hi) = if radius_range.0 <= radius_range.1 {
        radius_range
    } else {
        (radius_range.1, radius_range.0)
    };
    let w = width as f32;
    let h = height as f32;

    (0..count)
        .map(|_| {
            let x = rng.random::<f32>() * w;
            let y = rng.random::<f32>() * h;
            let skew = rng.random::<f32>().powi(3);
            let radius = ((lo + (hi - lo) * skew) * w).max(1.0);
            Crater { x, y, radius }
        })
        .collect()
}
