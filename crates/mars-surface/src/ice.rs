//! Polar ice caps.

use crate::raster::{ColorStop, Gradient, RasterImage};

const ICE: (u8, u8, u8) = (245, 245, 250);

/// Fade opaque ice at each pole to transparent over `band_fraction` of the
/// height, and pull roughness toward `ice_roughness` across the same rows.
///
/// `band_fraction` is clamped to `[0, 0.5]`; zero leaves both rasters as they
/// are. Returns the number of rows in each band.
pub fn stamp_ice_caps(
    albedo: &mut RasterImage,
    roughness: &mut RasterImage,
    band_fraction: f32,
    ice_roughness: f32,
) -> u32 {
    let height = albedo.height();
    let fraction = band_fraction.clamp(0.0, 0.5);
    if fraction <= 0.0 || height == 0 {
        return 0;
    }
    let rows = ((height as f32 * fraction).round() as u32).clamp(1, height.div_ceil(2));

    let (r, g, b) = ICE;
    let ice = Gradient::new(vec![
        ColorStop::new(0.0, r, g, b, 1.0),
        ColorStop::new(1.0, r, g, b, 0.0),
    ]);
    albedo.draw_row_gradient(0, rows, &ice, false);
    albedo.draw_row_gradient(height - rows, height, &ice, true);

    let level = ice_roughness.clamp(0.0, 1.0);
    let smooth = Gradient::new(vec![
        ColorStop::gray(0.0, level, 1.0),
        ColorStop::gray(1.0, level, 0.0),
    ]);
    let rough_height = roughness.height();
    let rough_rows = rows.min(rough_height);
    roughness.draw_row_gradient(0, rough_rows, &smooth, false);
    roughness.draw_row_gradient(rough_height - rough_rows, rough_height, &smooth, true);

    tracing::debug!(rows, fraction, "Stamped polar ice caps");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rasters() -> (RasterImage, RasterImage) {
        (
            RasterImage::filled(16, 100, [140, 62, 35, 255]),
            RasterImage::filled(16, 100, [230, 230, 230, 255]),
        )
    }

    #[test]
    fn test_poles_are_white_and_smooth() {
        let (mut albedo, mut roughness) = rasters();
        let rows = stamp_ice_caps(&mut albedo, &mut roughness, 0.1, 0.25);
        assert_eq!(rows, 10);

        assert_eq!(albedo.get(0, 0), [245, 245, 250, 255]);
        assert_eq!(albedo.get(5, 99), [245, 245, 250, 255]);
        assert_eq!(albedo.get(3, 50), [140, 62, 35, 255]);
        assert!(albedo.row_mean(2) > albedo.row_mean(8));

        assert_eq!(roughness.get(0, 0)[0], (0.25f32 * 255.0).round() as u8);
        assert!(roughness.row_mean(0) < roughness.row_mean(50));
        assert!(roughness.row_mean(99) < roughness.row_mean(50));
    }

    #[test]
    fn test_caps_are_mirrored() {
        let (mut albedo, mut roughness) = rasters();
        stamp_ice_caps(&mut albedo, &mut roughness, 0.1, 0.25);
        for y in 0..10 {
            assert_eq!(albedo.get(0, y), albedo.get(0, 99 - y), "row {y}");
        }
    }

    #[test]
    fn test_zero_fraction_is_noop() {
        let (mut albedo, mut roughness) = rasters();
        let before = albedo.clone();
        assert_eq!(stamp_ice_caps(&mut albedo, &mut roughness, 0.0, 0.25), 0);
        assert_eq!(albedo, before);
    }

    #[test]
    fn test_tiny_raster_gets_one_row() {
        let mut albedo = RasterImage::filled(4, 4, [0, 0, 0, 255]);
        let mut roughness = RasterImage::filled(4, 4, [255, 255, 255, 255]);
        assert_eq!(stamp_ice_caps(&mut albedo, &mut roughness, 0.01, 0.2), 1);
        assert_eq!(albedo.get(0, 0)[0], 245);
        assert_eq!(albedo.get(0, 1)[0], 0);
    }
}
