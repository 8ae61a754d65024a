//! Surface map synthesis: noise field, palette, craters, ice caps, grit.

use std::time::Instant;

use mars_config::SurfaceConfig;
use rand::Rng;

use crate::crater::{CraterStyle, scatter_craters};
use crate::error::{SurfaceError, validate_dimensions};
use crate::fbm::{Fbm, FbmParams};
use crate::ice::stamp_ice_caps;
use crate::lattice::NoiseLattice;
use crate::palette::Palette;
use crate::raster::RasterImage;
use crate::seed::{SurfaceStage, stage_rng};
use crate::texture::SurfaceTexture;

/// Every knob of surface synthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceParams {
    pub fbm: FbmParams,
    pub palette: Palette,
    pub crater_count: u32,
    /// Crater radius bounds as fractions of the texture width.
    pub crater_radius: (f32, f32),
    pub crater_style: CraterStyle,
    /// Fraction of the height covered by each polar cap.
    pub ice_cap_fraction: f32,
    /// Roughness of ice, in `[0, 1]`.
    pub ice_roughness: f32,
    /// Roughness of terrain at the highest and lowest field values.
    pub roughness_range: (f32, f32),
    /// Maximum per-pixel albedo offset in 8-bit steps.
    pub grit: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            fbm: FbmParams::default(),
            palette: Palette::MARS,
            crater_count: 400,
            crater_radius: (0.002, 0.025),
            crater_style: CraterStyle::default(),
            ice_cap_fraction: 0.1,
            ice_roughness: 0.25,
            roughness_range: (0.75, 0.95),
            grit: 6.0,
        }
    }
}

impl From<&SurfaceConfig> for SurfaceParams {
    fn from(config: &SurfaceConfig) -> Self {
        Self {
            fbm: FbmParams {
                octaves: config.octaves,
                base_cells: config.base_cells,
                ..FbmParams::default()
            },
            crater_count: config.crater_count,
            ice_cap_fraction: config.ice_cap_fraction,
            grit: config.grit,
            ..Self::default()
        }
    }
}

/// The three generated maps, all the same size.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceMaps {
    pub albedo: SurfaceTexture,
    pub bump: SurfaceTexture,
    pub roughness: SurfaceTexture,
}

impl SurfaceMaps {
    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.albedo.image.dimensions()
    }

    /// The maps in albedo, bump, roughness order.
    pub fn textures(&self) -> [&SurfaceTexture; 3] {
        [&self.albedo, &self.bump, &self.roughness]
    }

    /// Apply the renderer's anisotropy limit to all three maps.
    pub fn with_max_anisotropy(mut self, renderer_limit: Option<u16>) -> Self {
        for tex in [&mut self.albedo, &mut self.bump, &mut self.roughness] {
            tex.sampling = tex.sampling.with_max_anisotropy(renderer_limit);
        }
        self
    }
}

/// Generate albedo, bump and roughness maps with default parameters.
///
/// Identical `seed` and dimensions always yield pixel-identical maps.
pub fn generate_surface_maps(
    seed: u64,
    width: u32,
    height: u32,
) -> Result<SurfaceMaps, SurfaceError> {
    generate_with_params(seed, width, height, &SurfaceParams::default())
}

/// Generate the maps with explicit parameters.
pub fn generate_with_params(
    seed: u64,
    width: u32,
    height: u32,
    params: &SurfaceParams,
) -> Result<SurfaceMaps, SurfaceError> {
    validate_dimensions(width, height)?;
    let start = Instant::now();
    tracing::info!(seed, width, height, "Generating surface maps");

    let fbm = Fbm::new(NoiseLattice::new(seed), params.fbm.clone());
    let (mut albedo, mut bump, mut roughness) = base_layers(&fbm, width, height, params)?;

    let mut crater_rng = stage_rng(seed, SurfaceStage::Craters);
    let craters = scatter_craters(
        &mut crater_rng,
        params.crater_count,
        width,
        height,
        params.crater_radius,
    );
    for crater in &craters {
        crater.stamp(&mut albedo, &mut bump, &params.crater_style);
    }
    tracing::debug!(count = craters.len(), "Stamped craters");

    stamp_ice_caps(
        &mut albedo,
        &mut roughness,
        params.ice_cap_fraction,
        params.ice_roughness,
    );

    if params.grit > 0.0 {
        let mut grit_rng = stage_rng(seed, SurfaceStage::Grit);
        let amplitude = params.grit;
        albedo.for_each_mut(|_, _, px| {
            let offset = grit_rng.random_range(-amplitude..=amplitude);
            for c in &mut px[..3] {
                *c = (f32::from(*c) + offset).round().clamp(0.0, 255.0) as u8;
            }
        });
    }

    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Surface maps ready"
    );

    Ok(SurfaceMaps {
        albedo: SurfaceTexture::new("albedo", albedo),
        bump: SurfaceTexture::new("bump", bump),
        roughness: SurfaceTexture::new("roughness", roughness),
    })
}

/// Fill albedo, bump and roughness from the noise field.
fn base_layers(
    fbm: &Fbm,
    width: u32,
    height: u32,
    params: &SurfaceParams,
) -> Result<(RasterImage, RasterImage, RasterImage), SurfaceError> {
    let count = width as usize * height as usize;
    let mut albedo = Vec::with_capacity(count);
    let mut bump = Vec::with_capacity(count);
    let mut roughness = Vec::with_capacity(count);

    let aspect = f64::from(height) / f64::from(width);
    let (rough_lo, rough_hi) = params.roughness_range;

    for y in 0..height {
        let v = (f64::from(y) + 0.5) / f64::from(height);
        for x in 0..width {
            let u = (f64::from(x) + 0.5) / f64::from(width);
            let value = fbm.sample_unit(u, v, aspect);

            albedo.push(params.palette.sample(value).to_rgba());

            let h = (value * 255.0).round() as u8;
            bump.push([h, h, h, 255]);

            let r = rough_lo + (rough_hi - rough_lo) * (1.0 - value as f32);
            let r = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
            roughness.push([r, r, r, 255]);
        }
    }

    let albedo = RasterImage::from_pixels(width, height, albedo)
        .ok_or(SurfaceError::BufferSize { name: "albedo" })?;
    let bump = RasterImage::from_pixels(width, height, bump)
        .ok_or(SurfaceError::BufferSize { name: "bump" })?;
    let roughness = RasterImage::from_pixels(width, height, roughness)
        .ok_or(SurfaceError::BufferSize { name: "roughness" })?;
    Ok((albedo, bump, roughness))
}
