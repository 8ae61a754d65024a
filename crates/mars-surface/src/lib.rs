//! Procedural Mars surface textures.
//!
//! Produces albedo, bump and roughness rasters from a seeded value-noise
//! lattice, a three-band color palette, stamped craters, polar ice caps and
//! per-pixel grit. Every random stage draws from a stream derived from one
//! master seed, so identical inputs yield pixel-identical maps.

mod crater;
mod error;
mod export;
mod fbm;
mod generator;
mod ice;
mod lattice;
mod palette;
mod raster;
mod seed;
mod texture;
mod worker;

pub use crater::{Crater, CraterStyle, scatter_craters};
pub use error::{MAX_TEXTURE_EDGE, SurfaceError};
pub use export::export_png;
pub use fbm::{Fbm, FbmParams};
pub use generator::{SurfaceMaps, SurfaceParams, generate_surface_maps, generate_with_params};
pub use ice::stamp_ice_caps;
pub use lattice::{LATTICE_SIZE, NoiseLattice, PeriodicLattice};
pub use palette::{Color, Palette};
pub use raster::{BlendMode, ColorStop, Gradient, RasterImage};
pub use seed::{SurfaceStage, derive_stage_seed, stage_rng};
pub use texture::{FilterMode, SurfaceTexture, TextureSampling, WrapMode, mip_level_count};
pub use worker::SurfaceWorker;
