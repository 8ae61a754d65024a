//! Texture descriptors handed to a renderer: pixels plus sampling state.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::error::SurfaceError;
use crate::raster::RasterImage;

/// Address mode along one texture axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

/// Magnification / minification filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// How a renderer should sample a surface map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureSampling {
    pub wrap_u: WrapMode,
    pub wrap_v: WrapMode,
    pub filter: FilterMode,
    pub mipmaps: bool,
    pub max_anisotropy: u16,
}

impl TextureSampling {
    /// Repeat on both axes, linear filtering, mipmapped, anisotropy 1.
    pub const fn tileable() -> Self {
        Self {
            wrap_u: WrapMode::Repeat,
            wrap_v: WrapMode::Repeat,
            filter: FilterMode::Linear,
            mipmaps: true,
            max_anisotropy: 1,
        }
    }

    /// Use the renderer's maximum anisotropy, or 1 when it reports none.
    pub fn with_max_anisotropy(mut self, renderer_limit: Option<u16>) -> Self {
        self.max_anisotropy = renderer_limit.unwrap_or(1).max(1);
        self
    }
}

impl Default for TextureSampling {
    fn default() -> Self {
        Self::tileable()
    }
}

/// Calculates the number of mip levels for the given dimensions.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let edge = width.max(height).max(1);
    u32::BITS - edge.leading_zeros()
}

/// One generated map with its sampling state.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceTexture {
    pub name: &'static str,
    pub image: RasterImage,
    pub sampling: TextureSampling,
}

impl SurfaceTexture {
    pub fn new(name: &'static str, image: RasterImage) -> Self {
        Self {
            name,
            image,
            sampling: TextureSampling::tileable(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA8 bytes of the base level.
    pub fn bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    /// Mip levels the renderer should allocate (1 when mipmaps are off).
    pub fn mip_levels(&self) -> u32 {
        if self.sampling.mipmaps {
            mip_level_count(self.width(), self.height())
        } else {
            1
        }
    }

    /// Copy the base level into an [`RgbaImage`].
    pub fn to_rgba_image(&self) -> Result<RgbaImage, SurfaceError> {
        RgbaImage::from_raw(self.width(), self.height(), self.bytes().to_vec())
            .ok_or(SurfaceError::BufferSize { name: self.name })
    }

    /// Levels below the base, each a triangle-filtered half of the previous
    /// one, for renderers that cannot generate mipmaps on the GPU. Empty
    /// when mipmaps are off.
    pub fn mip_chain(&self) -> Result<Vec<RgbaImage>, SurfaceError> {
        let levels = self.mip_levels();
        if levels <= 1 {
            return Ok(Vec::new());
        }
        let mut prev = self.to_rgba_image()?;
        let mut chain = Vec::with_capacity(levels as usize - 1);
        for _ in 1..levels {
            let w = (prev.width() / 2).max(1);
            let h = (prev.height() / 2).max(1);
            let next = imageops::resize(&prev, w, h, FilterType::Triangle);
            chain.push(next.clone());
            prev = next;
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mipmap_level_count_calculation() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(4, 4), 3);
        assert_eq!(mip_level_count(256, 256), 9);
        assert_eq!(mip_level_count(512, 256), 10);
        assert_eq!(mip_level_count(2048, 1024), 12);
        assert_eq!(mip_level_count(3, 1), 2);
    }

    #[test]
    fn test_tileable_defaults() {
        let s = TextureSampling::tileable();
        assert_eq!(s.wrap_u, WrapMode::Repeat);
        assert_eq!(s.wrap_v, WrapMode::Repeat);
        assert!(s.mipmaps);
        assert_eq!(s.max_anisotropy, 1);
    }

    #[test]
    fn test_anisotropy_follows_renderer() {
        assert_eq!(TextureSampling::tileable().with_max_anisotropy(Some(16)).max_anisotropy, 16);
        assert_eq!(TextureSampling::tileable().with_max_anisotropy(None).max_anisotropy, 1);
        assert_eq!(TextureSampling::tileable().with_max_anisotropy(Some(0)).max_anisotropy, 1);
    }

    #[test]
    fn test_mip_chain_shapes() {
        let tex = SurfaceTexture::new("albedo", RasterImage::filled(8, 4, [10, 20, 30, 255]));
        let chain = tex.mip_chain().unwrap();
        assert_eq!(chain.len(), 3);
        let dims: Vec<_> = chain.iter().map(RgbaImage::dimensions).collect();
        assert_eq!(dims, vec![(4, 2), (2, 1), (1, 1)]);
        assert_eq!(chain[2].get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_mip_chain_blends_neighbours() {
        let mut image = RasterImage::filled(2, 2, [0, 0, 0, 255]);
        image.set(0, 0, [200, 0, 0, 255]);
        image.set(1, 1, [200, 0, 0, 255]);
        let chain = SurfaceTexture::new("albedo", image).mip_chain().unwrap();
        assert_eq!(chain.len(), 1);
        let red = chain[0].get_pixel(0, 0).0[0];
        assert!(red > 0 && red < 200, "red {red}");
    }

    #[test]
    fn test_no_mipmaps_no_chain() {
        let mut tex = SurfaceTexture::new("bump", RasterImage::filled(8, 8, [0; 4]));
        tex.sampling.mipmaps = false;
        assert_eq!(tex.mip_levels(), 1);
        assert!(tex.mip_chain().unwrap().is_empty());
    }
}
