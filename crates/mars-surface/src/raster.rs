//! In-process RGBA8 raster with gradient drawing and blend modes.
//!
//! This is the rasterization backend for surface synthesis: it needs no
//! display or GPU, so generation also works headless.

/// A row-major RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

/// How a drawn color combines with the pixel underneath.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over alpha compositing.
    Normal,
    /// Overlay: darkens where the source is below mid-gray and brightens
    /// where it is above, scaled by the source alpha.
    Overlay,
}

/// A gradient stop. `rgba` channels are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub rgba: [f32; 4],
}

impl ColorStop {
    /// Stop from 8-bit color and unit alpha.
    pub const fn new(offset: f32, r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            offset,
            rgba: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha],
        }
    }

    /// Gray stop with the given level and alpha, both in `[0, 1]`.
    pub const fn gray(offset: f32, level: f32, alpha: f32) -> Self {
        Self {
            offset,
            rgba: [level, level, level, alpha],
        }
    }
}

/// Piecewise-linear color ramp over `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build from stops; they are sorted by offset.
    pub fn new(mut stops: Vec<ColorStop>) -> Self {
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { stops }
    }

    /// Color at `t`, clamped to the first/last stop outside their range.
    pub fn at(&self, t: f32) -> [f32; 4] {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0.0; 4];
        };
        if t <= first.offset {
            return first.rgba;
        }
        if t >= last.offset {
            return last.rgba;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let k = if span > f32::EPSILON {
                    (t - a.offset) / span
                } else {
                    1.0
                };
                return std::array::from_fn(|i| a.rgba[i] + (b.rgba[i] - a.rgba[i]) * k);
            }
        }
        last.rgba
    }
}

impl RasterImage {
    /// New image filled with one color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; width as usize * height as usize],
        }
    }

    /// Image from pixel data; `None` if the length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Raw RGBA bytes, `width * height * 4` long, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx] = rgba;
    }

    /// Mutable access to every pixel with its coordinates.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(u32, u32, &mut [u8; 4])) {
        let width = self.width.max(1);
        for (i, px) in self.pixels.iter_mut().enumerate() {
            let i = i as u32;
            f(i % width, i / width, px);
        }
    }

    /// Blend a unit-range RGBA color into `(x, y)`. Destination alpha is kept.
    pub fn blend(&mut self, x: u32, y: u32, src: [f32; 4], mode: BlendMode) {
        let alpha = src[3].clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = self.index(x, y);
        let dst = &mut self.pixels[idx];
        for c in 0..3 {
            let base = f32::from(dst[c]) / 255.0;
            let layer = src[c].clamp(0.0, 1.0);
            let mixed = match mode {
                BlendMode::Normal => layer,
                BlendMode::Overlay => overlay(base, layer),
            };
            let out = base + (mixed - base) * alpha;
            dst[c] = (out * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Draw a radial gradient centred at `(cx, cy)` in pixel units.
    ///
    /// Gradient offset 0 is the centre and 1 the edge; pixels beyond the
    /// radius are untouched. With `wrap_x` the disc continues across the
    /// left/right edge so equirectangular textures stay seamless.
    pub fn draw_radial_gradient(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        gradient: &Gradient,
        mode: BlendMode,
        wrap_x: bool,
    ) {
        if radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }
        let y_start = (cy - radius).floor().max(0.0) as i64;
        let y_end = ((cy + radius).ceil() as i64).min(i64::from(self.height) - 1);
        let x_start = (cx - radius).floor() as i64;
        let x_end = (cx + radius).ceil() as i64;
        let width = i64::from(self.width);

        for py in y_start..=y_end {
            for px in x_start..=x_end {
                let x = if wrap_x {
                    px.rem_euclid(width)
                } else if (0..width).contains(&px) {
                    px
                } else {
                    continue;
                };
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let t = (dx * dx + dy * dy).sqrt() / radius;
                if t > 1.0 {
                    continue;
                }
                self.blend(x as u32, py as u32, gradient.at(t), mode);
            }
        }
    }

    /// Blend a vertical linear gradient over rows `y_start..y_end`.
    ///
    /// Offset 0 lands on `y_start` and 1 on the last row, or the other way
    /// round with `from_bottom`.
    pub fn draw_row_gradient(
        &mut self,
        y_start: u32,
        y_end: u32,
        gradient: &Gradient,
        from_bottom: bool,
    ) {
        let y_end = y_end.min(self.height);
        if y_end <= y_start {
            return;
        }
        let last = (y_end - y_start - 1) as f32;
        for y in y_start..y_end {
            let step = if from_bottom { y_end - 1 - y } else { y - y_start };
            let t = step as f32 / last.max(1.0);
            let color = gradient.at(t);
            for x in 0..self.width {
                self.blend(x, y, color, BlendMode::Normal);
            }
        }
    }

    /// Mean of the red channel over a row, in `[0, 255]`.
    pub fn row_mean(&self, y: u32) -> f32 {
        let start = self.index(0, y);
        let row = &self.pixels[start..start + self.width as usize];
        row.iter().map(|p| f32::from(p[0])).sum::<f32>() / self.width.max(1) as f32
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }
}

#[inline]
fn overlay(base: f32, layer: f32) -> f32 {
    if base < 0.5 {
        2.0 * base * layer
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_view_length() {
        let image = RasterImage::filled(64, 32, [1, 2, 3, 255]);
        assert_eq!(image.as_bytes().len(), 64 * 32 * 4);
        assert_eq!(&image.as_bytes()[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut image = RasterImage::filled(8, 8, [0; 4]);
        image.set(2, 3, [10, 20, 30, 40]);
        assert_eq!(image.get(2, 3), [10, 20, 30, 40]);
        assert_eq!(image.as_bytes()[(3 * 8 + 2) * 4], 10);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(RasterImage::from_pixels(2, 2, vec![[0; 4]; 3]).is_none());
        assert!(RasterImage::from_pixels(2, 2, vec![[0; 4]; 4]).is_some());
    }

    #[test]
    fn test_gradient_interpolates() {
        let g = Gradient::new(vec![
            ColorStop::gray(1.0, 1.0, 1.0),
            ColorStop::gray(0.0, 0.0, 0.0),
        ]);
        let mid = g.at(0.5);
        assert!((mid[0] - 0.5).abs() < 1e-6);
        assert!((mid[3] - 0.5).abs() < 1e-6);
        assert_eq!(g.at(-1.0), [0.0; 4]);
        assert_eq!(g.at(2.0), [1.0; 4]);
    }

    #[test]
    fn test_normal_blend_respects_alpha() {
        let mut image = RasterImage::filled(1, 1, [0, 0, 0, 255]);
        image.blend(0, 0, [1.0, 1.0, 1.0, 0.5], BlendMode::Normal);
        let px = image.get(0, 0);
        assert!((127..=128).contains(&px[0]));
        assert_eq!(px[3], 255);
    }

    #[test]
    fn test_overlay_darkens_and_brightens_mid_gray() {
        let mut dark = RasterImage::filled(1, 1, [128, 128, 128, 255]);
        dark.blend(0, 0, [0.1, 0.1, 0.1, 1.0], BlendMode::Overlay);
        assert!(dark.get(0, 0)[0] < 128);

        let mut bright = RasterImage::filled(1, 1, [128, 128, 128, 255]);
        bright.blend(0, 0, [0.9, 0.9, 0.9, 1.0], BlendMode::Overlay);
        assert!(bright.get(0, 0)[0] > 128);
    }

    #[test]
    fn test_radial_gradient_leaves_outside_untouched() {
        let mut image = RasterImage::filled(32, 32, [100, 100, 100, 255]);
        let g = Gradient::new(vec![
            ColorStop::gray(0.0, 0.0, 1.0),
            ColorStop::gray(1.0, 0.0, 1.0),
        ]);
        image.draw_radial_gradient(16.0, 16.0, 4.0, &g, BlendMode::Normal, false);
        assert_eq!(image.get(16, 16)[0], 0);
        assert_eq!(image.get(0, 0)[0], 100);
        assert_eq!(image.get(16, 25)[0], 100);
    }

    #[test]
    fn test_radial_gradient_wraps_horizontally() {
        let mut image = RasterImage::filled(32, 8, [100, 100, 100, 255]);
        let g = Gradient::new(vec![
            ColorStop::gray(0.0, 0.0, 1.0),
            ColorStop::gray(1.0, 0.0, 1.0),
        ]);
        image.draw_radial_gradient(0.5, 4.0, 3.0, &g, BlendMode::Normal, true);
        assert_eq!(image.get(31, 4)[0], 0, "disc should continue on the right edge");

        let mut clipped = RasterImage::filled(32, 8, [100, 100, 100, 255]);
        clipped.draw_radial_gradient(0.5, 4.0, 3.0, &g, BlendMode::Normal, false);
        assert_eq!(clipped.get(31, 4)[0], 100);
    }

    #[test]
    fn test_row_gradient_fades() {
        let mut image = RasterImage::filled(4, 10, [0, 0, 0, 255]);
        let g = Gradient::new(vec![
            ColorStop::gray(0.0, 1.0, 1.0),
            ColorStop::gray(1.0, 1.0, 0.0),
        ]);
        image.draw_row_gradient(0, 5, &g, false);
        assert_eq!(image.get(0, 0)[0], 255);
        assert_eq!(image.get(0, 4)[0], 0);
        assert!(image.row_mean(1) > image.row_mean(3));
        assert_eq!(image.get(0, 7)[0], 0);

        image.draw_row_gradient(5, 10, &g, true);
        assert_eq!(image.get(0, 9)[0], 255);
        assert_eq!(image.get(0, 5)[0], 0);
    }
}
