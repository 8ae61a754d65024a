//! Three-band surface palette.

/// An 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Construct from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation per channel, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Opaque RGBA pixel.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Maps a terrain value in `[0, 1]` through dark, mid and light bands.
///
/// `stops[0]..stops[1]` spans `[0, breakpoints.0)`,
/// `stops[1]..stops[2]` spans `[breakpoints.0, breakpoints.1)` and
/// `stops[2]..stops[3]` spans `[breakpoints.1, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub stops: [Color; 4],
    pub breakpoints: (f64, f64),
}

impl Palette {
    /// Basalt lowlands through rust plains to ochre dust.
    pub const MARS: Palette = Palette {
        stops: [
            Color::rgb(62, 30, 20),
            Color::rgb(139, 62, 35),
            Color::rgb(188, 105, 58),
            Color::rgb(222, 162, 112),
        ],
        breakpoints: (0.35, 0.7),
    };

    /// Color for a terrain value.
    pub fn sample(&self, value: f64) -> Color {
        let v = value.clamp(0.0, 1.0);
        let (low, high) = self.breakpoints;
        if v < low {
            self.stops[0].lerp(self.stops[1], band_t(v, 0.0, low))
        } else if v < high {
            self.stops[1].lerp(self.stops[2], band_t(v, low, high))
        } else {
            self.stops[2].lerp(self.stops[3], band_t(v, high, 1.0))
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::MARS
    }
}

fn band_t(v: f64, start: f64, end: f64) -> f64 {
    let width = end - start;
    if width <= f64::EPSILON {
        1.0
    } else {
        (v - start) / width
    }
}
