//! Static description of an orbiting (or landed) body.

/// Mean radius of Mars in kilometres.
pub const MARS_RADIUS_KM: f64 = 3389.5;

/// Broad orbit category, as listed in mission catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitClass {
    MartianMoon,
    PolarOrbit,
    SunSynchronous,
    Elliptical,
    Circular,
    /// Landed on the surface; does not orbit.
    Surface,
}

impl OrbitClass {
    pub fn label(self) -> &'static str {
        match self {
            OrbitClass::MartianMoon => "Martian Moon",
            OrbitClass::PolarOrbit => "Polar Orbit",
            OrbitClass::SunSynchronous => "Sun-Synchronous",
            OrbitClass::Elliptical => "Elliptical",
            OrbitClass::Circular => "Circular",
            OrbitClass::Surface => "Surface",
        }
    }
}

/// What a body's altitude is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AltitudeReference {
    /// Distance from the planet's center (the moons).
    Center,
    /// Height above the mean surface (spacecraft).
    Surface,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    /// NORAD number, or a label for natural moons.
    pub catalog_id: &'static str,
    pub class: OrbitClass,
    pub altitude_km: f64,
    pub altitude_reference: AltitudeReference,
    pub speed_km_s: f64,
    pub inclination_deg: f64,
    pub period_days: f64,
    pub eccentricity: f64,
    /// Right ascension of the ascending node.
    pub raan_deg: f64,
    pub mass: &'static str,
    pub size: &'static str,
    pub description: &'static str,
    /// Display color as `#RRGGBB`.
    pub color: &'static str,
    /// Landing site `(lat, lon)` in degrees for [`OrbitClass::Surface`] bodies.
    pub landing_site: Option<(f64, f64)>,
}

impl OrbitDescriptor {
    /// Distance from the planet's center in kilometres.
    pub fn orbit_radius_km(&self) -> f64 {
        match self.altitude_reference {
            AltitudeReference::Center => self.altitude_km,
            AltitudeReference::Surface => MARS_RADIUS_KM + self.altitude_km,
        }
    }

    /// Height above the mean surface in kilometres, never negative.
    pub fn altitude_above_surface_km(&self) -> f64 {
        (self.orbit_radius_km() - MARS_RADIUS_KM).max(0.0)
    }

    /// Angular speed in rad/s: tangential speed over orbit radius.
    pub fn angular_speed(&self) -> f64 {
        let r = self.orbit_radius_km();
        if self.is_stationary() || r <= 0.0 {
            0.0
        } else {
            self.speed_km_s / r
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.class == OrbitClass::Surface
    }

    /// Display color in linear `[0, 1]` RGB; magenta if the hex is malformed.
    pub fn color_rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.color).unwrap_or([1.0, 0.0, 1.0])
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into unit RGB.
pub fn hex_to_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;
    Some([channel(16), channel(8), channel(0)])
}
