//! Runtime orbit state and position math.
//!
//! Positions use a visual approximation rather than Kepler's equation: the
//! body moves at constant angular speed on an ellipse centred on the planet
//! with semi-axes `r(1 + e)` and `r(1 - e)`, which is then tilted by the
//! inclination about X and turned by the ascending node about Y.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};
use mars_config::OrbitConfig;

use crate::descriptor::{MARS_RADIUS_KM, OrbitDescriptor};
use crate::geo::lat_lon_to_cartesian;

/// Lift applied to landed bodies so their markers sit on the surface.
const SURFACE_LIFT: f64 = 0.01;

/// Maps catalog altitudes to scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitScale {
    /// Globe radius in scene units.
    pub planet_radius: f64,
    /// Minimum gap above the globe, as a fraction of its radius.
    pub clearance: f64,
    /// Compression applied to altitude relative to the planet radius.
    pub altitude_scale: f64,
}

impl Default for OrbitScale {
    fn default() -> Self {
        Self::from_config(&OrbitConfig::default(), 1.0)
    }
}

impl OrbitScale {
    pub fn from_config(config: &OrbitConfig, planet_radius: f64) -> Self {
        Self {
            planet_radius,
            clearance: config.clearance,
            altitude_scale: config.altitude_scale,
        }
    }

    /// Scene-space orbit radius for a body.
    pub fn scene_radius(&self, descriptor: &OrbitDescriptor) -> f64 {
        if descriptor.is_stationary() {
            return self.planet_radius * (1.0 + SURFACE_LIFT);
        }
        let relative_altitude = descriptor.altitude_above_surface_km() / MARS_RADIUS_KM;
        self.planet_radius * (1.0 + self.clearance + relative_altitude * self.altitude_scale)
    }
}

/// Point on a tilted, flattened orbit at `angle`, before any planet offset.
pub fn ellipse_point(
    radius: f64,
    eccentricity: f64,
    inclination_deg: f64,
    raan_deg: f64,
    angle: f64,
) -> DVec3 {
    let e = eccentricity.clamp(0.0, 0.99);
    let a = radius * (1.0 + e);
    let b = radius * (1.0 - e);
    let flat = DVec3::new(a * angle.cos(), 0.0, b * angle.sin());
    let tilt = DQuat::from_rotation_x(inclination_deg.to_radians());
    let node = DQuat::from_rotation_y(raan_deg.to_radians());
    node * (tilt * flat)
}

/// A catalog body with its current orbital angle.
#[derive(Clone, Debug)]
pub struct SatelliteOrbit {
    descriptor: &'static OrbitDescriptor,
    /// Radians, accumulated without wrapping.
    angle: f64,
    radius: f64,
    angular_speed: f64,
}

impl SatelliteOrbit {
    pub fn new(descriptor: &'static OrbitDescriptor, scale: &OrbitScale) -> Self {
        Self {
            descriptor,
            angle: 0.0,
            radius: scale.scene_radius(descriptor),
            angular_speed: descriptor.angular_speed(),
        }
    }

    /// Start at `angle` radians instead of zero.
    pub fn with_phase(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn descriptor(&self) -> &'static OrbitDescriptor {
        self.descriptor
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Scene-space orbit radius before eccentricity.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angular speed in rad/s of simulated time.
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Advance by `elapsed` real seconds with simulated time running
    /// `time_scale` times faster. Negative inputs are treated as zero.
    pub fn advance(&mut self, elapsed: f64, time_scale: f64) {
        self.angle += self.angular_speed * time_scale.max(0.0) * elapsed.max(0.0);
    }

    /// Current position relative to the planet center.
    pub fn position(&self) -> DVec3 {
        if let Some((lat, lon)) = self.descriptor.landing_site {
            return lat_lon_to_cartesian(lat, lon, self.radius);
        }
        self.point_at(self.angle)
    }

    /// `segments` points around the closed orbit, for drawing orbit lines.
    /// Empty for landed bodies.
    pub fn orbit_path(&self, segments: u32) -> Vec<DVec3> {
        if self.descriptor.is_stationary() {
            return Vec::new();
        }
        let segments = segments.max(3);
        (0..segments)
            .map(|i| self.point_at(TAU * f64::from(i) / f64::from(segments)))
            .collect()
    }

    fn point_at(&self, angle: f64) -> DVec3 {
        let d = self.descriptor;
        ellipse_point(
            self.radius,
            d.eccentricity,
            d.inclination_deg,
            d.raan_deg,
            angle,
        )
    }
}
