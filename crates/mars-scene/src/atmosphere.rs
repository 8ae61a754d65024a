//! Fresnel-style rim glow around the globe.

use bytemuck::{Pod, Zeroable};
use mars_config::GlobeConfig;

/// Rim glow parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereParams {
    /// Radius of the atmosphere shell in scene units.
    pub radius: f32,
    pub color: [f32; 3],
    /// Exponent applied to `1 - n·v`; higher values keep the glow on the limb.
    pub rim_power: f32,
    pub rim_intensity: f32,
}

impl AtmosphereParams {
    pub fn from_config(globe: &GlobeConfig) -> Self {
        Self {
            radius: globe.radius * (1.0 + globe.atmosphere_thickness.max(0.0)),
            color: globe.atmosphere_color,
            rim_power: globe.rim_power.max(0.0),
            rim_intensity: globe.rim_intensity.max(0.0),
        }
    }

    /// Glow strength for a surface normal and a direction toward the viewer,
    /// both unit length. Zero face-on, `rim_intensity` at grazing angles.
    pub fn rim_factor(&self, n_dot_v: f32) -> f32 {
        let facing = n_dot_v.clamp(0.0, 1.0);
        (1.0 - facing).powf(self.rim_power) * self.rim_intensity
    }

    pub fn to_uniform(&self) -> AtmosphereUniform {
        AtmosphereUniform {
            color: [self.color[0], self.color[1], self.color[2], 1.0],
            radius: self.radius,
            rim_power: self.rim_power,
            rim_intensity: self.rim_intensity,
            _padding: 0.0,
        }
    }
}

/// GPU-ready layout of [`AtmosphereParams`], 16-byte aligned rows.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct AtmosphereUniform {
    pub color: [f32; 4],
    pub radius: f32,
    pub rim_power: f32,
    pub rim_intensity: f32,
    pub _padding: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<AtmosphereUniform>(), 32);
        let params = AtmosphereParams::from_config(&GlobeConfig::default());
        assert_eq!(bytemuck::bytes_of(&params.to_uniform()).len(), 32);
    }

    #[test]
    fn test_shell_above_globe() {
        let globe = GlobeConfig::default();
        let params = AtmosphereParams::from_config(&globe);
        assert!(params.radius > globe.radius);
    }

    #[test]
    fn test_rim_strongest_at_limb() {
        let params = AtmosphereParams::from_config(&GlobeConfig::default());
        assert_eq!(params.rim_factor(1.0), 0.0);
        assert!((params.rim_factor(0.0) - params.rim_intensity).abs() < 1e-6);
        assert!(params.rim_factor(0.2) > params.rim_factor(0.8));
    }
}
