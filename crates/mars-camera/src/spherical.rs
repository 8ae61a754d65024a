//! Spherical coordinates around a Y-up origin.

use glam::Vec3;

/// A point as `(radius, polar, azimuth)`.
///
/// `polar` is measured from +Y (0 at the north pole, pi at the south pole).
/// `azimuth` is measured around +Y starting at +Z, turning toward +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl Spherical {
    pub const fn new(radius: f32, polar: f32, azimuth: f32) -> Self {
        Self {
            radius,
            polar,
            azimuth,
        }
    }

    /// Decompose a Cartesian offset. The zero vector maps to all zeros.
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius <= f32::EPSILON {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            polar: (v.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: v.x.atan2(v.z),
        }
    }

    pub fn to_vec3(self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        )
    }

    /// Clamp polar into `[min, max]` and radius into `[min_r, max_r]`.
    pub fn clamped(self, polar: (f32, f32), radius: (f32, f32)) -> Self {
        Self {
            radius: self.radius.clamp(radius.0, radius.1),
            polar: self.polar.clamp(polar.0, polar.1),
            azimuth: self.azimuth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_axes() {
        assert!(approx(Spherical::new(2.0, 0.0, 0.0).to_vec3(), Vec3::new(0.0, 2.0, 0.0)));
        assert!(approx(Spherical::new(1.0, FRAC_PI_2, 0.0).to_vec3(), Vec3::Z));
        assert!(approx(Spherical::new(1.0, FRAC_PI_2, FRAC_PI_2).to_vec3(), Vec3::X));
        assert!(approx(Spherical::new(1.0, PI, 0.0).to_vec3(), Vec3::NEG_Y));
    }

    #[test]
    fn test_roundtrip_from_cartesian() {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, -0.1),
            Vec3::new(0.0, -3.0, 1.0),
        ] {
            let s = Spherical::from_vec3(v);
            assert!(approx(s.to_vec3(), v), "{v:?} -> {s:?}");
            assert!((0.0..=PI).contains(&s.polar));
        }
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(Spherical::from_vec3(Vec3::ZERO), Spherical::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_clamped() {
        let s = Spherical::new(50.0, 0.01, 1.0).clamped((0.1, PI - 0.1), (1.3, 10.0));
        assert_eq!(s.radius, 10.0);
        assert_eq!(s.polar, 0.1);
        assert_eq!(s.azimuth, 1.0);
    }
}
