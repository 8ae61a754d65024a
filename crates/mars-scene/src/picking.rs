//! Ray picking against the globe and its markers.

use glam::Vec3;
use mars_camera::Ray;

/// What a picking ray hit first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickHit {
    Site(&'static str),
    Satellite(&'static str),
    /// Bare surface at planetographic coordinates in degrees.
    Surface { lat: f64, lon: f64 },
}

/// A pickable marker sphere.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PickTarget {
    pub hit: PickHit,
    pub center: Vec3,
    pub radius: f32,
}

/// Ray-sphere intersection. Returns `(t_near, t_far)` or `None` on a miss.
/// `dir` must be normalized.
pub fn ray_sphere_intersect(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<(f32, f32)> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    Some((-b - sqrt_disc, -b + sqrt_disc))
}

/// Nearest non-negative hit distance, if any.
fn first_hit(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let (near, far) = ray_sphere_intersect(ray.origin, ray.direction, center, radius)?;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Closest visible marker along `ray`, else the globe surface, else `None`.
/// Markers hidden behind the globe are skipped.
pub(crate) fn pick(ray: &Ray, targets: &[PickTarget], globe_radius: f32) -> Option<PickHit> {
    let globe_t = first_hit(ray, Vec3::ZERO, globe_radius);
    let occluder = globe_t.unwrap_or(f32::INFINITY);

    let marker = targets
        .iter()
        .filter_map(|target| {
            let t = first_hit(ray, target.center, target.radius)?;
            // The marker's near face may sit slightly inside the globe.
            (t <= occluder + target.radius * 2.0).then_some((t, target.hit))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0));

    if let Some((_, hit)) = marker {
        return Some(hit);
    }
    globe_t.map(|t| {
        let (lat, lon) = cartesian_to_lat_lon(ray.at(t));
        PickHit::Surface { lat, lon }
    })
}

/// Inverse of [`mars_orbit::lat_lon_to_cartesian`]. Longitude in `[-180, 180)`.
pub(crate) fn cartesian_to_lat_lon(p: Vec3) -> (f64, f64) {
    let p = p.as_dvec3();
    let r = p.length();
    if r <= f64::EPSILON {
        return (0.0, 0.0);
    }
    let lat = (p.y / r).clamp(-1.0, 1.0).asin().to_degrees();
    let theta = p.z.atan2(-p.x).to_degrees();
    let lon = theta.rem_euclid(360.0) - 180.0;
    (lat, lon)
}
