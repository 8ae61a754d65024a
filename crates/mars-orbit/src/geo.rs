//! Planetographic coordinates on the globe.

use glam::DVec3;

/// Point at `radius` for latitude/longitude in degrees.
///
/// Y is the north pole; longitude 0 faces +X and east longitudes turn toward
/// -Z, matching an equirectangular texture whose left edge is longitude -180.
pub fn lat_lon_to_cartesian(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}
