//! Satellite orbits around Mars.
//!
//! A static catalog of moons, orbiters and a rover ([`SATELLITES`]) plus the
//! runtime state that moves them: each [`SatelliteOrbit`] accumulates an
//! angle and places its body on a tilted, flattened ellipse.

mod catalog;
mod descriptor;
mod geo;
mod orbit;

pub use catalog::{SATELLITES, find_satellite};
pub use descriptor::{AltitudeReference, MARS_RADIUS_KM, OrbitClass, OrbitDescriptor, hex_to_rgb};
pub use geo::lat_lon_to_cartesian;
pub use orbit::{OrbitScale, SatelliteOrbit, ellipse_point};
