//! Scene state for the Mars globe.
//!
//! [`SceneContext`] owns everything that changes at runtime (camera
//! controller, satellite angles, selection, surface maps) and exposes the
//! data a renderer draws each frame. Static catalogs live alongside it.

mod atmosphere;
mod context;
mod error;
mod picking;
mod sites;
mod starfield;

pub use atmosphere::{AtmosphereParams, AtmosphereUniform};
pub use context::{SatelliteMarker, SceneContext, Selection, SiteMarker};
pub use error::SceneError;
pub use picking::{PickHit, ray_sphere_intersect};
pub use sites::{SITES, SiteKind, SurfaceSite, find_site};
pub use starfield::{Star, generate_starfield};
