//! Orbit camera for the globe view.
//!
//! [`OrbitController`] keeps a perspective [`Camera`] on a sphere around a
//! look-at target. Pointer and wheel handlers only accumulate pending
//! deltas; [`OrbitController::update`] applies them once per frame with
//! damping, clamps pitch and distance, and drives scripted [`CameraFlight`]s.

mod camera;
mod controller;
mod flight;
mod spherical;

pub use camera::{Camera, Ray};
pub use controller::{OrbitController, OrbitControllerOptions};
pub use flight::{CameraFlight, EasingFunction};
pub use spherical::Spherical;
