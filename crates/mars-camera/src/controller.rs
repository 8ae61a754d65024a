//! Orbit controller: pointer drag and wheel into damped spherical motion.
//!
//! Input handlers never move the camera. They add to pending accumulators
//! (azimuth/polar, zoom scale, pan) which [`OrbitController::update`]
//! applies once per frame. With damping on, the angular and pan
//! accumulators decay geometrically instead of being consumed, which gives
//! the camera its glide after the pointer is released.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use mars_config::CameraConfig;
use mars_input::{PointerButton, PointerEvent, WheelEvent};

use crate::camera::Camera;
use crate::flight::{CameraFlight, EasingFunction};
use crate::spherical::Spherical;

/// Smallest margin kept between the polar bounds and the poles.
const POLE_EPSILON: f32 = 1e-4;

/// Pending deltas below this are treated as settled.
const SETTLE_EPSILON: f32 = 1e-6;

/// Tuning for [`OrbitController`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControllerOptions {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the pending delta removed per frame when damping.
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub enable_pan: bool,
    /// Radians per pixel of drag.
    pub rotate_sensitivity: f32,
    /// Radius multiplier per wheel notch toward the target.
    pub zoom_step: f32,
    /// Screen-plane pan per pixel, as a fraction of the orbit radius.
    pub pan_sensitivity: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    /// Vertical drag moves the camera the opposite way.
    pub invert_polar: bool,
}

impl Default for OrbitControllerOptions {
    fn default() -> Self {
        Self::from(&CameraConfig::default())
    }
}

impl From<&CameraConfig> for OrbitControllerOptions {
    fn from(config: &CameraConfig) -> Self {
        Self {
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping_factor: config.damping_factor,
            enable_damping: config.enable_damping,
            enable_pan: config.enable_pan,
            rotate_sensitivity: config.rotate_sensitivity,
            zoom_step: config.zoom_step,
            pan_sensitivity: config.pan_sensitivity,
            min_polar: config.min_polar,
            max_polar: config.max_polar,
            invert_polar: false,
        }
        .normalized()
    }
}

impl OrbitControllerOptions {
    /// Repair inconsistent settings: reversed bounds are swapped, polar
    /// bounds are pushed strictly inside `(0, pi)`, distances are kept
    /// positive and the damping factor is clamped to `(0, 1]`.
    pub fn normalized(mut self) -> Self {
        if self.min_distance > self.max_distance {
            std::mem::swap(&mut self.min_distance, &mut self.max_distance);
        }
        self.min_distance = self.min_distance.max(POLE_EPSILON);
        self.max_distance = self.max_distance.max(self.min_distance);

        if self.min_polar > self.max_polar {
            std::mem::swap(&mut self.min_polar, &mut self.max_polar);
        }
        self.min_polar = self.min_polar.clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self.max_polar = self.max_polar.clamp(self.min_polar, PI - POLE_EPSILON);

        if self.damping_factor.is_nan() || self.damping_factor <= 0.0 {
            self.damping_factor = 1.0;
        }
        self.damping_factor = self.damping_factor.min(1.0);

        if self.zoom_step.is_nan() || self.zoom_step <= 0.0 {
            self.zoom_step = 1.0;
        }
        self
    }

    fn polar_bounds(&self) -> (f32, f32) {
        (self.min_polar, self.max_polar)
    }

    fn distance_bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragState {
    Idle,
    Rotating { last: Vec2 },
    Panning { last: Vec2 },
}

/// Spherical orbit camera around a look-at target.
#[derive(Clone, Debug)]
pub struct OrbitController {
    camera: Camera,
    target: Vec3,
    options: OrbitControllerOptions,
    /// x = azimuth, y = polar, in radians.
    pending_rotation: Vec2,
    /// Multiplicative radius change, 1.0 when idle.
    pending_zoom: f32,
    /// Screen-space pan in pixels.
    pending_pan: Vec2,
    drag: DragState,
    flight: Option<CameraFlight>,
}

impl OrbitController {
    /// Wrap `camera`, orbiting `target`. The camera is immediately snapped
    /// into the configured bounds and aimed at the target.
    pub fn new(mut camera: Camera, target: Vec3, options: OrbitControllerOptions) -> Self {
        let options = options.normalized();
        let mut offset = Spherical::from_vec3(camera.position - target);
        if offset.radius <= f32::EPSILON {
            offset = Spherical::new(options.max_distance, PI * 0.5, 0.0);
        }
        let offset = offset.clamped(options.polar_bounds(), options.distance_bounds());
        camera.position = target + offset.to_vec3();
        camera.look_at(target);

        Self {
            camera,
            target,
            options,
            pending_rotation: Vec2::ZERO,
            pending_zoom: 1.0,
            pending_pan: Vec2::ZERO,
            drag: DragState::Idle,
            flight: None,
        }
    }

    /// Controller built from the `camera` config section, starting on the
    /// equator at `start_distance` from the origin.
    pub fn from_config(config: &CameraConfig, aspect_ratio: f32) -> Self {
        let mut camera = Camera::perspective(config.fov_y_deg, aspect_ratio);
        camera.position = Spherical::new(config.start_distance, PI * 0.5, 0.0).to_vec3();
        Self::new(camera, Vec3::ZERO, OrbitControllerOptions::from(config))
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn options(&self) -> &OrbitControllerOptions {
        &self.options
    }

    /// Current camera offset from the target.
    pub fn spherical(&self) -> Spherical {
        Spherical::from_vec3(self.camera.position - self.target)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Pending azimuth/polar delta not yet applied or decayed.
    pub fn pending_rotation(&self) -> Vec2 {
        self.pending_rotation
    }

    /// Begin a drag. Cancels any active flight.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        if self.flight.take().is_some() {
            tracing::debug!("Camera flight cancelled by pointer");
        }
        self.drag = match event.button {
            PointerButton::Primary => DragState::Rotating {
                last: event.position,
            },
            PointerButton::Secondary if self.options.enable_pan => DragState::Panning {
                last: event.position,
            },
            _ => DragState::Idle,
        };
    }

    /// Accumulate drag movement. Ignored when no drag is active.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        match &mut self.drag {
            DragState::Idle => {}
            DragState::Rotating { last } => {
                let delta = event.position - *last;
                *last = event.position;
                let s = self.options.rotate_sensitivity;
                let dy = if self.options.invert_polar { delta.y } else { -delta.y };
                self.pending_rotation += Vec2::new(-delta.x * s, dy * s);
            }
            DragState::Panning { last } => {
                let delta = event.position - *last;
                *last = event.position;
                self.pending_pan += delta;
            }
        }
    }

    pub fn on_pointer_up(&mut self, _event: &PointerEvent) {
        self.drag = DragState::Idle;
    }

    pub fn on_pointer_leave(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Queue a zoom. Positive notches move toward the target. Ignored while
    /// a flight owns the camera.
    pub fn on_wheel(&mut self, event: &WheelEvent) {
        if self.flight.is_some() || !event.notches.is_finite() {
            return;
        }
        self.dolly(self.options.zoom_step.powf(event.notches));
    }

    /// Queue an angular change in radians.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.pending_rotation += Vec2::new(d_azimuth, d_polar);
    }

    /// Queue a multiplicative radius change. Non-positive scales are ignored.
    pub fn dolly(&mut self, scale: f32) {
        if scale > 0.0 && scale.is_finite() {
            self.pending_zoom *= scale;
        }
    }

    /// Queue a screen-plane pan in pixels. Ignored unless panning is enabled.
    pub fn pan(&mut self, delta_px: Vec2) {
        if self.options.enable_pan {
            self.pending_pan += delta_px;
        }
    }

    /// Fly the camera to `destination` over `duration_ms`.
    ///
    /// Ends any drag and discards pending deltas. The destination is first
    /// clamped into the distance and polar bounds so the camera stays put
    /// when normal updates resume.
    pub fn fly_to(&mut self, destination: Vec3, duration_ms: u32) {
        self.drag = DragState::Idle;
        self.pending_rotation = Vec2::ZERO;
        self.pending_zoom = 1.0;
        self.pending_pan = Vec2::ZERO;

        let mut offset = Spherical::from_vec3(destination - self.target);
        if offset.radius <= f32::EPSILON {
            offset = self.spherical();
        }
        let offset = offset.clamped(self.options.polar_bounds(), self.options.distance_bounds());
        let to = self.target + offset.to_vec3();

        tracing::debug!(
            from = ?self.camera.position,
            to = ?to,
            duration_ms,
            "Camera flight started"
        );
        self.flight = Some(CameraFlight::new(
            self.target,
            self.camera.position,
            to,
            duration_ms,
            EasingFunction::EaseOutCubic,
        ));
    }

    /// Advance one frame. `elapsed` is the frame time in seconds; it drives
    /// flights, while damping is applied per frame.
    pub fn update(&mut self, elapsed: f32) {
        if let Some(flight) = &mut self.flight {
            let sample = flight.advance(elapsed);
            self.camera.position = if flight.is_finished() {
                flight.to
            } else {
                let offset = Spherical::from_vec3(sample - self.target)
                    .clamped(self.options.polar_bounds(), self.options.distance_bounds());
                self.target + offset.to_vec3()
            };
            self.camera.look_at(self.target);
            if flight.is_finished() {
                self.flight = None;
                tracing::debug!("Camera flight finished");
            }
            return;
        }

        let mut offset = Spherical::from_vec3(self.camera.position - self.target);
        offset.azimuth += self.pending_rotation.x;
        offset.polar += self.pending_rotation.y;
        offset.radius *= self.pending_zoom;
        self.pending_zoom = 1.0;
        let offset = offset.clamped(self.options.polar_bounds(), self.options.distance_bounds());

        if self.pending_pan != Vec2::ZERO {
            let scale = self.options.pan_sensitivity * offset.radius;
            let shift = self.camera.right() * (-self.pending_pan.x * scale)
                + self.camera.up() * (self.pending_pan.y * scale);
            self.target += shift;
        }

        self.camera.position = self.target + offset.to_vec3();
        self.camera.look_at(self.target);

        if self.options.enable_damping {
            let keep = 1.0 - self.options.damping_factor;
            self.pending_rotation *= keep;
            self.pending_pan *= keep;
            if self.pending_rotation.length() < SETTLE_EPSILON {
                self.pending_rotation = Vec2::ZERO;
            }
            if self.pending_pan.length() < SETTLE_EPSILON {
                self.pending_pan = Vec2::ZERO;
            }
        } else {
            self.pending_rotation = Vec2::ZERO;
            self.pending_pan = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn controller(options: OrbitControllerOptions) -> OrbitController {
        let camera = Camera {
            position: Vec3::new(0.0, 0.0, 3.0),
            ..Camera::default()
        };
        OrbitController::new(camera, Vec3::ZERO, options)
    }

    #[test]
    fn test_polar_clamps_to_min_after_large_drag() {
        let mut ctl = controller(OrbitControllerOptions::default());
        assert!((ctl.spherical().polar - FRAC_PI_2).abs() < 1e-5);
        ctl.rotate(0.0, -10.0 * PI);
        ctl.update(1.0 / 60.0);
        assert!((ctl.spherical().polar - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_polar_stays_in_bounds_for_any_drag() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.on_pointer_down(&PointerEvent::primary(400.0, 300.0));
        let mut y = 300.0;
        for i in 0..200 {
            y += if i % 40 < 20 { 97.0 } else { -131.0 };
            ctl.on_pointer_move(&PointerEvent::primary(400.0 + i as f32, y));
            ctl.update(1.0 / 60.0);
            let polar = ctl.spherical().polar;
            assert!((0.1 - 1e-4..=PI - 0.1 + 1e-4).contains(&polar), "polar {polar}");
        }
    }

    #[test]
    fn test_radius_stays_in_bounds_for_any_wheel_sequence() {
        let mut ctl = controller(OrbitControllerOptions::default());
        for notches in [50.0, -3.0, -200.0, 7.5, 1.0, -1.0, 400.0] {
            ctl.on_wheel(&WheelEvent { notches });
            ctl.update(1.0 / 60.0);
            let r = ctl.spherical().radius;
            assert!((1.3 - 1e-4..=10.0 + 1e-4).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn test_wheel_zooms_in_with_positive_notches() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.on_wheel(&WheelEvent { notches: 2.0 });
        ctl.update(0.016);
        let expected = 3.0 * 0.95f32.powi(2);
        assert!((ctl.spherical().radius - expected).abs() < 1e-4);
        ctl.update(0.016);
        assert!((ctl.spherical().radius - expected).abs() < 1e-4, "zoom applied once");
    }

    #[test]
    fn test_damping_decays_pending_rotation() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.rotate(0.2, 0.0);
        let start_az = ctl.spherical().azimuth;
        ctl.update(0.016);
        assert!((ctl.pending_rotation().x - 0.18).abs() < 1e-6);
        let after_first = ctl.spherical().azimuth;
        ctl.update(0.016);
        let after_second = ctl.spherical().azimuth;
        assert!((after_first - start_az - 0.2).abs() < 1e-4);
        assert!((after_second - after_first - 0.18).abs() < 1e-4);

        for _ in 0..400 {
            ctl.update(0.016);
        }
        assert_eq!(ctl.pending_rotation(), Vec2::ZERO);
    }

    #[test]
    fn test_without_damping_delta_is_consumed() {
        let mut ctl = controller(OrbitControllerOptions {
            enable_damping: false,
            ..OrbitControllerOptions::default()
        });
        ctl.rotate(0.3, 0.0);
        ctl.update(0.016);
        let az = ctl.spherical().azimuth;
        assert!((az - 0.3).abs() < 1e-4);
        ctl.update(0.016);
        assert!((ctl.spherical().azimuth - az).abs() < 1e-6);
    }

    #[test]
    fn test_drag_only_while_pressed() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.on_pointer_move(&PointerEvent::primary(10.0, 10.0));
        assert_eq!(ctl.pending_rotation(), Vec2::ZERO);

        ctl.on_pointer_down(&PointerEvent::primary(10.0, 10.0));
        assert!(ctl.is_dragging());
        ctl.on_pointer_move(&PointerEvent::primary(30.0, 10.0));
        assert!((ctl.pending_rotation().x + 20.0 * 0.005).abs() < 1e-6);

        ctl.on_pointer_leave();
        assert!(!ctl.is_dragging());
        let pending = ctl.pending_rotation();
        ctl.on_pointer_move(&PointerEvent::primary(90.0, 90.0));
        assert_eq!(ctl.pending_rotation(), pending);
    }

    #[test]
    fn test_invert_polar_flips_vertical_drag() {
        let mut ctl = controller(OrbitControllerOptions {
            invert_polar: true,
            ..OrbitControllerOptions::default()
        });
        ctl.on_pointer_down(&PointerEvent::primary(0.0, 0.0));
        ctl.on_pointer_move(&PointerEvent::primary(0.0, 10.0));
        assert!(ctl.pending_rotation().y > 0.0);
    }

    #[test]
    fn test_secondary_drag_pans_only_when_enabled() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.on_pointer_down(&PointerEvent::secondary(0.0, 0.0));
        assert!(!ctl.is_dragging());

        let mut ctl = controller(OrbitControllerOptions {
            enable_pan: true,
            enable_damping: false,
            ..OrbitControllerOptions::default()
        });
        ctl.on_pointer_down(&PointerEvent::secondary(0.0, 0.0));
        ctl.on_pointer_move(&PointerEvent::secondary(100.0, 0.0));
        ctl.update(0.016);
        assert!(ctl.target().x < 0.0, "dragging right moves the target left");
        assert!((ctl.spherical().radius - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_fly_to_lands_exactly_and_approaches_monotonically() {
        let mut ctl = controller(OrbitControllerOptions::default());
        let target = Spherical::new(2.0, 1.0, 2.0).to_vec3();
        ctl.fly_to(target, 1500);
        assert!(ctl.is_flying());

        let mut prev = ctl.camera().position.distance(target);
        while ctl.is_flying() {
            ctl.update(1.0 / 60.0);
            let d = ctl.camera().position.distance(target);
            assert!(d <= prev + 1e-5);
            prev = d;
        }
        assert!(ctl.camera().position.distance(target) < 1e-5);

        ctl.update(1.0 / 60.0);
        assert!(ctl.camera().position.distance(target) < 1e-4, "no jump after landing");
    }

    #[test]
    fn test_fly_to_far_side_keeps_radius_in_bounds() {
        let mut ctl = controller(OrbitControllerOptions::default());
        let target = Vec3::new(0.0, 0.0, -3.0);
        ctl.fly_to(target, 1500);

        let mut min_radius = f32::INFINITY;
        while ctl.is_flying() {
            ctl.update(1.0 / 60.0);
            let s = ctl.spherical();
            min_radius = min_radius.min(s.radius);
            assert!((0.1 - 1e-4..=PI - 0.1 + 1e-4).contains(&s.polar), "polar {}", s.polar);
        }
        assert!(min_radius >= 1.3 - 1e-4, "camera dipped to radius {min_radius}");
        assert!(ctl.camera().position.distance(target) < 1e-5);
    }

    #[test]
    fn test_fly_to_destination_is_clamped() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.fly_to(Vec3::new(0.0, 50.0, 0.0), 0);
        ctl.update(0.016);
        let s = ctl.spherical();
        assert!((s.radius - 10.0).abs() < 1e-4);
        assert!((s.polar - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_down_cancels_flight() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.fly_to(Vec3::new(5.0, 0.0, 0.0), 1000);
        ctl.update(0.1);
        ctl.on_pointer_down(&PointerEvent::primary(0.0, 0.0));
        assert!(!ctl.is_flying());
        assert!(ctl.is_dragging());
    }

    #[test]
    fn test_fly_to_ends_drag_and_discards_pending() {
        let mut ctl = controller(OrbitControllerOptions::default());
        ctl.on_pointer_down(&PointerEvent::primary(0.0, 0.0));
        ctl.on_pointer_move(&PointerEvent::primary(50.0, 20.0));
        ctl.fly_to(Vec3::new(0.0, 0.0, 5.0), 500);
        assert!(!ctl.is_dragging());
        assert_eq!(ctl.pending_rotation(), Vec2::ZERO);
    }

    #[test]
    fn test_options_normalized() {
        let opts = OrbitControllerOptions {
            min_distance: 8.0,
            max_distance: 2.0,
            min_polar: -1.0,
            max_polar: 5.0,
            damping_factor: 0.0,
            ..OrbitControllerOptions::default()
        }
        .normalized();
        assert_eq!((opts.min_distance, opts.max_distance), (2.0, 8.0));
        assert!(opts.min_polar > 0.0 && opts.max_polar < PI);
        assert_eq!(opts.damping_factor, 1.0);
    }

    #[test]
    fn test_from_config_starts_on_equator() {
        let ctl = OrbitController::from_config(&CameraConfig::default(), 16.0 / 9.0);
        let s = ctl.spherical();
        assert!((s.radius - 3.0).abs() < 1e-5);
        assert!((s.polar - FRAC_PI_2).abs() < 1e-5);
        assert!((ctl.camera().fov_y - 45f32.to_radians()).abs() < 1e-6);
    }
}
