//! The runtime scene: camera, satellites, selection and surface maps.

use std::f32::consts::FRAC_PI_2;
use std::f64::consts::TAU;

use glam::{Vec2, Vec3};
use mars_camera::{Camera, OrbitController, OrbitControllerOptions, Spherical};
use mars_config::Config;
use mars_input::{ClickTracker, InputEvent, WheelEvent};
use mars_orbit::{OrbitDescriptor, OrbitScale, SATELLITES, SatelliteOrbit, find_satellite};
use mars_surface::{SurfaceError, SurfaceMaps};

use crate::atmosphere::{AtmosphereParams, AtmosphereUniform};
use crate::error::SceneError;
use crate::picking::{PickHit, PickTarget, pick};
use crate::sites::{SITES, SurfaceSite, find_site};
use crate::starfield::{Star, generate_starfield};

/// Marker hit spheres are this many times larger than drawn.
const PICK_SLOP: f32 = 2.0;

/// Camera distance, relative to a satellite's own radius, when focusing it.
const SATELLITE_FOCUS_FACTOR: f32 = 1.6;

/// The currently highlighted object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    Site(&'static SurfaceSite),
    Satellite(&'static OrbitDescriptor),
}

impl Selection {
    pub fn id(&self) -> &'static str {
        match self {
            Selection::Site(site) => site.id,
            Selection::Satellite(sat) => sat.id,
        }
    }
}

/// A surface site as the renderer draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteMarker {
    pub id: &'static str,
    pub name: &'static str,
    pub position: Vec3,
    pub color: [f32; 3],
    pub selected: bool,
}

/// A satellite as the renderer draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct SatelliteMarker {
    pub id: &'static str,
    pub name: &'static str,
    pub position: Vec3,
    pub color: [f32; 3],
    pub selected: bool,
}

/// All mutable scene state, passed explicitly to whoever needs it.
pub struct SceneContext {
    globe_radius: f32,
    marker_radius: f32,
    viewport: Vec2,
    controller: OrbitController,
    satellites: Vec<SatelliteOrbit>,
    time_scale: f64,
    path_segments: u32,
    fly_duration_ms: u32,
    stars: Vec<Star>,
    atmosphere: AtmosphereParams,
    surface: Option<SurfaceMaps>,
    selection: Option<Selection>,
    click: ClickTracker,
    sim_time: f64,
}

impl SceneContext {
    /// Build the scene from configuration. Surface maps arrive later via
    /// [`attach_surface`](Self::attach_surface).
    pub fn new(config: &Config) -> Self {
        let viewport = Vec2::new(
            config.window.width.max(1) as f32,
            config.window.height.max(1) as f32,
        );

        let mut options = OrbitControllerOptions::from(&config.camera);
        options.rotate_sensitivity *= config.input.mouse_sensitivity;
        options.invert_polar = config.input.invert_y;
        let mut camera = Camera::perspective(config.camera.fov_y_deg, viewport.x / viewport.y);
        camera.position = Spherical::new(config.camera.start_distance, FRAC_PI_2, 0.0).to_vec3();
        let controller = OrbitController::new(camera, Vec3::ZERO, options);

        let scale = OrbitScale::from_config(&config.orbit, f64::from(config.globe.radius));
        let count = SATELLITES.len() as f64;
        let satellites = SATELLITES
            .iter()
            .enumerate()
            .map(|(i, desc)| SatelliteOrbit::new(desc, &scale).with_phase(TAU * i as f64 / count))
            .collect();

        let stars = generate_starfield(
            config.starfield.seed,
            config.starfield.star_count,
            config.starfield.radius,
        );

        tracing::info!(
            satellites = SATELLITES.len(),
            sites = SITES.len(),
            stars = stars.len(),
            "Scene created"
        );

        Self {
            globe_radius: config.globe.radius,
            marker_radius: config.globe.marker_radius,
            viewport,
            controller,
            satellites,
            time_scale: config.orbit.time_scale,
            path_segments: config.orbit.path_segments,
            fly_duration_ms: config.camera.fly_duration_ms,
            stars,
            atmosphere: AtmosphereParams::from_config(&config.globe),
            surface: None,
            selection: None,
            click: ClickTracker::new(config.input.click_threshold_px),
            sim_time: 0.0,
        }
    }

    /// Install generated surface maps. All three must share dimensions.
    pub fn attach_surface(&mut self, maps: SurfaceMaps) -> Result<(), SceneError> {
        let dims = maps.dimensions();
        if let Some(tex) = maps.textures().into_iter().find(|t| t.image.dimensions() != dims) {
            return Err(SurfaceError::BufferSize { name: tex.name }.into());
        }
        tracing::info!(width = dims.0, height = dims.1, "Surface maps attached");
        self.surface = Some(maps);
        Ok(())
    }

    /// Whether surface maps are attached and frames may run.
    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&SurfaceMaps> {
        self.surface.as_ref()
    }

    /// Advance one frame by `elapsed` seconds.
    pub fn tick(&mut self, elapsed: f32) -> Result<(), SceneError> {
        if !self.is_ready() {
            return Err(SceneError::TexturesNotReady);
        }
        self.controller.update(elapsed);
        let dt = f64::from(elapsed.max(0.0));
        for sat in &mut self.satellites {
            sat.advance(dt, self.time_scale);
        }
        self.sim_time += dt * self.time_scale.max(0.0);
        Ok(())
    }

    /// Route one input event. A click (press and release without dragging)
    /// picks under the cursor and selects what it hits.
    pub fn handle_pointer(&mut self, event: &InputEvent) -> Option<PickHit> {
        match event {
            InputEvent::PointerDown(e) => {
                self.controller.on_pointer_down(e);
                self.click.on_down(e);
                None
            }
            InputEvent::PointerMove(e) => {
                self.controller.on_pointer_move(e);
                self.click.on_move(e);
                None
            }
            InputEvent::PointerUp(e) => {
                self.controller.on_pointer_up(e);
                let position = self.click.on_up(e)?;
                self.click_at(position)
            }
            InputEvent::PointerLeave => {
                self.controller.on_pointer_leave();
                self.click.cancel();
                None
            }
            InputEvent::Wheel(w) => {
                self.handle_wheel(w);
                None
            }
        }
    }

    pub fn handle_wheel(&mut self, event: &WheelEvent) {
        self.controller.on_wheel(event);
    }

    /// Select a site and fly the camera over it, keeping the current distance.
    pub fn select_site(&mut self, id: &str) -> Result<&'static SurfaceSite, SceneError> {
        let site = find_site(id).ok_or_else(|| SceneError::UnknownSite(id.to_string()))?;
        let distance = self.controller.spherical().radius;
        let destination = site.position(1.0) * distance;
        self.controller.fly_to(destination, self.fly_duration_ms);
        self.selection = Some(Selection::Site(site));
        tracing::info!(site = site.id, lat = site.lat, lon = site.lon, "Site selected");
        Ok(site)
    }

    /// Select a satellite and fly toward its current position.
    pub fn focus_satellite(&mut self, id: &str) -> Result<&'static OrbitDescriptor, SceneError> {
        let descriptor =
            find_satellite(id).ok_or_else(|| SceneError::UnknownSatellite(id.to_string()))?;
        let position = self
            .satellites
            .iter()
            .find(|s| s.descriptor().id == descriptor.id)
            .map(|s| s.position().as_vec3())
            .ok_or_else(|| SceneError::UnknownSatellite(id.to_string()))?;

        let current = self.controller.spherical().radius;
        let distance = (position.length() * SATELLITE_FOCUS_FACTOR).max(current);
        let direction = position.try_normalize().unwrap_or(Vec3::Z);
        self.controller.fly_to(direction * distance, self.fly_duration_ms);
        self.selection = Some(Selection::Satellite(descriptor));
        tracing::info!(satellite = descriptor.id, "Satellite focused");
        Ok(descriptor)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// What lies under normalized device coordinates `ndc`, without
    /// changing the selection.
    pub fn pick(&self, ndc: Vec2) -> Option<PickHit> {
        let ray = self.controller.camera().ray_through(ndc);
        let hit_radius = self.marker_radius * PICK_SLOP;
        let targets: Vec<PickTarget> = SITES
            .iter()
            .map(|site| PickTarget {
                hit: PickHit::Site(site.id),
                center: site.position(self.globe_radius),
                radius: hit_radius,
            })
            .chain(self.satellites.iter().map(|sat| PickTarget {
                hit: PickHit::Satellite(sat.descriptor().id),
                center: sat.position().as_vec3(),
                radius: hit_radius,
            }))
            .collect();
        pick(&ray, &targets, self.globe_radius)
    }

    /// Satellite markers at their current positions.
    pub fn satellite_positions(&self) -> Vec<SatelliteMarker> {
        let selected = self.selection.map(|s| s.id());
        self.satellites
            .iter()
            .map(|sat| {
                let d = sat.descriptor();
                SatelliteMarker {
                    id: d.id,
                    name: d.name,
                    position: sat.position().as_vec3(),
                    color: d.color_rgb(),
                    selected: selected == Some(d.id),
                }
            })
            .collect()
    }

    /// Orbit polylines for every orbiting body, keyed by satellite id.
    pub fn orbit_paths(&self) -> Vec<(&'static str, Vec<Vec3>)> {
        self.satellites
            .iter()
            .filter(|sat| !sat.descriptor().is_stationary())
            .map(|sat| {
                let points = sat
                    .orbit_path(self.path_segments)
                    .into_iter()
                    .map(|p| p.as_vec3())
                    .collect();
                (sat.descriptor().id, points)
            })
            .collect()
    }

    /// Site markers on the globe surface.
    pub fn site_markers(&self) -> Vec<SiteMarker> {
        let selected = self.selection.map(|s| s.id());
        SITES
            .iter()
            .map(|site| SiteMarker {
                id: site.id,
                name: site.name,
                position: site.position(self.globe_radius),
                color: site.color_rgb(),
                selected: selected == Some(site.id),
            })
            .collect()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn atmosphere_uniform(&self) -> AtmosphereUniform {
        self.atmosphere.to_uniform()
    }

    pub fn camera(&self) -> &Camera {
        self.controller.camera()
    }

    pub fn controller(&self) -> &OrbitController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut OrbitController {
        &mut self.controller
    }

    /// Simulated seconds elapsed, after time scaling.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Resize the viewport in pixels; updates the camera aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        self.controller
            .camera_mut()
            .set_aspect_ratio(self.viewport.x, self.viewport.y);
    }

    /// Pixel position (origin top-left) to normalized device coordinates.
    pub fn pixel_to_ndc(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * position.x / self.viewport.x - 1.0,
            1.0 - 2.0 * position.y / self.viewport.y,
        )
    }

    /// Normalized device coordinates to a pixel position.
    pub fn ndc_to_pixel(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }

    fn click_at(&mut self, position: Vec2) -> Option<PickHit> {
        let hit = self.pick(self.pixel_to_ndc(position))?;
        let result = match hit {
            PickHit::Site(id) => self.select_site(id).map(|_| ()),
            PickHit::Satellite(id) => self.focus_satellite(id).map(|_| ()),
            PickHit::Surface { lat, lon } => {
                tracing::debug!(lat, lon, "Surface clicked");
                Ok(())
            }
        };
        if let Err(err) = result {
            tracing::warn!(%err, "Click selection failed");
        }
        Some(hit)
    }
}
