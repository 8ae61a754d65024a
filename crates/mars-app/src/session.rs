//! Scripted headless session.
//!
//! Drives a [`SceneContext`] through the same path a windowed host would:
//! raw winit mouse events go into a [`PointerState`], which is drained into
//! the scene once per frame before the frame loop advances it.

use std::path::PathBuf;
use std::time::Duration;

use glam::Vec2;
use mars_camera::Spherical;
use mars_input::PointerState;
use mars_scene::{PickHit, SatelliteMarker, SceneContext, SceneError};
use mars_surface::{SurfaceWorker, export_png};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

use crate::error::AppError;
use crate::frame_loop::{FrameLoop, FrameStatus};

/// Frame time used by the headless session, in seconds.
pub const HEADLESS_FRAME_TIME: f64 = 1.0 / 60.0;

/// One scripted user action.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptAction {
    /// Press at `from`, move in `steps` increments to `to`, release.
    Drag { from: Vec2, to: Vec2, steps: u32 },
    /// Turn the wheel; positive zooms in.
    Wheel(f32),
    /// Press and release in place.
    Click(Vec2),
    SelectSite(&'static str),
    FocusSatellite(&'static str),
}

/// An action applied at the start of a given frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedInput {
    pub frame: u32,
    pub action: ScriptAction,
}

/// The stock demo: orbit by dragging, zoom in, click the globe, fly to
/// Jezero, then follow Phobos. Actions are spread over `frames`.
pub fn default_script(frames: u32, viewport: Vec2) -> Vec<ScriptedInput> {
    let center = viewport * 0.5;
    let at = |fraction: f32| (frames as f32 * fraction) as u32;
    vec![
        ScriptedInput {
            frame: at(0.05),
            action: ScriptAction::Drag {
                from: center,
                to: center + Vec2::new(-160.0, 40.0),
                steps: 8,
            },
        },
        ScriptedInput {
            frame: at(0.2),
            action: ScriptAction::Wheel(4.0),
        },
        ScriptedInput {
            frame: at(0.3),
            action: ScriptAction::Click(center),
        },
        ScriptedInput {
            frame: at(0.4),
            action: ScriptAction::SelectSite("jezero-crater"),
        },
        ScriptedInput {
            frame: at(0.75),
            action: ScriptAction::FocusSatellite("phobos"),
        },
    ]
}

/// Final state of a session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub frames_run: u64,
    pub waiting_frames: u64,
    pub camera: Spherical,
    pub selection: Option<&'static str>,
    pub clicks: Vec<PickHit>,
    pub satellites: Vec<SatelliteMarker>,
}

/// A scene, its frame loop and the pending surface job.
pub struct Session {
    scene: SceneContext,
    frame_loop: FrameLoop,
    pointer: PointerState,
    worker: Option<SurfaceWorker>,
    script: Vec<ScriptedInput>,
    clicks: Vec<PickHit>,
    export_dir: Option<PathBuf>,
}

impl Session {
    /// `worker` may be `None` when maps were attached up front.
    pub fn new(
        scene: SceneContext,
        worker: Option<SurfaceWorker>,
        mut script: Vec<ScriptedInput>,
    ) -> Self {
        script.sort_by_key(|step| step.frame);
        let mut pointer = PointerState::new();
        pointer.on_cursor_entered();
        Self {
            scene,
            frame_loop: FrameLoop::new(),
            pointer,
            worker,
            script,
            clicks: Vec::new(),
            export_dir: None,
        }
    }

    /// Write the surface maps as PNGs into `dir` once they are ready.
    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.export_dir = dir;
        self
    }

    pub fn scene(&self) -> &SceneContext {
        &self.scene
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Attach the worker's maps if they are done. A failed job is fatal.
    pub fn poll_surface(&mut self) -> Result<(), AppError> {
        let Some(worker) = &mut self.worker else {
            return Ok(());
        };
        if let Some(result) = worker.try_take() {
            self.worker = None;
            self.scene.attach_surface(result?)?;
        }
        Ok(())
    }

    /// Wait for the surface, then run `frames` scripted frames.
    pub fn run(&mut self, frames: u32) -> Result<SessionReport, AppError> {
        self.wait_for_surface()?;

        let mut next_step = 0;
        for frame in 0..frames {
            while let Some(step) = self.script.get(next_step).filter(|s| s.frame <= frame) {
                let action = step.action.clone();
                next_step += 1;
                self.apply(&action)?;
            }
            self.dispatch_input();
            self.frame_loop.advance(HEADLESS_FRAME_TIME, &mut self.scene)?;

            if frame % 60 == 0 {
                let s = self.scene.controller().spherical();
                tracing::debug!(
                    frame,
                    radius = s.radius,
                    polar = s.polar,
                    azimuth = s.azimuth,
                    flying = self.scene.controller().is_flying(),
                    "Camera"
                );
            }
        }

        let report = SessionReport {
            frames_run: self.frame_loop.frame_count(),
            waiting_frames: self.frame_loop.waiting_frames(),
            camera: self.scene.controller().spherical(),
            selection: self.scene.selection().map(|s| s.id()),
            clicks: self.clicks.clone(),
            satellites: self.scene.satellite_positions(),
        };
        tracing::info!(
            frames = report.frames_run,
            waiting = report.waiting_frames,
            sim_time = self.scene.sim_time(),
            "Session finished"
        );
        Ok(report)
    }

    fn wait_for_surface(&mut self) -> Result<(), AppError> {
        loop {
            self.poll_surface()?;
            if self.scene.is_ready() {
                if let Some(dir) = self.export_dir.take()
                    && let Some(maps) = self.scene.surface()
                {
                    export_png(maps, &dir)?;
                }
                return Ok(());
            }
            if self.worker.is_none() {
                return Err(SceneError::TexturesNotReady.into());
            }
            let status = self.frame_loop.advance(HEADLESS_FRAME_TIME, &mut self.scene)?;
            if status == FrameStatus::Waiting {
                std::thread::sleep(Duration::from_secs_f64(HEADLESS_FRAME_TIME));
            }
        }
    }

    fn apply(&mut self, action: &ScriptAction) -> Result<(), AppError> {
        match action {
            ScriptAction::Drag { from, to, steps } => {
                self.move_cursor(*from);
                self.pointer.on_button(MouseButton::Left, ElementState::Pressed);
                let steps = (*steps).max(1);
                for i in 1..=steps {
                    self.move_cursor(from.lerp(*to, i as f32 / steps as f32));
                }
                self.pointer.on_button(MouseButton::Left, ElementState::Released);
            }
            ScriptAction::Wheel(notches) => {
                self.pointer.on_scroll(MouseScrollDelta::LineDelta(0.0, *notches));
            }
            ScriptAction::Click(position) => {
                self.move_cursor(*position);
                self.pointer.on_button(MouseButton::Left, ElementState::Pressed);
                self.pointer.on_button(MouseButton::Left, ElementState::Released);
            }
            ScriptAction::SelectSite(id) => {
                self.scene.select_site(id)?;
            }
            ScriptAction::FocusSatellite(id) => {
                self.scene.focus_satellite(id)?;
            }
        }
        Ok(())
    }

    fn move_cursor(&mut self, position: Vec2) {
        self.pointer
            .on_cursor_moved(f64::from(position.x), f64::from(position.y));
    }

    fn dispatch_input(&mut self) {
        for event in self.pointer.drain_events() {
            if let Some(hit) = self.scene.handle_pointer(&event) {
                tracing::info!(?hit, "Picked");
                self.clicks.push(hit);
            }
        }
    }
}
