//! Variable-timestep frame loop.
//!
//! Every frame hands the scene the wall-clock time since the previous one.
//! Frames are gated: until surface maps are attached the scene is not
//! ticked and the frame counts as waiting.

use std::time::Instant;

use mars_scene::{SceneContext, SceneError};
use tracing::warn;

/// Longest frame time handed to the scene. Longer frames (debugger pauses,
/// window drags) are clamped so damping and flights do not jump.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// The scene advanced.
    Ran,
    /// Surface maps are not attached yet; nothing advanced.
    Waiting,
}

/// Frame loop state.
pub struct FrameLoop {
    previous_time: Instant,
    frame_count: u64,
    waiting_frames: u64,
    total_time: f64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            frame_count: 0,
            waiting_frames: 0,
            total_time: 0.0,
        }
    }

    /// Run one frame using the wall-clock time since the previous call.
    pub fn tick(&mut self, scene: &mut SceneContext) -> Result<FrameStatus, SceneError> {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, scene)
    }

    /// Run one frame with an explicit frame time in seconds.
    pub fn advance(
        &mut self,
        frame_time: f64,
        scene: &mut SceneContext,
    ) -> Result<FrameStatus, SceneError> {
        let mut frame_time = if frame_time.is_finite() { frame_time.max(0.0) } else { 0.0 };
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        if !scene.is_ready() {
            self.waiting_frames += 1;
            return Ok(FrameStatus::Waiting);
        }

        scene.tick(frame_time as f32)?;
        self.total_time += frame_time;
        self.frame_count += 1;
        Ok(FrameStatus::Ran)
    }

    /// Frames that advanced the scene.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames skipped while surface maps were pending.
    pub fn waiting_frames(&self) -> u64 {
        self.waiting_frames
    }

    /// Seconds handed to the scene so far, after clamping.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars_config::Config;
    use mars_surface::generate_surface_maps;

    const FRAME: f64 = 1.0 / 60.0;

    fn ready_scene() -> SceneContext {
        let mut scene = SceneContext::new(&Config::default());
        scene
            .attach_surface(generate_surface_maps(3, 16, 8).unwrap())
            .unwrap();
        scene
    }

    #[test]
    fn test_waits_until_surface_attached() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = SceneContext::new(&Config::default());
        for _ in 0..3 {
            assert_eq!(frame_loop.advance(FRAME, &mut scene).unwrap(), FrameStatus::Waiting);
        }
        assert_eq!(frame_loop.waiting_frames(), 3);
        assert_eq!(frame_loop.frame_count(), 0);

        scene
            .attach_surface(generate_surface_maps(3, 16, 8).unwrap())
            .unwrap();
        assert_eq!(frame_loop.advance(FRAME, &mut scene).unwrap(), FrameStatus::Ran);
        assert_eq!(frame_loop.frame_count(), 1);
    }

    #[test]
    fn test_long_frame_clamped() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = ready_scene();
        frame_loop.advance(5.0, &mut scene).unwrap();
        assert!((frame_loop.total_time() - MAX_FRAME_TIME).abs() < 1e-12);
    }

    #[test]
    fn test_negative_and_nan_frames_are_zero() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = ready_scene();
        frame_loop.advance(-1.0, &mut scene).unwrap();
        frame_loop.advance(f64::NAN, &mut scene).unwrap();
        assert_eq!(frame_loop.frame_count(), 2);
        assert_eq!(frame_loop.total_time(), 0.0);
    }

    #[test]
    fn test_total_time_accumulates() {
        let mut frame_loop = FrameLoop::new();
        let mut scene = ready_scene();
        for _ in 0..10 {
            frame_loop.advance(FRAME, &mut scene).unwrap();
        }
        assert!((frame_loop.total_time() - 10.0 * FRAME).abs() < 1e-10);
    }

    #[test]
    fn test_wall_clock_tick_runs() {
        let mut frame_loop = FrameLoop::default();
        let mut scene = ready_scene();
        assert_eq!(frame_loop.tick(&mut scene).unwrap(), FrameStatus::Ran);
        assert!(frame_loop.total_time() <= MAX_FRAME_TIME);
    }
}
