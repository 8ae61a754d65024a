//! Timed camera flights between two positions with easing.

use glam::{Quat, Vec3};

/// Easing curves for camera flights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EasingFunction {
    /// Constant speed, no acceleration.
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end (quadratic).
    EaseOut,
    /// Slow start, fast middle, slow end.
    EaseInOut,
    /// Fast start, long gentle landing: `1 - (1 - t)^3`.
    #[default]
    EaseOutCubic,
}

impl EasingFunction {
    /// Map a linear progress value (0.0..=1.0) to an eased value.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Moves the camera from `from` to `to` around `center` over a fixed
/// duration. Sampled once per frame with the frame's elapsed time.
///
/// The direction from `center` follows the great circle between the two
/// endpoints while the distance is interpolated linearly, both with the same
/// eased progress, so the path never cuts through a body at `center`. The
/// distance to `to` shrinks every frame whenever `to` is no farther from
/// `center` than `from`.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraFlight {
    pub center: Vec3,
    pub from: Vec3,
    pub to: Vec3,
    /// Total duration in seconds.
    pub duration: f32,
    /// Time flown so far in seconds.
    pub elapsed: f32,
    pub easing: EasingFunction,
}

impl CameraFlight {
    /// A flight lasting `duration_ms`. Zero duration lands on the first sample.
    pub fn new(
        center: Vec3,
        from: Vec3,
        to: Vec3,
        duration_ms: u32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            center,
            from,
            to,
            duration: duration_ms as f32 / 1000.0,
            elapsed: 0.0,
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Position at the current progress. Exactly `to` once finished.
    pub fn position(&self) -> Vec3 {
        let p = self.progress();
        if p >= 1.0 {
            return self.to;
        }
        let t = self.easing.apply(p);

        let start = self.from - self.center;
        let end = self.to - self.center;
        let (r0, r1) = (start.length(), end.length());
        if r0 <= f32::EPSILON || r1 <= f32::EPSILON {
            return self.from.lerp(self.to, t);
        }
        let (d0, d1) = (start / r0, end / r1);
        let arc = Quat::IDENTITY.slerp(Quat::from_rotation_arc(d0, d1), t);
        self.center + arc * d0 * (r0 + (r1 - r0) * t)
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt.max(0.0);
        self.position()
    }
}
