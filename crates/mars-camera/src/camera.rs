//! Perspective camera: view and projection matrices plus picking rays.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

/// A perspective camera in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation as a unit quaternion; the camera looks down its local -Z.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Camera {
    /// Camera with the given vertical FOV in degrees and aspect ratio.
    pub fn perspective(fov_y_deg: f32, aspect_ratio: f32) -> Self {
        Self {
            fov_y: fov_y_deg.to_radians(),
            aspect_ratio,
            ..Self::default()
        }
    }

    /// Compute the view matrix (inverse of camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        (Mat4::from_translation(self.position) * Mat4::from_quat(self.rotation)).inverse()
    }

    /// Compute the projection matrix with reverse-Z (near maps to 1, far to 0).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.far, self.near)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The up direction vector (+Y in camera space).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// The right direction vector (+X in camera space).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Orient the camera toward `target`, keeping world +Y up.
    ///
    /// Does nothing when `target` coincides with the camera position.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        // Looking straight up or down: fall back to +Z as the up hint.
        let hint = if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let right = forward.cross(hint).normalize();
        let up = right.cross(forward);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
    }

    /// Update the aspect ratio from viewport size. Zero-height viewports are
    /// ignored.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    /// World-space ray through normalized device coordinates
    /// (`[-1, 1]` on both axes, +Y up).
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect_ratio;
        let direction = (self.forward()
            + self.right() * (ndc.x * half_w)
            + self.up() * (ndc.y * half_h))
            .normalize_or_zero();
        Ray {
            origin: self.position,
            direction,
        }
    }

    /// Project a world point to NDC. `None` when it is behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection_matrix() * world.extend(1.0);
        (clip.w > 0.0).then(|| Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect_ratio: 16.0 / 9.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}
