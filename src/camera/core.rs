use glam::{Mat4, Quat, Vec3};

use crate::options::CameraOptions;

/// Viewport aspect ratio assumed until the host reports its size.
pub const DEFAULT_ASPECT: f32 = 1.6;

/// Perspective camera defined by a world-space pose, an orbit target, and
/// projection parameters.
///
/// The engine writes it during camera transitions and grid refits; at all
/// other times it belongs to whatever orbit control the host runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// World-space orientation; the camera looks down its local -Z.
    pub orientation: Quat,
    /// Orbit target the host's controls pivot around.
    pub target: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Camera at the configured start pose, looking at the origin.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(options.start_position),
            orientation: Quat::IDENTITY,
            target: Vec3::ZERO,
            aspect: DEFAULT_ASPECT,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.look_at_target();
        camera
    }

    /// Turn the camera to face its orbit target, keeping +Y up.
    ///
    /// Leaves the orientation alone when the eye sits on the target.
    pub fn look_at_target(&mut self) {
        let offset = self.target - self.position;
        if offset.length_squared() <= f32::EPSILON {
            return;
        }
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.orientation = rotation.normalize();
    }

    /// Unit vector the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Unit up vector of the camera frame.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_looking_at_origin() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.1, 4.0));
        let to_target = (camera.target - camera.position).normalize();
        assert!(camera.forward().distance(to_target) < 1e-5);
        assert!(camera.up().y > 0.99);
        assert_eq!(camera.aspect, DEFAULT_ASPECT);
    }

    #[test]
    fn degenerate_look_at_keeps_orientation() {
        let mut camera = Camera {
            target: Vec3::new(0.0, 0.1, 4.0),
            orientation: Quat::from_rotation_y(0.5),
            ..Camera::default()
        };
        camera.look_at_target();
        assert_eq!(camera.orientation, Quat::from_rotation_y(0.5));
    }
}
