use glam::Vec3;

use super::Camera;

/// Distance at which a `width` x `height` rectangle centered on the view
/// axis fills the viewport on its tighter axis, plus `margin`.
///
/// Returns `None` for an empty rectangle or a degenerate lens.
#[must_use]
pub fn fit_distance(
    width: f32,
    height: f32,
    fovy_degrees: f32,
    aspect: f32,
    margin: f32,
) -> Option<f32> {
    if width <= 0.0 || height <= 0.0 || aspect <= 0.0 {
        return None;
    }
    let half_tan = (fovy_degrees.to_radians() / 2.0).tan();
    if !half_tan.is_finite() || half_tan <= 0.0 {
        return None;
    }
    let for_width = width / 2.0 / (half_tan * aspect);
    let for_height = height / 2.0 / half_tan;
    Some(for_width.max(for_height) + margin)
}

impl Camera {
    /// Back the camera straight down +Z until a grid of the given extents
    /// fits the viewport, holding the eye at `eye_height`.
    ///
    /// Returns whether the camera moved.
    pub fn frame_grid(
        &mut self,
        width: f32,
        height: f32,
        eye_height: f32,
        margin: f32,
    ) -> bool {
        let Some(distance) =
            fit_distance(width, height, self.fovy, self.aspect, margin)
        else {
            return false;
        };
        self.position = Vec3::new(0.0, eye_height, distance);
        self.look_at_target();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tighter_axis_wins() {
        let tan = (45f32.to_radians() / 2.0).tan();
        // wide viewport: height constrains
        let d = fit_distance(4.0, 4.0, 45.0, 2.0, 0.0).unwrap();
        assert!((d - 2.0 / tan).abs() < 1e-4);
        // tall viewport: width constrains
        let d = fit_distance(4.0, 4.0, 45.0, 0.5, 1.5).unwrap();
        assert!((d - (2.0 / (tan * 0.5) + 1.5)).abs() < 1e-4);
    }

    #[test]
    fn distance_grows_as_viewport_narrows() {
        let wide = fit_distance(13.24, 5.75, 45.0, 16.0 / 9.0, 1.5).unwrap();
        let narrow = fit_distance(13.24, 5.75, 45.0, 9.0 / 16.0, 1.5).unwrap();
        assert!(narrow > wide);
    }

    #[test]
    fn empty_grid_is_not_framed() {
        assert_eq!(fit_distance(0.0, 1.4, 45.0, 1.0, 1.5), None);
        let mut camera = Camera::default();
        let before = camera;
        assert!(!camera.frame_grid(0.0, 0.0, 0.1, 1.5));
        assert_eq!(camera, before);
    }

    #[test]
    fn framing_sets_the_eye_on_the_axis() {
        let mut camera = Camera::default();
        assert!(camera.frame_grid(13.24, 5.75, 0.1, 1.5));
        assert_eq!(camera.position.x, 0.0);
        assert_eq!(camera.position.y, 0.1);
        assert!(camera.position.z > 4.0);
    }
}
