//! Timed glides from the current framing to a named view.

use super::{Camera, CameraView};
use crate::animation::EasingFunction;

/// Camera state captured when a glide starts, and where it is headed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    start: f32,
    duration: f32,
    from: Camera,
    to: CameraView,
}

impl CameraTransition {
    /// Capture `camera` at `start`, heading for `to`.
    #[must_use]
    pub fn capture(
        camera: &Camera,
        to: CameraView,
        start: f32,
        duration: f32,
    ) -> Self {
        Self {
            start,
            duration,
            from: *camera,
            to,
        }
    }

    /// Raw progress at `now`, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Write the blend at eased fraction `t` into `camera`.
    ///
    /// Aspect ratio is not part of a view and is left alone.
    pub fn apply(&self, camera: &mut Camera, t: f32) {
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        camera.position = self.from.position.lerp(self.to.position(), t);
        camera.orientation = self
            .from
            .orientation
            .slerp(self.to.orientation(), t)
            .normalize();
        camera.fovy = lerp(self.from.fovy, self.to.fov);
        camera.znear = lerp(self.from.znear, self.to.near);
        camera.zfar = lerp(self.from.zfar, self.to.far);
        camera.target = self.from.target.lerp(self.to.target(), t);
    }
}

/// Drives at most one [`CameraTransition`] at a time.
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    duration: f32,
    easing: EasingFunction,
    active: Option<CameraTransition>,
}

impl CameraAnimator {
    /// Idle animator with the given glide length and curve.
    #[must_use]
    pub fn new(duration: f32, easing: EasingFunction) -> Self {
        Self {
            duration,
            easing,
            active: None,
        }
    }

    /// Start gliding from `camera` to `view`, replacing any glide in flight.
    pub fn begin(&mut self, camera: &Camera, view: CameraView, now: f32) {
        log::debug!("camera transition started at t={now:.3}");
        self.active = Some(CameraTransition::capture(
            camera,
            view,
            now,
            self.duration,
        ));
    }

    /// Advance the glide to `now`, writing into `camera`. Returns whether a
    /// glide was applied this frame.
    ///
    /// The final frame lands exactly on the view and then drops the record.
    pub fn update(&mut self, camera: &mut Camera, now: f32) -> bool {
        let Some(transition) = &self.active else {
            return false;
        };
        let t = transition.progress(now);
        transition.apply(camera, self.easing.evaluate(t));
        if t >= 1.0 {
            log::debug!("camera transition finished at t={now:.3}");
            self.active = None;
        }
        true
    }

    /// Set the easing curve and the length of transitions started later.
    pub fn set_timing(&mut self, duration: f32, easing: EasingFunction) {
        self.duration = duration;
        self.easing = easing;
    }

    /// Whether a glide is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// The glide in flight, if any.
    #[must_use]
    pub fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CameraView {
        CameraView {
            position: [2.0, 6.0, 9.0],
            rotation: [-0.5, 0.2, 0.0],
            fov: 60.0,
            near: 0.5,
            far: 50.0,
            target: [0.0, 1.0, 0.0],
        }
    }

    #[test]
    fn glide_lands_on_the_view() {
        let mut camera = Camera::default();
        let start = camera;
        let mut animator = CameraAnimator::new(2.4, EasingFunction::SmoothStep);
        animator.begin(&camera, view(), 1.0);

        assert!(animator.update(&mut camera, 1.0));
        assert_eq!(camera.position, start.position);
        assert_eq!(camera.fovy, start.fovy);

        assert!(animator.update(&mut camera, 2.2));
        assert!(camera.fovy > 45.0 && camera.fovy < 60.0);

        assert!(animator.update(&mut camera, 3.5));
        assert!(!animator.is_transitioning());
        assert!(camera.position.distance(view().position()) < 1e-5);
        assert!(camera.orientation.angle_between(view().orientation()) < 1e-3);
        assert!((camera.zfar - 50.0).abs() < 1e-4);
        assert_eq!(camera.target, view().target());
        assert_eq!(camera.aspect, start.aspect);

        // idle afterwards
        assert!(!animator.update(&mut camera, 4.0));
    }

    #[test]
    fn new_glide_starts_from_current_camera() {
        let mut camera = Camera::default();
        let mut animator = CameraAnimator::new(2.4, EasingFunction::SmoothStep);
        animator.begin(&camera, view(), 0.0);
        let _ = animator.update(&mut camera, 1.2);
        let midway = camera.position;

        animator.begin(&camera, view(), 1.2);
        let _ = animator.update(&mut camera, 1.2);
        assert_eq!(camera.position, midway);

        // the restarted glide still ends on the view, from the midway point
        let _ = animator.update(&mut camera, 2.4);
        let along = camera.position - midway;
        let remaining = view().position() - midway;
        assert!(along.length() > 0.0);
        assert!(along.normalize().dot(remaining.normalize()) > 0.999);
        let _ = animator.update(&mut camera, 3.6);
        assert!(camera.position.distance(view().position()) < 1e-5);
    }
}
