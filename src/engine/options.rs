//! Options methods for DeckEngine

use super::DeckEngine;
use crate::animation::RenderedPoses;
use crate::camera::CameraViewTable;
use crate::formation::FormationLibrary;
use crate::layout::compute_grid_layout;
use crate::options::Options;

impl DeckEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    ///
    /// A layout change replans the grid and redraws every formation's
    /// per-card randomness against the new bounds; cards then glide to the
    /// new slots through a regular crossfade.
    pub fn set_options(&mut self, new: Options) {
        let relayout = new.layout != self.options.layout;
        self.options = new;
        if relayout {
            self.apply_layout();
        }
        self.apply_timing();
        self.apply_camera();
        self.views = CameraViewTable::from_named(&self.options.views);
    }

    /// Replan the grid and recreate formation states for the same deck.
    fn apply_layout(&mut self) {
        let count = self.card_count();
        self.grid = compute_grid_layout(count, &self.options.layout);
        self.formations =
            FormationLibrary::create(count, &self.grid.bounds(), &mut self.rng);
        if self.rendered.len() != count {
            self.rendered = RenderedPoses::at_positions(&self.grid.positions);
        }
        self.pose_animator.begin(&self.rendered, self.now);
        log::info!(
            "grid replanned: {} rows x {} columns",
            self.grid.rows,
            self.grid.columns
        );
    }

    /// Push transition durations and curves to both animators.
    fn apply_timing(&mut self) {
        let t = &self.options.transition;
        self.pose_animator.set_timing(t.duration_secs, t.easing);
        let c = &self.options.camera;
        self.camera_animator.set_timing(c.transition_secs, c.easing);
    }

    /// Push lens options to the camera and refit it to the grid.
    ///
    /// Skipped while a glide is in flight; the glide owns the lens until it
    /// lands.
    fn apply_camera(&mut self) {
        if self.camera_animator.is_transitioning() {
            return;
        }
        let co = &self.options.camera;
        self.camera.fovy = co.fovy;
        self.camera.znear = co.znear;
        self.camera.zfar = co.zfar;
        let _ = self.camera.frame_grid(
            self.grid.width,
            self.grid.height,
            co.eye_height,
            co.fit_margin,
        );
    }
}
