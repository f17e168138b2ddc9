//! Read-only and camera access for hosts.

use super::DeckEngine;
use crate::animation::{FlipOverrides, RenderedPoses};
use crate::camera::{Camera, CameraView, CameraViewTable};
use crate::formation::PoseArrays;
use crate::layout::GridLayout;
use crate::mode::Mode;

impl DeckEngine {
    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fixed deck size.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rendered.len()
    }

    /// Card poses produced by the most recent update.
    #[must_use]
    pub fn poses(&self) -> &RenderedPoses {
        &self.rendered
    }

    /// Raw output of the active formation's last step (after collision
    /// relaxation), or `None` in grid mode.
    #[must_use]
    pub fn formation_poses(&self) -> Option<&PoseArrays> {
        self.formations.poses(self.mode)
    }

    /// Planned grid layout.
    #[must_use]
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Grid flip overrides.
    #[must_use]
    pub fn flips(&self) -> &FlipOverrides {
        &self.flips
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera for the host's orbit controls.
    ///
    /// Writes made while a glide is in flight are overwritten on the next
    /// update.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current camera framing in named-view form, ready to be stored under
    /// a mode.
    #[must_use]
    pub fn camera_report(&self) -> CameraView {
        let view = CameraView::from_camera(&self.camera);
        log::debug!("camera view: {view:?}");
        view
    }

    /// Registered camera views.
    #[must_use]
    pub fn views(&self) -> &CameraViewTable {
        &self.views
    }

    /// Mutable view table, for registering views at runtime.
    pub fn views_mut(&mut self) -> &mut CameraViewTable {
        &mut self.views
    }

    /// Whether a card crossfade is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pose_animator.is_transitioning()
    }

    /// Whether a camera glide is in flight.
    #[must_use]
    pub fn is_camera_transitioning(&self) -> bool {
        self.camera_animator.is_transitioning()
    }

    /// Time passed to the most recent update.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.now
    }
}
