//! Per-frame update.

use glam::{Quat, Vec3};

use super::DeckEngine;
use crate::animation::{CardPose, IdleBehavior};
use crate::collision::resolve_collisions;
use crate::mode::Mode;

impl DeckEngine {
    /// Advance everything to `time` seconds.
    ///
    /// Runs, in order: the active formation's step, collision relaxation
    /// (float only), the per-card pose blend, and the camera blend.
    pub fn update(&mut self, time: f32) {
        self.now = time;
        let mode = self.mode;

        let stepped = self
            .formations
            .step(mode, time, &self.grid.positions, &self.options.formations)
            .is_some();
        if stepped && mode.resolves_collisions() {
            if let Some(poses) = self.formations.poses_mut(mode) {
                let _ = resolve_collisions(
                    &mut poses.positions,
                    self.options.collision.radius,
                    &self.options.collision.params(),
                    &mut self.rng,
                );
            }
        }

        let _ = self.pose_animator.advance(time);
        match self.formations.poses(mode) {
            Some(poses) => {
                for index in 0..self.rendered.len() {
                    let target = CardPose {
                        position: poses.positions[index],
                        rotation: poses.orientation(index),
                        bend: poses.bends[index],
                    };
                    self.pose_animator.apply(
                        &mut self.rendered,
                        index,
                        target,
                        IdleBehavior::Snap,
                    );
                }
            }
            None => {
                debug_assert_eq!(mode, Mode::Grid);
                self.flips.step(self.options.transition.flip_smoothing);
                let idle =
                    IdleBehavior::Damp(self.options.transition.grid_smoothing);
                for index in 0..self.rendered.len() {
                    let target = self.grid_target(index, time);
                    self.pose_animator
                        .apply(&mut self.rendered, index, target, idle);
                }
            }
        }

        let _ = self.camera_animator.update(&mut self.camera, time);
    }

    /// Resting grid pose of card `index`: its slot, a small vertical hover
    /// wobble, and its flip override as a yaw.
    pub(crate) fn grid_target(&self, index: usize, time: f32) -> CardPose {
        let t = &self.options.transition;
        let base = self.grid.positions[index];
        let wobble = (time * t.wobble_speed
            + index as f32 * t.wobble_phase_step)
            .sin()
            * t.wobble_amp;
        CardPose {
            position: base + Vec3::new(0.0, wobble, 0.0),
            rotation: Quat::from_rotation_y(self.flips.angle(index)),
            bend: 0.0,
        }
    }
}
