//! Ring: an evenly spaced spinning circle, each card bobbing on its own.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{base_at, random_phases, random_speeds, Formation, PoseArrays};
use crate::layout::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ring", inline)]
#[serde(default)]
/// Ring formation tunables.
pub struct RingParams {
    /// Circle radius.
    pub radius: f32,
    /// Scale applied to the grid row height kept by each card.
    pub spacing: f32,
    /// Angular speed of the circle.
    pub spin_speed: f32,
    /// Vertical bob amplitude.
    pub lift_amp: f32,
    /// Pitch wobble amplitude.
    pub pitch_amp: f32,
    /// Extra yaw as a multiple of pi.
    pub yaw_twist: f32,
    /// Roll wobble amplitude.
    pub roll_amp: f32,
    /// Bend amplitude.
    pub bend_amp: f32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            radius: 3.1,
            spacing: 1.1,
            spin_speed: 0.5,
            lift_amp: 0.15,
            pitch_amp: 0.12,
            yaw_twist: 1.0,
            roll_amp: 0.18,
            bend_amp: 0.08,
        }
    }
}

/// Ring formation state.
#[derive(Debug, Clone)]
pub struct RingState {
    poses: PoseArrays,
    phases: Vec<f32>,
    speeds: Vec<f32>,
}

impl Formation for RingState {
    type Params = RingParams;

    const NAME: &'static str = "ring";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
            phases: random_phases(count, rng),
            speeds: random_speeds(count, 0.5, 1.0, rng),
        }
    }

    fn step(&mut self, time: f32, base: &[Vec3], params: &RingParams) {
        let count = self.poses.len().max(1) as f32;
        for i in 0..self.poses.len() {
            let phase = self.phases[i];
            let t = time * self.speeds[i];
            let y = base_at(base, i).y * params.spacing
                + (t + phase).sin() * params.lift_amp;
            let angle = (i as f32 / count) * TAU + t * params.spin_speed;
            let position = Vec3::new(
                angle.cos() * params.radius,
                y,
                angle.sin() * params.radius,
            );
            let rotation = Vec3::new(
                (t + phase).sin() * params.pitch_amp,
                angle + PI * params.yaw_twist,
                (t + phase).cos() * params.roll_amp,
            );
            self.poses.set(
                i,
                position,
                rotation,
                (t + phase).sin() * params.bend_amp,
            );
        }
    }

    fn poses(&self) -> &PoseArrays {
        &self.poses
    }

    fn poses_mut(&mut self) -> &mut PoseArrays {
        &mut self.poses
    }
}
