//! Float: each card drifts around its spread-out grid slot.

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    base_at, random_offsets, random_phases, random_speeds, Formation,
    PoseArrays,
};
use crate::layout::Bounds;

/// How much of the random bounds offset leaks into each axis.
const OFFSET_SCALE: Vec3 = Vec3::new(0.05, 0.05, 0.07);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Float", inline)]
#[serde(default)]
/// Float formation tunables.
pub struct FloatParams {
    /// Multiplier applied to the grid slot.
    pub spacing: f32,
    /// Horizontal drift amplitude.
    pub amp_x: f32,
    /// Vertical drift amplitude.
    pub amp_y: f32,
    /// Depth drift amplitude.
    pub amp_z: f32,
    /// Pitch wobble amplitude (radians).
    pub pitch_amp: f32,
    /// Yaw wobble amplitude (radians).
    pub yaw_amp: f32,
    /// Roll wobble amplitude (radians).
    pub roll_amp: f32,
    /// Bend amplitude.
    pub bend_amp: f32,
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            spacing: 1.2,
            amp_x: 0.12,
            amp_y: 0.16,
            amp_z: 0.2,
            pitch_amp: 0.22,
            yaw_amp: 0.28,
            roll_amp: 0.35,
            bend_amp: 0.06,
        }
    }
}

/// Float formation state.
#[derive(Debug, Clone)]
pub struct FloatState {
    poses: PoseArrays,
    offsets: Vec<Vec3>,
    /// Three independent phases per card.
    phases: Vec<[f32; 3]>,
    speeds: Vec<f32>,
}

impl Formation for FloatState {
    type Params = FloatParams;

    const NAME: &'static str = "float";

    fn create<R: Rng + ?Sized>(
        count: usize,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let offsets = random_offsets(count, bounds, rng);
        let a = random_phases(count, rng);
        let b = random_phases(count, rng);
        let c = random_phases(count, rng);
        let phases = (0..count).map(|i| [a[i], b[i], c[i]]).collect();
        Self {
            poses: PoseArrays::new(count),
            offsets,
            phases,
            speeds: random_speeds(count, 0.5, 1.2, rng),
        }
    }

    fn step(&mut self, time: f32, base: &[Vec3], params: &FloatParams) {
        for i in 0..self.poses.len() {
            let [a, b, c] = self.phases[i];
            let t = time * self.speeds[i];
            let slot = base_at(base, i) * params.spacing;
            let drift = Vec3::new(
                (t + a).sin() * params.amp_x,
                (t * 0.9 + b).cos() * params.amp_y,
                (t * 1.1 + c).sin() * params.amp_z,
            );
            let position = slot + self.offsets[i] * OFFSET_SCALE + drift;
            let rotation = Vec3::new(
                (t * 1.2 + c).sin() * params.pitch_amp,
                (t * 0.8 + a).sin() * params.yaw_amp,
                (t * 1.1 + b).cos() * params.roll_amp,
            );
            let bend = (t + b).sin() * params.bend_amp;
            self.poses.set(i, position, rotation, bend);
        }
    }

    fn poses(&self) -> &PoseArrays {
        &self.poses
    }

    fn poses_mut(&mut self) -> &mut PoseArrays {
        &mut self.poses
    }
}
