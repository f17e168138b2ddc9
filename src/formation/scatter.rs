//! Scatter: a random cloud inside the formation bounds that breathes in and
//! out.

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    random_offsets, random_phases, random_speeds, Formation, PoseArrays,
};
use crate::layout::Bounds;

/// Range of the per-axis rotational offset drawn at create time.
const ROTATION_RANGE: f32 = 1.2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scatter", inline)]
#[serde(default)]
/// Scatter formation tunables.
pub struct ScatterParams {
    /// Multiplier applied to the random offsets.
    pub spread: f32,
    /// Relative swell of the cloud.
    pub drift_amp: f32,
    /// Breathing frequency.
    pub drift_speed: f32,
    /// Bend amplitude.
    pub bend_amp: f32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            spread: 1.4,
            drift_amp: 0.35,
            drift_speed: 0.85,
            bend_amp: 0.06,
        }
    }
}

/// Scatter formation state.
#[derive(Debug, Clone)]
pub struct ScatterState {
    poses: PoseArrays,
    offsets: Vec<Vec3>,
    rotation_offsets: Vec<Vec3>,
    phases: Vec<f32>,
    speeds: Vec<f32>,
}

impl Formation for ScatterState {
    type Params = ScatterParams;

    const NAME: &'static str = "scatter";

    fn create<R: Rng + ?Sized>(
        count: usize,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let offsets = random_offsets(count, bounds, rng);
        let rotation_offsets = random_offsets(
            count,
            &Bounds::from_half_extents(Vec3::splat(ROTATION_RANGE)),
            rng,
        );
        Self {
            poses: PoseArrays::new(count),
            offsets,
            rotation_offsets,
            phases: random_phases(count, rng),
            speeds: random_speeds(count, 0.9, 1.2, rng),
        }
    }

    fn step(&mut self, time: f32, _base: &[Vec3], params: &ScatterParams) {
        for i in 0..self.poses.len() {
            let t = time * params.drift_speed * self.speeds[i] + self.phases[i];
            let drift = 1.0 + t.sin() * params.drift_amp;
            let rot = self.rotation_offsets[i];
            self.poses.set(
                i,
                self.offsets[i] * params.spread * drift,
                Vec3::new(
                    rot.x * t.sin(),
                    rot.y * t.cos(),
                    rot.z * (t * 0.9).sin(),
                ),
                t.sin() * params.bend_amp,
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
