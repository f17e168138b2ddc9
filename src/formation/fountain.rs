//! Fountain: clusters of cards thrown outward along parabolic arcs.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{base_at, random_phases, random_speeds, Formation, PoseArrays};
use crate::layout::Bounds;

/// Launch delay between consecutive clusters, in seconds.
const GROUP_DELAY: f32 = 0.35;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fountain", inline)]
#[serde(default)]
/// Fountain formation tunables.
pub struct FountainParams {
    /// Scale applied to the grid slot (mapped onto the xz plane).
    pub spacing: f32,
    /// Apex height of an arc.
    pub height: f32,
    /// Outward travel per unit of height.
    pub spread: f32,
    /// Length of one arc, in seconds.
    pub cycle: f32,
    /// Cards launched together.
    pub group_size: u32,
    /// Pitch at the apex.
    pub pitch_amp: f32,
    /// Bend at the apex.
    pub bend_amp: f32,
}

impl Default for FountainParams {
    fn default() -> Self {
        Self {
            spacing: 0.6,
            height: 2.8,
            spread: 0.35,
            cycle: 2.2,
            group_size: 5,
            pitch_amp: 0.2,
            bend_amp: 0.06,
        }
    }
}

/// Fountain formation state.
#[derive(Debug, Clone)]
pub struct FountainState {
    poses: PoseArrays,
    phases: Vec<f32>,
    speeds: Vec<f32>,
}

/// Normalized parabola: 0 at both ends of the cycle, 1 at its middle.
#[inline]
fn arc(u: f32) -> f32 {
    4.0 * u * (1.0 - u)
}

impl Formation for FountainState {
    type Params = FountainParams;

    const NAME: &'static str = "fountain";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
            phases: random_phases(count, rng),
            speeds: random_speeds(count, 0.9, 1.1, rng),
        }
    }

    fn step(&mut self, time: f32, base: &[Vec3], params: &FountainParams) {
        let group_size = params.group_size.max(1) as usize;
        let cycle = if params.cycle > 0.0 { params.cycle } else { 1.0 };
        for i in 0..self.poses.len() {
            let group = (i / group_size) as f32;
            let t = (time * self.speeds[i]
                + group * GROUP_DELAY
                + self.phases[i] * 0.15)
                .rem_euclid(cycle);
            let lift = arc(t / cycle);
            let y = lift * params.height;

            let slot = base_at(base, i);
            let base_x = slot.x * params.spacing;
            let base_z = slot.y * params.spacing;
            let len = base_x.hypot(base_z);
            let len = if len > 0.0 { len } else { 1.0 };
            let x = base_x + base_x / len * y * params.spread;
            let z = base_z + base_z / len * y * params.spread;

            self.poses.set(
                i,
                Vec3::new(x, y, z),
                Vec3::new(
                    -lift * params.pitch_amp,
                    z.atan2(x) + FRAC_PI_2,
                    0.0,
                ),
                lift * params.bend_amp,
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
