//! Flip: a flipping wave running along the grid.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{base_at, Formation, PoseArrays};
use crate::layout::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flip", inline)]
#[serde(default)]
/// Flip formation tunables.
pub struct FlipParams {
    /// Multiplier applied to the grid slot.
    pub spacing: f32,
    /// Flip frequency.
    pub wave_speed: f32,
    /// Phase lag between consecutive cards.
    pub phase_step: f32,
    /// Lift at the middle of a flip.
    pub lift_amp: f32,
}

impl Default for FlipParams {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            wave_speed: 1.8,
            phase_step: 0.35,
            lift_amp: 0.35,
        }
    }
}

/// Flip formation state. No per-card randomness.
#[derive(Debug, Clone)]
pub struct FlipState {
    poses: PoseArrays,
}

impl Formation for FlipState {
    type Params = FlipParams;

    const NAME: &'static str = "flip";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        _rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
        }
    }

    fn step(&mut self, time: f32, base: &[Vec3], params: &FlipParams) {
        for i in 0..self.poses.len() {
            let slot = base_at(base, i);
            let flip = (time * params.wave_speed - i as f32 * params.phase_step)
                .sin();
            let lift = flip.abs() * params.lift_amp;
            self.poses.set(
                i,
                Vec3::new(
                    slot.x * params.spacing,
                    slot.y * params.spacing + lift,
                    slot.z,
                ),
                Vec3::new(flip * PI, 0.0, 0.0),
                0.0,
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

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn lift_tracks_flip_magnitude() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = FlipState::create(6, &Bounds::default(), &mut rng);
        let base = vec![Vec3::ZERO; 6];
        let params = FlipParams::default();
        state.step(1.3, &base, &params);
        let poses = state.poses();
        for i in 0..6 {
            let flip = poses.rotations[i].x / PI;
            let lift = flip.abs() * params.lift_amp;
            assert!((poses.positions[i].y - lift).abs() < 1e-5);
            assert_eq!(poses.bends[i], 0.0);
        }
    }
}
