//! Ripple: the grid rocked by a wave radiating from the origin.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{base_at, Formation, PoseArrays};
use crate::layout::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ripple", inline)]
#[serde(default)]
/// Ripple formation tunables.
pub struct RippleParams {
    /// Multiplier applied to the grid slot.
    pub spacing: f32,
    /// Vertical lift at a crest.
    pub wave_amp: f32,
    /// Distance between crests.
    pub wave_length: f32,
    /// Outward travel speed of the wave.
    pub wave_speed: f32,
    /// Pitch per unit of lift.
    pub pitch_amp: f32,
    /// Bend amplitude.
    pub bend_amp: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            wave_amp: 0.24,
            wave_length: 3.2,
            wave_speed: 1.4,
            pitch_amp: 0.2,
            bend_amp: 0.06,
        }
    }
}

/// Ripple formation state. No per-card randomness.
#[derive(Debug, Clone)]
pub struct RippleState {
    poses: PoseArrays,
}

impl Formation for RippleState {
    type Params = RippleParams;

    const NAME: &'static str = "ripple";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        _rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
        }
    }

    fn step(&mut self, time: f32, base: &[Vec3], params: &RippleParams) {
        let wave_length = if params.wave_length.abs() > f32::EPSILON {
            params.wave_length
        } else {
            1.0
        };
        for i in 0..self.poses.len() {
            let slot = base_at(base, i);
            let x = slot.x * params.spacing;
            let y = slot.y * params.spacing;
            let distance = x.hypot(y);
            let wave = (distance * TAU / wave_length - time * params.wave_speed)
                .sin();
            let lift = wave * params.wave_amp;
            self.poses.set(
                i,
                Vec3::new(x, y + lift, slot.z),
                Vec3::new(lift * params.pitch_amp, 0.0, 0.0),
                wave * params.bend_amp,
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
    fn equal_radius_cards_lift_together() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = RippleState::create(4, &Bounds::default(), &mut rng);
        let base = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
        ];
        state.step(0.7, &base, &RippleParams::default());
        let lifts: Vec<f32> = state
            .poses()
            .positions
            .iter()
            .zip(base.iter())
            .map(|(p, b)| p.y - b.y)
            .collect();
        for lift in &lifts[1..] {
            assert!((lift - lifts[0]).abs() < 1e-5);
        }
    }
}
