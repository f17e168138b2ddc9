//! Helix: a vertical staircase winding around the y axis.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{random_phases, Formation, PoseArrays};
use crate::layout::Bounds;

/// Angular advance between consecutive cards.
const STEP_ANGLE: f32 = 0.55;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
/// Helix formation tunables.
pub struct HelixParams {
    /// Distance from the axis.
    pub radius: f32,
    /// Total height spanned from first to last card.
    pub height: f32,
    /// Rotation speed around the axis.
    pub spin_speed: f32,
    /// Pitch wobble amplitude.
    pub pitch_amp: f32,
    /// Bend amplitude.
    pub bend_amp: f32,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 2.2,
            height: 4.4,
            spin_speed: 0.5,
            pitch_amp: 0.18,
            bend_amp: 0.08,
        }
    }
}

/// Helix formation state.
#[derive(Debug, Clone)]
pub struct HelixState {
    poses: PoseArrays,
    phases: Vec<f32>,
}

impl Formation for HelixState {
    type Params = HelixParams;

    const NAME: &'static str = "helix";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
            phases: random_phases(count, rng),
        }
    }

    fn step(&mut self, time: f32, _base: &[Vec3], params: &HelixParams) {
        let mid = (self.poses.len().max(1) - 1) as f32 / 2.0;
        let divisor = if mid > 0.0 { mid } else { 1.0 };
        let t = time * params.spin_speed;
        for i in 0..self.poses.len() {
            let phase = self.phases[i];
            let angle = i as f32 * STEP_ANGLE + t + phase * 0.1;
            let y = ((i as f32 - mid) / divisor) * (params.height / 2.0);
            let position = Vec3::new(
                angle.cos() * params.radius,
                y,
                angle.sin() * params.radius,
            );
            let rotation = Vec3::new(
                (t + phase).sin() * params.pitch_amp,
                angle + FRAC_PI_2,
                0.0,
            );
            self.poses.set(
                i,
                position,
                rotation,
                (angle + t).sin() * params.bend_amp,
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
    fn height_spans_symmetric_range() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = HelixState::create(9, &Bounds::default(), &mut rng);
        let params = HelixParams::default();
        state.step(2.0, &[], &params);
        let ys: Vec<f32> =
            state.poses().positions.iter().map(|p| p.y).collect();
        assert!((ys[0] + params.height / 2.0).abs() < 1e-5);
        assert!((ys[8] - params.height / 2.0).abs() < 1e-5);
        assert!(ys.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn single_card_sits_at_mid_height() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = HelixState::create(1, &Bounds::default(), &mut rng);
        state.step(2.0, &[], &HelixParams::default());
        assert_eq!(state.poses().positions[0].y, 0.0);
    }
}
