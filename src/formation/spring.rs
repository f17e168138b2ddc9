//! Spring ("dance"): two facing rows hopping toward each other.

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{random_phases, Formation, PoseArrays};
use crate::layout::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Dance", inline)]
#[serde(default)]
/// Spring formation tunables.
pub struct SpringParams {
    /// Distance between neighbours in a row.
    pub spacing: f32,
    /// Half the distance between the two rows.
    pub gap: f32,
    /// Peak hop height.
    pub hop_height: f32,
    /// Hop frequency.
    pub hop_speed: f32,
    /// Pitch at the top of a hop.
    pub pitch_amp: f32,
    /// Bend at the top of a hop.
    pub bend_amp: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            spacing: 1.1,
            gap: 1.6,
            hop_height: 0.7,
            hop_speed: 1.25,
            pitch_amp: 0.18,
            bend_amp: 0.08,
        }
    }
}

/// Spring formation state.
#[derive(Debug, Clone)]
pub struct SpringState {
    poses: PoseArrays,
    phases: Vec<f32>,
}

impl Formation for SpringState {
    type Params = SpringParams;

    const NAME: &'static str = "spring";

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

    fn step(&mut self, time: f32, _base: &[Vec3], params: &SpringParams) {
        let half = self.poses.len().max(1) / 2;
        let row_center = (half as f32 - 1.0) / 2.0;
        for i in 0..self.poses.len() {
            let t = time * params.hop_speed + self.phases[i];
            let (side, local) = if i < half {
                (-1.0, i)
            } else {
                (1.0, i - half)
            };
            // rectified into [0, 1]
            let hop = (t.sin() + 1.0) / 2.0;
            let across = t.sin() * params.gap * 0.35;
            let position = Vec3::new(
                (local as f32 - row_center) * params.spacing - across * side,
                hop * params.hop_height,
                side * params.gap,
            );
            let rotation = Vec3::new(hop * params.pitch_amp, 0.0, 0.0);
            self.poses
                .set(i, position, rotation, hop * params.bend_amp);
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
    fn splits_into_two_rows() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SpringState::create(10, &Bounds::default(), &mut rng);
        let params = SpringParams::default();
        state.step(0.8, &[], &params);
        let positions = &state.poses().positions;
        assert!(positions[..5].iter().all(|p| p.z == -params.gap));
        assert!(positions[5..].iter().all(|p| p.z == params.gap));
        for p in positions {
            assert!(p.y >= 0.0 && p.y <= params.hop_height + 1e-6);
        }
    }

    #[test]
    fn single_card_uses_second_row() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SpringState::create(1, &Bounds::default(), &mut rng);
        state.step(0.0, &[], &SpringParams::default());
        assert!(state.poses().positions[0].is_finite());
        assert_eq!(state.poses().positions[0].z, 1.6);
    }
}
