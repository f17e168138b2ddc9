//! Snake: a circle carrying a travelling vertical wave.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{random_phases, random_speeds, Formation, PoseArrays};
use crate::layout::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Snake", inline)]
#[serde(default)]
/// Snake formation tunables.
pub struct SnakeParams {
    /// Circle radius.
    pub radius: f32,
    /// Height of the wave.
    pub wave_amp: f32,
    /// Temporal frequency of the wave.
    pub wave_speed: f32,
    /// Phase lag between neighbouring cards.
    pub phase_step: f32,
    /// Pitch following the wave.
    pub pitch_amp: f32,
    /// Bend following the wave.
    pub bend_amp: f32,
}

impl Default for SnakeParams {
    fn default() -> Self {
        Self {
            radius: 3.2,
            wave_amp: 0.35,
            wave_speed: 1.4,
            phase_step: 0.45,
            pitch_amp: 0.22,
            bend_amp: 0.08,
        }
    }
}

/// Snake formation state.
#[derive(Debug, Clone)]
pub struct SnakeState {
    poses: PoseArrays,
    phases: Vec<f32>,
    speeds: Vec<f32>,
}

impl Formation for SnakeState {
    type Params = SnakeParams;

    const NAME: &'static str = "snake";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
            phases: random_phases(count, rng),
            speeds: random_speeds(count, 0.85, 1.15, rng),
        }
    }

    fn step(&mut self, time: f32, _base: &[Vec3], params: &SnakeParams) {
        let angle_step = TAU / self.poses.len().max(1) as f32;
        for i in 0..self.poses.len() {
            let t = time * params.wave_speed * self.speeds[i];
            let phase = i as f32 * params.phase_step - self.phases[i];
            let wave = (t - phase).sin();
            let angle = i as f32 * angle_step + t * 0.6;
            let position = Vec3::new(
                angle.cos() * params.radius,
                wave * params.wave_amp,
                angle.sin() * params.radius,
            );
            let rotation =
                Vec3::new(wave * params.pitch_amp, angle + FRAC_PI_2, 0.0);
            self.poses
                .set(i, position, rotation, wave * params.bend_amp);
        }
    }

    fn poses(&self) -> &PoseArrays {
        &self.poses
    }

    fn poses_mut(&mut self) -> &mut PoseArrays {
        &mut self.poses
    }
}
