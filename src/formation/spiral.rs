//! Spiral: a flat spiral lying in the xz plane, slowly spinning.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{random_phases, random_speeds, Formation, PoseArrays};
use crate::layout::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spiral", inline)]
#[serde(default)]
/// Spiral formation tunables.
pub struct SpiralParams {
    /// Radial scale; radius grows with the square root of the card index.
    pub spacing: f32,
    /// Angular advance per card (radians).
    pub tightness: f32,
    /// Spin rate of the whole spiral.
    pub spin_speed: f32,
    /// Pitch wobble amplitude.
    pub pitch_amp: f32,
    /// Roll wobble amplitude.
    pub roll_amp: f32,
    /// Bend amplitude.
    pub bend_amp: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            spacing: 0.22,
            tightness: 0.45,
            spin_speed: 0.18,
            pitch_amp: 0.08,
            roll_amp: 0.12,
            bend_amp: 0.04,
        }
    }
}

/// Spiral formation state.
#[derive(Debug, Clone)]
pub struct SpiralState {
    poses: PoseArrays,
    phases: Vec<f32>,
    speeds: Vec<f32>,
}

impl Formation for SpiralState {
    type Params = SpiralParams;

    const NAME: &'static str = "spiral";

    fn create<R: Rng + ?Sized>(
        count: usize,
        _bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        Self {
            poses: PoseArrays::new(count),
            phases: random_phases(count, rng),
            speeds: random_speeds(count, 0.4, 0.9, rng),
        }
    }

    fn step(&mut self, time: f32, _base: &[Vec3], params: &SpiralParams) {
        for i in 0..self.poses.len() {
            let phase = self.phases[i];
            let t = time * self.speeds[i];
            let angle = i as f32 * params.tightness
                + t * params.spin_speed
                + phase * 0.15;
            let radius = params.spacing * ((i + 1) as f32).sqrt() * 2.6;
            let position =
                Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
            let rotation = Vec3::new(
                (t + phase).sin() * params.pitch_amp,
                angle + FRAC_PI_2,
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
