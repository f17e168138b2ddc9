use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::formation::{
    FlipParams, FloatParams, FountainParams, HelixParams, RingParams,
    RippleParams, ScatterParams, SnakeParams, SpiralParams, SpringParams,
};

/// Per-mode formation tunables, keyed by mode name.
///
/// Each params struct's own `Default` holds the formation's intrinsic
/// defaults; the values here are the tuned set the deck runs with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Formations", inline)]
#[serde(default)]
pub struct FormationOptions {
    /// Two hopping rows.
    pub dance: SpringParams,
    /// Drifting grid.
    pub float: FloatParams,
    /// Flat spiral.
    pub spiral: SpiralParams,
    /// Vertical helix.
    pub helix: HelixParams,
    /// Parabolic fountain.
    pub fountain: FountainParams,
    /// Spinning circle.
    pub circle: RingParams,
    /// Circle with a travelling wave.
    pub ring: SnakeParams,
    /// Radial wave over the grid.
    pub ripple: RippleParams,
    /// Breathing random cloud.
    pub scatter: ScatterParams,
    /// Flipping wave over the grid.
    pub flip: FlipParams,
}

impl Default for FormationOptions {
    fn default() -> Self {
        Self {
            dance: SpringParams {
                spacing: 1.1,
                gap: 1.6,
                hop_height: 0.7,
                ..SpringParams::default()
            },
            float: FloatParams {
                spacing: 1.25,
                ..FloatParams::default()
            },
            spiral: SpiralParams {
                spacing: 0.22,
                tightness: 0.45,
                spin_speed: 0.18,
                ..SpiralParams::default()
            },
            helix: HelixParams {
                radius: 2.2,
                height: 4.4,
                spin_speed: 0.55,
                ..HelixParams::default()
            },
            fountain: FountainParams {
                spacing: 0.6,
                height: 2.9,
                spread: 0.35,
                cycle: 2.1,
                group_size: 5,
                ..FountainParams::default()
            },
            circle: RingParams {
                radius: 3.2,
                spin_speed: 0.6,
                spacing: 0.9,
                ..RingParams::default()
            },
            ring: SnakeParams {
                radius: 3.2,
                wave_amp: 0.32,
                wave_speed: 1.3,
                ..SnakeParams::default()
            },
            ripple: RippleParams {
                spacing: 1.05,
                wave_amp: 0.22,
                wave_speed: 1.5,
                ..RippleParams::default()
            },
            scatter: ScatterParams {
                spread: 1.45,
                drift_speed: 0.9,
                ..ScatterParams::default()
            },
            flip: FlipParams {
                spacing: 1.05,
                wave_speed: 1.8,
                phase_step: 0.35,
                ..FlipParams::default()
            },
        }
    }
}
