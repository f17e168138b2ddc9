use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Card crossfade timing and grid-mode damping.
pub struct TransitionOptions {
    /// Length of the card crossfade after a mode switch, in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub duration_secs: f32,
    /// Easing curve applied to the crossfade progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Per-frame damping factor pulling idle grid cards toward their slot.
    #[schemars(title = "Grid Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub grid_smoothing: f32,
    /// Per-frame damping factor for the click-to-flip angle.
    #[schemars(title = "Flip Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub flip_smoothing: f32,
    /// Vertical hover wobble amplitude of idle grid cards.
    #[schemars(title = "Wobble", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub wobble_amp: f32,
    /// Angular speed of the hover wobble.
    #[schemars(skip)]
    pub wobble_speed: f32,
    /// Wobble phase offset between consecutive cards.
    #[schemars(skip)]
    pub wobble_phase_step: f32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_secs: 0.8,
            easing: EasingFunction::SmoothStep,
            grid_smoothing: 0.12,
            flip_smoothing: 0.18,
            wobble_amp: 0.03,
            wobble_speed: 1.2,
            wobble_phase_step: 0.35,
        }
    }
}
