use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, framing and transition parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera position before any view or framing is applied.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Height of the eye when the camera is framed on the grid.
    #[schemars(skip)]
    pub eye_height: f32,
    /// Extra distance added after fitting the grid to the viewport.
    #[schemars(title = "Fit Margin", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub fit_margin: f32,
    /// Length of the camera glide to a named view, in seconds.
    #[schemars(title = "Transition Duration", range(min = 0.0, max = 6.0), extend("step" = 0.1))]
    pub transition_secs: f32,
    /// Easing curve applied to the camera glide.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            start_position: [0.0, 0.1, 4.0],
            eye_height: 0.1,
            fit_margin: 1.5,
            transition_secs: 2.4,
            easing: EasingFunction::SmoothStep,
        }
    }
}
