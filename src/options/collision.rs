use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Collision", inline)]
#[serde(default)]
/// Overlap relaxation applied to the float formation.
pub struct CollisionOptions {
    /// Card radius; pairs closer than twice this are pushed apart.
    #[schemars(title = "Radius", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub radius: f32,
    /// Relaxation passes per frame.
    #[schemars(title = "Iterations", range(min = 0, max = 16))]
    pub iterations: u32,
    /// Fraction of the overlap corrected per pass.
    #[schemars(title = "Softness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub softness: f32,
    /// Upper bound on the push factor applied to a single pair.
    #[schemars(title = "Max Push", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub max_push: f32,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        Self {
            radius: 0.7,
            iterations: 6,
            softness: 0.55,
            max_push: 0.06,
        }
    }
}

impl CollisionOptions {
    /// Resolver parameters for these options.
    #[must_use]
    pub fn params(&self) -> CollisionParams {
        CollisionParams {
            iterations: self.iterations,
            softness: self.softness,
            max_push: self.max_push,
        }
    }
}
