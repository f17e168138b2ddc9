//! Easing curves applied to transition progress.

use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Smoothstep `t²(3 − 2t)`: zero slope at both ends.
    #[default]
    SmoothStep,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]; every curve maps 0 to 0 and 1 to 1.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}
