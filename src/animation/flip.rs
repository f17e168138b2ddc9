//! Click-to-flip overrides for the resting grid.

use std::f32::consts::PI;

/// Angles closer than this to their goal snap onto it.
const SNAP_EPSILON: f32 = 0.001;

/// Persistent per-card face-down toggles and their damped yaw angles.
#[derive(Debug, Clone, Default)]
pub struct FlipOverrides {
    flipped: Vec<bool>,
    angles: Vec<f32>,
}

impl FlipOverrides {
    /// All cards face up.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            flipped: vec![false; count],
            angles: vec![0.0; count],
        }
    }

    /// Toggle card `index`. Returns the new flipped state, or `None` when the
    /// index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let flag = self.flipped.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Whether card `index` is toggled face down.
    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// Current yaw angle of card `index`.
    #[must_use]
    pub fn angle(&self, index: usize) -> f32 {
        self.angles.get(index).copied().unwrap_or(0.0)
    }

    /// Damp every angle toward pi (flipped) or zero by `smoothing`.
    pub fn step(&mut self, smoothing: f32) {
        for (angle, &flipped) in self.angles.iter_mut().zip(&self.flipped) {
            let goal = if flipped { PI } else { 0.0 };
            let remaining = goal - *angle;
            if remaining.abs() < SNAP_EPSILON {
                *angle = goal;
            } else {
                *angle += remaining * smoothing;
            }
        }
    }

    /// Whether every card has reached its goal angle.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.angles
            .iter()
            .zip(&self.flipped)
            .all(|(&angle, &flipped)| angle == if flipped { PI } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_unflips() {
        let mut flips = FlipOverrides::new(3);
        assert_eq!(flips.toggle(1), Some(true));
        assert!(flips.is_flipped(1));
        assert_eq!(flips.toggle(1), Some(false));
        assert_eq!(flips.toggle(3), None);
    }

    #[test]
    fn angle_converges_and_snaps() {
        let mut flips = FlipOverrides::new(1);
        let _ = flips.toggle(0);
        flips.step(0.18);
        assert!((flips.angle(0) - PI * 0.18).abs() < 1e-5);
        assert!(!flips.is_settled());
        for _ in 0..200 {
            flips.step(0.18);
        }
        assert_eq!(flips.angle(0), PI);
        assert!(flips.is_settled());
    }

    #[test]
    fn out_of_range_reads_are_neutral() {
        let flips = FlipOverrides::new(0);
        assert!(!flips.is_flipped(4));
        assert_eq!(flips.angle(4), 0.0);
    }
}
