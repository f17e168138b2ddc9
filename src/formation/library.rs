//! One state per formation, dispatched by mode.

use glam::Vec3;
use rand::Rng;

use super::{
    FlipState, FloatState, Formation, FountainState, HelixState, PoseArrays,
    RingState, RippleState, ScatterState, SnakeState, SpiralState,
    SpringState,
};
use crate::layout::Bounds;
use crate::mode::Mode;
use crate::options::FormationOptions;

/// Every formation's state, created together for a fixed deck size.
///
/// States persist across mode switches so each formation keeps its random
/// draws for the whole session.
#[derive(Debug, Clone)]
pub struct FormationLibrary {
    count: usize,
    float: FloatState,
    spiral: SpiralState,
    ring: RingState,
    snake: SnakeState,
    spring: SpringState,
    helix: HelixState,
    ripple: RippleState,
    scatter: ScatterState,
    flip: FlipState,
    fountain: FountainState,
}

impl FormationLibrary {
    /// Create every formation for `count` cards.
    pub fn create<R: Rng + ?Sized>(
        count: usize,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        log::debug!("creating formation states for {count} cards");
        Self {
            count,
            float: FloatState::create(count, bounds, rng),
            spiral: SpiralState::create(count, bounds, rng),
            ring: RingState::create(count, bounds, rng),
            snake: SnakeState::create(count, bounds, rng),
            spring: SpringState::create(count, bounds, rng),
            helix: HelixState::create(count, bounds, rng),
            ripple: RippleState::create(count, bounds, rng),
            scatter: ScatterState::create(count, bounds, rng),
            flip: FlipState::create(count, bounds, rng),
            fountain: FountainState::create(count, bounds, rng),
        }
    }

    /// Deck size the states were created for.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.count
    }

    /// Step the formation backing `mode` and return its output.
    ///
    /// Returns `None` for [`Mode::Grid`], whose targets come straight from
    /// the planned layout.
    pub fn step(
        &mut self,
        mode: Mode,
        time: f32,
        base: &[Vec3],
        params: &FormationOptions,
    ) -> Option<&PoseArrays> {
        match mode {
            Mode::Grid => return None,
            Mode::Dance => self.spring.step(time, base, &params.dance),
            Mode::Float => self.float.step(time, base, &params.float),
            Mode::Spiral => self.spiral.step(time, base, &params.spiral),
            Mode::Helix => self.helix.step(time, base, &params.helix),
            Mode::Fountain => {
                self.fountain.step(time, base, &params.fountain);
            }
            Mode::Circle => self.ring.step(time, base, &params.circle),
            Mode::Ring => self.snake.step(time, base, &params.ring),
            Mode::Ripple => self.ripple.step(time, base, &params.ripple),
            Mode::Scatter => self.scatter.step(time, base, &params.scatter),
            Mode::Flip => self.flip.step(time, base, &params.flip),
        }
        self.poses(mode)
    }

    /// Output of the last step for `mode`.
    #[must_use]
    pub fn poses(&self, mode: Mode) -> Option<&PoseArrays> {
        Some(match mode {
            Mode::Grid => return None,
            Mode::Dance => self.spring.poses(),
            Mode::Float => self.float.poses(),
            Mode::Spiral => self.spiral.poses(),
            Mode::Helix => self.helix.poses(),
            Mode::Fountain => self.fountain.poses(),
            Mode::Circle => self.ring.poses(),
            Mode::Ring => self.snake.poses(),
            Mode::Ripple => self.ripple.poses(),
            Mode::Scatter => self.scatter.poses(),
            Mode::Flip => self.flip.poses(),
        })
    }

    /// Mutable output for `mode`, used by the collision post-pass.
    pub fn poses_mut(&mut self, mode: Mode) -> Option<&mut PoseArrays> {
        Some(match mode {
            Mode::Grid => return None,
            Mode::Dance => self.spring.poses_mut(),
            Mode::Float => self.float.poses_mut(),
            Mode::Spiral => self.spiral.poses_mut(),
            Mode::Helix => self.helix.poses_mut(),
            Mode::Fountain => self.fountain.poses_mut(),
            Mode::Circle => self.ring.poses_mut(),
            Mode::Ring => self.snake.poses_mut(),
            Mode::Ripple => self.ripple.poses_mut(),
            Mode::Scatter => self.scatter.poses_mut(),
            Mode::Flip => self.flip.poses_mut(),
        })
    }

    /// Internal formation name backing `mode`.
    #[must_use]
    pub fn formation_name(mode: Mode) -> &'static str {
        match mode {
            Mode::Grid => "grid",
            Mode::Dance => SpringState::NAME,
            Mode::Float => FloatState::NAME,
            Mode::Spiral => SpiralState::NAME,
            Mode::Helix => HelixState::NAME,
            Mode::Fountain => FountainState::NAME,
            Mode::Circle => RingState::NAME,
            Mode::Ring => SnakeState::NAME,
            Mode::Ripple => RippleState::NAME,
            Mode::Scatter => ScatterState::NAME,
            Mode::Flip => FlipState::NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn grid_has_no_formation_state() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut lib = FormationLibrary::create(4, &Bounds::default(), &mut rng);
        let params = FormationOptions::default();
        assert!(lib.step(Mode::Grid, 1.0, &[], &params).is_none());
        assert!(lib.poses_mut(Mode::Grid).is_none());
        assert_eq!(lib.card_count(), 4);
    }

    #[test]
    fn renamed_modes_map_to_their_formation() {
        assert_eq!(FormationLibrary::formation_name(Mode::Dance), "spring");
        assert_eq!(FormationLibrary::formation_name(Mode::Circle), "ring");
        assert_eq!(FormationLibrary::formation_name(Mode::Ring), "snake");
    }

    #[test]
    fn empty_deck_steps_are_no_ops() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut lib = FormationLibrary::create(0, &Bounds::default(), &mut rng);
        let params = FormationOptions::default();
        for mode in Mode::ALL {
            if let Some(poses) = lib.step(mode, 3.0, &[], &params) {
                assert!(poses.is_empty());
            }
        }
    }
}
