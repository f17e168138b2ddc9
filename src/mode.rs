//! Layout modes selectable by the host.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the eleven card arrangements.
///
/// Several modes are backed by a formation with a different internal name:
/// `Dance` runs the spring formation, `Circle` the ring formation and
/// `Ring` the snake formation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Rest layout: the planned grid, gently wobbling.
    #[default]
    Grid,
    /// Two facing rows hopping across the gap.
    Dance,
    /// Grid cells drifting independently, kept apart by collision relaxation.
    Float,
    /// Flat golden-spiral-like arrangement spinning around the y axis.
    Spiral,
    /// Vertical staircase around the y axis.
    Helix,
    /// Clusters of cards arcing outward in looping parabolas.
    Fountain,
    /// Spinning circle with a per-card vertical bob.
    Circle,
    /// Circle carrying a travelling vertical wave.
    Ring,
    /// Grid perturbed by a radial wave.
    Ripple,
    /// Random cloud that breathes in and out.
    Scatter,
    /// Grid with a phase-shifted flipping wave.
    Flip,
}

/// Error returned by [`Mode::from_str`] for names outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout mode '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl Mode {
    /// Every mode, in selection-menu order.
    pub const ALL: [Mode; 11] = [
        Mode::Grid,
        Mode::Dance,
        Mode::Float,
        Mode::Spiral,
        Mode::Helix,
        Mode::Fountain,
        Mode::Circle,
        Mode::Ring,
        Mode::Ripple,
        Mode::Scatter,
        Mode::Flip,
    ];

    /// Lowercase name used in options files and by hosts.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mode::Grid => "grid",
            Mode::Dance => "dance",
            Mode::Float => "float",
            Mode::Spiral => "spiral",
            Mode::Helix => "helix",
            Mode::Fountain => "fountain",
            Mode::Circle => "circle",
            Mode::Ring => "ring",
            Mode::Ripple => "ripple",
            Mode::Scatter => "scatter",
            Mode::Flip => "flip",
        }
    }

    /// Parse a mode name, coercing anything unrecognised to [`Mode::Grid`].
    #[must_use]
    pub fn parse_or_grid(name: &str) -> Self {
        name.parse().unwrap_or(Mode::Grid)
    }

    /// The following mode in menu order, wrapping back to grid.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// A uniformly random mode (may return the current one).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Whether this mode's formation output is relaxed by the collision
    /// resolver before blending.
    #[must_use]
    pub fn resolves_collisions(self) -> bool {
        matches!(self, Mode::Float)
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn names_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn unknown_name_coerces_to_grid() {
        assert_eq!(Mode::parse_or_grid("not-a-real-mode"), Mode::Grid);
        assert_eq!(Mode::parse_or_grid(""), Mode::Grid);
        assert_eq!(Mode::parse_or_grid(" Spiral "), Mode::Grid);
    }

    #[test]
    fn names_match_exactly() {
        assert_eq!(Mode::parse_or_grid("spiral"), Mode::Spiral);
        assert_eq!(Mode::parse_or_grid("Spiral"), Mode::Grid);
        assert_eq!(Mode::parse_or_grid(" HELIX "), Mode::Grid);
        assert_eq!(
            "helix ".parse::<Mode>(),
            Err(UnknownMode("helix ".to_owned()))
        );
    }

    #[test]
    fn next_cycles_through_every_mode() {
        let mut mode = Mode::Grid;
        for expected in Mode::ALL.iter().skip(1) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode.next(), Mode::Grid);
    }

    #[test]
    fn random_stays_in_known_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            assert!(Mode::ALL.contains(&Mode::random(&mut rng)));
        }
    }

    #[test]
    fn only_float_resolves_collisions() {
        let resolving: Vec<Mode> = Mode::ALL
            .into_iter()
            .filter(|m| m.resolves_collisions())
            .collect();
        assert_eq!(resolving, vec![Mode::Float]);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Mode::Fountain).unwrap();
        assert_eq!(json, "\"fountain\"");
    }
}
