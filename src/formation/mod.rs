//! Formation library: closed-form, per-card pose generators.
//!
//! Every formation follows the same contract:
//!
//! - [`Formation::create`] allocates structure-of-arrays pose buffers sized to
//!   the deck and draws each card's random phases, speeds and offsets once.
//! - [`Formation::step`] rewrites every card's position, Euler orientation and
//!   bend as a pure function of elapsed time and those per-card draws. It
//!   never reads its own previous output, so stepping is seekable and two
//!   calls with the same time produce identical poses.
//!
//! [`FormationLibrary`] owns one state per formation and dispatches by
//! [`Mode`](crate::mode::Mode).

mod float;
mod flip;
mod fountain;
mod helix;
mod library;
mod ring;
mod ripple;
mod scatter;
mod snake;
mod spiral;
mod spring;

use std::f32::consts::TAU;

pub use float::{FloatParams, FloatState};
pub use flip::{FlipParams, FlipState};
pub use fountain::{FountainParams, FountainState};
use glam::{EulerRot, Quat, Vec3};
pub use helix::{HelixParams, HelixState};
pub use library::FormationLibrary;
use rand::Rng;
pub use ring::{RingParams, RingState};
pub use ripple::{RippleParams, RippleState};
pub use scatter::{ScatterParams, ScatterState};
pub use snake::{SnakeParams, SnakeState};
pub use spiral::{SpiralParams, SpiralState};
pub use spring::{SpringParams, SpringState};

use crate::layout::Bounds;

/// Symmetric limit applied to bend values before they deform geometry.
pub const BEND_LIMIT: f32 = 0.3;

/// Clamp a bend value into `[-BEND_LIMIT, BEND_LIMIT]`.
#[inline]
#[must_use]
pub fn clamp_bend(bend: f32) -> f32 {
    bend.clamp(-BEND_LIMIT, BEND_LIMIT)
}

/// Per-card output of a formation, index-aligned to card identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseArrays {
    /// World-space card centers.
    pub positions: Vec<Vec3>,
    /// Euler angles (radians, intrinsic XYZ order).
    pub rotations: Vec<Vec3>,
    /// Unclamped bend amounts.
    pub bends: Vec<f32>,
}

impl PoseArrays {
    /// Zeroed buffers for `count` cards.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
            rotations: vec![Vec3::ZERO; count],
            bends: vec![0.0; count],
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Orientation of card `index` as a quaternion.
    #[must_use]
    pub fn orientation(&self, index: usize) -> Quat {
        euler_to_quat(self.rotations[index])
    }

    #[inline]
    fn set(&mut self, index: usize, position: Vec3, rotation: Vec3, bend: f32) {
        self.positions[index] = position;
        self.rotations[index] = rotation;
        self.bends[index] = bend;
    }
}

/// Convert XYZ Euler angles to a rotation.
#[inline]
#[must_use]
pub fn euler_to_quat(angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}

/// A time-driven card arrangement.
pub trait Formation {
    /// Tunables read on every step.
    type Params;

    /// Name used in logs and benches.
    const NAME: &'static str;

    /// Allocate state for `count` cards and draw the per-card randomness.
    fn create<R: Rng + ?Sized>(
        count: usize,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self;

    /// Recompute every card's pose at `time` seconds.
    ///
    /// `base` is the planned grid; cards beyond its length read the origin.
    fn step(&mut self, time: f32, base: &[Vec3], params: &Self::Params);

    /// Output of the most recent step.
    fn poses(&self) -> &PoseArrays;

    /// Mutable output, for post-passes such as collision relaxation.
    fn poses_mut(&mut self) -> &mut PoseArrays;
}

#[inline]
fn base_at(base: &[Vec3], index: usize) -> Vec3 {
    base.get(index).copied().unwrap_or(Vec3::ZERO)
}

fn random_phases<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    (0..count).map(|_| rng.random_range(0.0..TAU)).collect()
}

fn random_speeds<R: Rng + ?Sized>(
    count: usize,
    min: f32,
    max: f32,
    rng: &mut R,
) -> Vec<f32> {
    (0..count).map(|_| rng.random_range(min..max)).collect()
}

fn random_offsets<R: Rng + ?Sized>(
    count: usize,
    bounds: &Bounds,
    rng: &mut R,
) -> Vec<Vec3> {
    let h = bounds.half_extents.abs();
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-h.x..=h.x),
                rng.random_range(-h.y..=h.y),
                rng.random_range(-h.z..=h.z),
            )
        })
        .collect()
}
