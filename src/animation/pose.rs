//! Card pose types shared by the transition coordinator and the engine.

use glam::{Quat, Vec3};

/// A single card's pose at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// World-space center.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
    /// Bend amount (unclamped).
    pub bend: f32,
}

impl Default for CardPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            bend: 0.0,
        }
    }
}

impl CardPose {
    /// Pose at `position` with no rotation or bend.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Blend toward `target` by `t` in [0, 1].
    ///
    /// Position and bend interpolate linearly; orientation is slerped as a
    /// rotation, never per Euler component.
    #[must_use]
    pub fn blend(&self, target: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(target.position, t),
            rotation: self.rotation.slerp(target.rotation, t).normalize(),
            bend: self.bend + (target.bend - self.bend) * t,
        }
    }
}

/// Rendered state of the whole deck, index-aligned to card identity.
///
/// This is what the host last drew, and what a new transition captures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPoses {
    positions: Vec<Vec3>,
    rotations: Vec<Quat>,
    bends: Vec<f32>,
}

impl RenderedPoses {
    /// Unrotated, unbent cards sitting at `positions`.
    #[must_use]
    pub fn at_positions(positions: &[Vec3]) -> Self {
        Self {
            positions: positions.to_vec(),
            rotations: vec![Quat::IDENTITY; positions.len()],
            bends: vec![0.0; positions.len()],
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

    /// Pose of card `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> CardPose {
        CardPose {
            position: self.positions[index],
            rotation: self.rotations[index],
            bend: self.bends[index],
        }
    }

    /// Overwrite card `index`.
    pub fn set(&mut self, index: usize, pose: CardPose) {
        self.positions[index] = pose.position;
        self.rotations[index] = pose.rotation;
        self.bends[index] = pose.bend;
    }

    /// Card centers.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Card orientations.
    #[must_use]
    pub fn rotations(&self) -> &[Quat] {
        &self.rotations
    }

    /// Card bends.
    #[must_use]
    pub fn bends(&self) -> &[f32] {
        &self.bends
    }

    /// Iterate all card poses in identity order.
    pub fn iter(&self) -> impl Iterator<Item = CardPose> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = CardPose::at(Vec3::ZERO);
        let b = CardPose {
            position: Vec3::new(2.0, 4.0, -2.0),
            rotation: Quat::from_rotation_x(PI * 0.5),
            bend: 0.2,
        };
        let start = a.blend(&b, 0.0);
        assert_eq!(start.position, a.position);
        assert!(start.rotation.angle_between(a.rotation) < 1e-5);
        assert_eq!(start.bend, 0.0);

        let end = a.blend(&b, 1.0);
        assert!((end.position - b.position).length() < 1e-6);
        assert!(end.rotation.angle_between(b.rotation) < 1e-4);
        assert!((end.bend - 0.2).abs() < 1e-6);
    }

    #[test]
    fn blend_rotates_through_the_short_arc() {
        let a = CardPose::at(Vec3::ZERO);
        let b = CardPose {
            rotation: Quat::from_rotation_y(PI * 0.5),
            ..CardPose::default()
        };
        let mid = a.blend(&b, 0.5);
        let angle = mid.rotation.angle_between(a.rotation);
        assert!((angle - PI * 0.25).abs() < 1e-4);
        assert!(mid.rotation.is_normalized());
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut poses = RenderedPoses::at_positions(&[Vec3::X, Vec3::Y]);
        let pose = CardPose {
            position: Vec3::Z,
            rotation: Quat::from_rotation_z(0.3),
            bend: -0.1,
        };
        poses.set(1, pose);
        assert_eq!(poses.get(1), pose);
        assert_eq!(poses.get(0), CardPose::at(Vec3::X));
        assert_eq!(poses.iter().count(), 2);
    }
}
