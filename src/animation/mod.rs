//! Card animation: easing curves, pose types, the mode-switch transition
//! coordinator and grid flip overrides.
//!
//! # Architecture
//!
//! - [`PoseAnimator`] holds at most one [`PoseTransition`]. Starting a new
//!   one overwrites the old, so there is nothing to cancel or queue.
//! - Transitions blend a frozen [`RenderedPoses`] snapshot into the live
//!   output of the newly active formation, eased by an [`EasingFunction`].
//! - [`FlipOverrides`] is grid-only per-card state driven by clicks rather
//!   than time.

mod easing;
mod flip;
mod pose;
mod transition;

pub use easing::EasingFunction;
pub use flip::FlipOverrides;
pub use pose::{CardPose, RenderedPoses};
pub use transition::{IdleBehavior, PoseAnimator, PoseTransition};
