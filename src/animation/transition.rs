//! Snapshot-then-blend card transitions.
//!
//! A mode switch freezes what is currently on screen into a
//! [`PoseTransition`]. Every following frame blends that frozen snapshot into
//! the new formation's *live* pose, so a switch arriving mid-transition just
//! snapshots the half-blended state and starts over without a pop.

use super::easing::EasingFunction;
use super::pose::{CardPose, RenderedPoses};

/// A captured snapshot and the clock window over which it fades out.
#[derive(Debug, Clone)]
pub struct PoseTransition {
    start: f32,
    duration: f32,
    from: RenderedPoses,
}

impl PoseTransition {
    /// Capture `rendered` at time `start`.
    #[must_use]
    pub fn capture(
        rendered: &RenderedPoses,
        start: f32,
        duration: f32,
    ) -> Self {
        Self {
            start,
            duration,
            from: rendered.clone(),
        }
    }

    /// Raw progress at `now`, clamped to [0, 1]. Zero-length transitions are
    /// complete immediately.
    #[must_use]
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Captured poses.
    #[must_use]
    pub fn snapshot(&self) -> &RenderedPoses {
        &self.from
    }

    /// Time the snapshot was taken.
    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }
}

/// How a card reaches its target while no transition is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdleBehavior {
    /// Jump straight to the target.
    Snap,
    /// Move this fraction of the remaining distance each frame.
    Damp(f32),
}

/// Owns at most one in-flight [`PoseTransition`] and applies it per card.
#[derive(Debug, Clone)]
pub struct PoseAnimator {
    duration: f32,
    easing: EasingFunction,
    active: Option<PoseTransition>,
    /// Eased progress for the current frame, `None` when idle.
    frame_t: Option<f32>,
}

impl PoseAnimator {
    /// Idle animator using the given transition length and curve.
    #[must_use]
    pub fn new(duration: f32, easing: EasingFunction) -> Self {
        Self {
            duration,
            easing,
            active: None,
            frame_t: None,
        }
    }

    /// Snapshot `rendered` and start a new transition, replacing any in
    /// flight.
    pub fn begin(&mut self, rendered: &RenderedPoses, now: f32) {
        if self.active.is_some() {
            log::debug!("pose transition preempted at t={now:.3}");
        } else {
            log::debug!("pose transition started at t={now:.3}");
        }
        self.active =
            Some(PoseTransition::capture(rendered, now, self.duration));
        self.frame_t = Some(0.0);
    }

    /// Advance to `now`. Drops the transition once its window has elapsed.
    ///
    /// Returns the eased progress used for this frame, or `None` when idle.
    pub fn advance(&mut self, now: f32) -> Option<f32> {
        self.frame_t = match &self.active {
            Some(transition) => {
                let t = transition.progress(now);
                if t >= 1.0 {
                    log::debug!("pose transition finished at t={now:.3}");
                    self.active = None;
                    None
                } else {
                    Some(self.easing.evaluate(t))
                }
            }
            None => None,
        };
        self.frame_t
    }

    /// Resolve card `index` for this frame and write it into `rendered`.
    ///
    /// While transitioning, the card is blended from its snapshot to
    /// `target`; otherwise `idle` decides how it follows `target`.
    pub fn apply(
        &self,
        rendered: &mut RenderedPoses,
        index: usize,
        target: CardPose,
        idle: IdleBehavior,
    ) {
        let pose = match (&self.active, self.frame_t) {
            (Some(transition), Some(t)) => {
                transition.snapshot().get(index).blend(&target, t)
            }
            _ => match idle {
                IdleBehavior::Snap => target,
                IdleBehavior::Damp(factor) => {
                    let current = rendered.get(index);
                    CardPose {
                        position: current
                            .position
                            .lerp(target.position, factor.clamp(0.0, 1.0)),
                        ..target
                    }
                }
            },
        };
        rendered.set(index, pose);
    }

    /// Set the easing curve and the length of transitions started later.
    pub fn set_timing(&mut self, duration: f32, easing: EasingFunction) {
        self.duration = duration;
        self.easing = easing;
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn active(&self) -> Option<&PoseTransition> {
        self.active.as_ref()
    }
}
