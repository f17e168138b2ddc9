use std::f32::consts::PI;

use super::DeckEngine;
use crate::animation::CardPose;
use crate::formation::clamp_bend;

/// Receives final card poses once per card per frame.
///
/// Bends arrive already clamped to the deformation range.
pub trait CardSink {
    /// Place card `index` at `pose`.
    fn place_card(&mut self, index: usize, pose: &CardPose);
}

impl<F: FnMut(usize, &CardPose)> CardSink for F {
    fn place_card(&mut self, index: usize, pose: &CardPose) {
        self(index, pose);
    }
}

/// Depth offset of a card vertex at `local_y` for a card of half height
/// `half_height` bent by `bend` (clamped first).
#[must_use]
pub fn bend_z_offset(local_y: f32, half_height: f32, bend: f32) -> f32 {
    if half_height <= 0.0 {
        return 0.0;
    }
    (local_y / half_height * PI).sin() * clamp_bend(bend)
}

impl DeckEngine {
    /// Hand every card's current pose to `sink`, in identity order.
    pub fn emit<S: CardSink + ?Sized>(&self, sink: &mut S) {
        for (index, pose) in self.rendered.iter().enumerate() {
            let pose = CardPose {
                bend: clamp_bend(pose.bend),
                ..pose
            };
            sink.place_card(index, &pose);
        }
    }

    /// [`DeckEngine::update`] followed by [`DeckEngine::emit`].
    pub fn tick<S: CardSink + ?Sized>(&mut self, time: f32, sink: &mut S) {
        self.update(time);
        self.emit(sink);
    }
}
