//! The engine's complete interactive vocabulary.
//!
//! Hosts translate key presses, menu picks and clicks into a
//! [`DeckCommand`] and hand it to
//! [`DeckEngine::execute`](super::DeckEngine::execute).

use super::DeckEngine;
use crate::mode::Mode;

/// A discrete operation the engine can perform.
///
/// ```ignore
/// engine.execute(DeckCommand::SetMode("helix".into()));
/// engine.execute(DeckCommand::ToggleFlip { index: 12 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckCommand {
    /// Switch to a mode by name; unknown names select grid.
    SetMode(String),
    /// Advance to the following mode in menu order.
    NextMode,
    /// Jump to a random mode.
    RandomMode,
    /// Toggle one card face down (grid mode only).
    ToggleFlip {
        /// Card index.
        index: usize,
    },
    /// The viewport changed size.
    Resize {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl DeckEngine {
    /// Perform `command`.
    pub fn execute(&mut self, command: DeckCommand) {
        match command {
            DeckCommand::SetMode(name) => self.set_mode(&name),
            DeckCommand::NextMode => self.set_mode_kind(self.mode.next()),
            DeckCommand::RandomMode => {
                let mode = Mode::random(&mut self.rng);
                self.set_mode_kind(mode);
            }
            DeckCommand::ToggleFlip { index } => {
                let _ = self.toggle_flip(index);
            }
            DeckCommand::Resize { width, height } => self.resize(width, height),
        }
    }
}
