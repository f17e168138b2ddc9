//! Headless demo: runs a full deck through every mode at a fixed frame rate
//! and logs what the cards are doing.
//!
//! Usage: `tableau [options.toml]`. Set `RUST_LOG=debug` to see transition
//! events.

use std::path::Path;

use glam::Vec3;
use tableau::animation::CardPose;
use tableau::engine::{CardSink, DeckCommand, DeckEngine};
use tableau::options::Options;
use tableau::util::FrameClock;

const DECK_SIZE: usize = 52;
const TARGET_FPS: u32 = 60;
const SECS_PER_MODE: f32 = 3.0;

/// Collects the spread of one frame's card placements.
struct FrameStats {
    min: Vec3,
    max: Vec3,
    max_bend: f32,
    cards: usize,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
            max_bend: 0.0,
            cards: 0,
        }
    }
}

impl CardSink for FrameStats {
    fn place_card(&mut self, _index: usize, pose: &CardPose) {
        self.min = self.min.min(pose.position);
        self.max = self.max.max(pose.position);
        self.max_bend = self.max_bend.max(pose.bend.abs());
        self.cards += 1;
    }
}

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("failed to load {path}: {e}; using defaults");
            Options::default()
        }
    }
}

fn main() {
    env_logger::init();

    let mut engine = DeckEngine::new(DECK_SIZE, load_options());
    engine.resize(1280, 720);

    let run_secs = SECS_PER_MODE * 11.0;
    let mut clock = FrameClock::new(TARGET_FPS);
    let mut next_switch = SECS_PER_MODE;

    loop {
        if !clock.should_render() {
            std::thread::sleep(clock.until_next_frame());
            continue;
        }
        let now = clock.elapsed_secs();
        if now >= run_secs {
            break;
        }
        if now >= next_switch {
            engine.execute(DeckCommand::NextMode);
            next_switch += SECS_PER_MODE;
        }

        let mut stats = FrameStats::default();
        engine.tick(now, &mut stats);
        clock.end_frame();

        if clock.frames() % u64::from(TARGET_FPS) == 0 {
            let size = stats.max - stats.min;
            log::info!(
                "t={now:5.2}s mode={:<8} cards={} fps={:.1}",
                engine.mode(),
                stats.cards,
                clock.fps()
            );
            log::debug!(
                "extent=({:.2}, {:.2}, {:.2}) max bend={:.3}",
                size.x,
                size.y,
                size.z,
                stats.max_bend
            );
        }
    }

    log::info!("final camera: {:?}", engine.camera_report());
}
