//! The deck engine: mode controller and per-frame driver.
//!
//! [`DeckEngine`] owns every piece of per-session state: the planned grid,
//! one formation state per mode, the rendered pose of every card, both
//! transition coordinators, the grid flip overrides and the camera.

mod accessors;
mod command;
mod frame;
mod options;
mod sink;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use self::command::DeckCommand;
pub use self::sink::{bend_z_offset, CardSink};
use crate::animation::{FlipOverrides, PoseAnimator, RenderedPoses};
use crate::camera::{Camera, CameraAnimator, CameraViewTable};
use crate::formation::FormationLibrary;
use crate::layout::{compute_grid_layout, GridLayout};
use crate::mode::Mode;
use crate::options::Options;

/// Drives a fixed-size deck through mode switches, one frame at a time.
///
/// Single-threaded and synchronous: the host calls [`DeckEngine::update`]
/// once per displayed frame with its own monotonic time in seconds, then
/// reads the result through [`DeckEngine::poses`] or [`DeckEngine::emit`].
pub struct DeckEngine {
    options: Options,
    mode: Mode,
    initialized: bool,
    grid: GridLayout,
    formations: FormationLibrary,
    rendered: RenderedPoses,
    pose_animator: PoseAnimator,
    flips: FlipOverrides,
    camera: Camera,
    camera_animator: CameraAnimator,
    views: CameraViewTable,
    rng: StdRng,
    /// Time passed to the most recent `update`; mode switches start here.
    now: f32,
}

impl DeckEngine {
    /// Engine for `card_count` cards, seeded from the thread RNG, resting in
    /// the grid.
    #[must_use]
    pub fn new(card_count: usize, options: Options) -> Self {
        Self::with_rng(
            card_count,
            options,
            Mode::Grid,
            StdRng::from_rng(&mut rand::rng()),
        )
    }

    /// Engine with an explicit starting mode and random source.
    ///
    /// The starting mode is adopted without a card crossfade: there is no
    /// prior rendered state to blend from. Its camera view, if any, still
    /// glides in.
    #[must_use]
    pub fn with_rng(
        card_count: usize,
        options: Options,
        initial_mode: Mode,
        mut rng: StdRng,
    ) -> Self {
        let grid = compute_grid_layout(card_count, &options.layout);
        let formations =
            FormationLibrary::create(card_count, &grid.bounds(), &mut rng);
        let mut camera = Camera::from_options(&options.camera);
        let _ = camera.frame_grid(
            grid.width,
            grid.height,
            options.camera.eye_height,
            options.camera.fit_margin,
        );

        let mut engine = Self {
            mode: Mode::Grid,
            initialized: false,
            rendered: RenderedPoses::at_positions(&grid.positions),
            pose_animator: PoseAnimator::new(
                options.transition.duration_secs,
                options.transition.easing,
            ),
            flips: FlipOverrides::new(card_count),
            camera,
            camera_animator: CameraAnimator::new(
                options.camera.transition_secs,
                options.camera.easing,
            ),
            views: CameraViewTable::from_named(&options.views),
            grid,
            formations,
            options,
            rng,
            now: 0.0,
        };
        engine.set_mode_kind(initial_mode);
        engine.initialized = true;
        log::info!(
            "deck engine ready: {card_count} cards, {} rows x {} columns",
            engine.grid.rows,
            engine.grid.columns
        );
        engine
    }

    /// Switch to the mode called `name`. Unknown names fall back to grid.
    pub fn set_mode(&mut self, name: &str) {
        let mode = name.parse().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to grid");
            Mode::Grid
        });
        self.set_mode_kind(mode);
    }

    /// Switch to `mode` at the time of the last update.
    ///
    /// Snapshots the rendered cards into a new crossfade (once initialized)
    /// and starts a camera glide when `mode` has a registered view. Any
    /// transition already in flight is replaced. Without a view the camera
    /// is not touched.
    pub fn set_mode_kind(&mut self, mode: Mode) {
        if self.initialized {
            log::info!(
                "layout mode: {} -> {mode} ({} formation)",
                self.mode,
                FormationLibrary::formation_name(mode),
            );
            self.pose_animator.begin(&self.rendered, self.now);
        }
        self.mode = mode;
        match self.views.get(mode) {
            Some(view) => {
                self.camera_animator.begin(&self.camera, *view, self.now);
            }
            None => log::debug!("no camera view for {mode}"),
        }
    }

    /// Update the viewport size, refitting the camera to the grid unless a
    /// camera glide is in flight.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        if self.camera_animator.is_transitioning() {
            return;
        }
        let _ = self.camera.frame_grid(
            self.grid.width,
            self.grid.height,
            self.options.camera.eye_height,
            self.options.camera.fit_margin,
        );
    }

    /// Toggle the face-down flip of card `index`. Only honoured in grid
    /// mode; returns whether the toggle was applied.
    pub fn toggle_flip(&mut self, index: usize) -> bool {
        if self.mode != Mode::Grid {
            return false;
        }
        match self.flips.toggle(index) {
            Some(flipped) => {
                log::debug!("card {index} flipped: {flipped}");
                true
            }
            None => false,
        }
    }
}
