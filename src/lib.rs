// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural formation engine for animating a deck of cards in 3D.
//!
//! Tableau computes, every frame, where each card of a fixed-size deck sits,
//! how it is oriented and how much it bends. Cards cycle through eleven
//! time-driven formations (grid, float, spiral, helix, fountain, ...) and
//! every switch crossfades from whatever was on screen into the new
//! formation's live pose, while the camera glides to a per-mode named view.
//!
//! # Key entry points
//!
//! - [`engine::DeckEngine`] - the per-frame driver and mode controller
//! - [`formation::FormationLibrary`] - one state per formation, stepped in
//!   closed form from elapsed time
//! - [`collision::resolve_collisions`] - spatial-hash overlap relaxation
//! - [`animation::PoseAnimator`] - snapshot-then-blend card transitions
//! - [`camera::CameraAnimator`] - named-view camera transitions
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame order
//!
//! Each call to [`engine::DeckEngine::update`] runs, in order: the active
//! formation's step, collision resolution (float only), the per-card pose
//! blend, and the camera blend. Rendering is left to the host through
//! [`engine::CardSink`].

pub mod animation;
pub mod camera;
pub mod collision;
pub mod engine;
pub mod error;
pub mod formation;
pub mod layout;
pub mod mode;
pub mod options;
pub mod util;
