//! Camera model, named views, timed glides between them, and grid framing.
//!
//! A mode with a registered [`CameraView`] glides the camera there through
//! [`CameraAnimator`]. Modes without a view leave the camera to the host's
//! orbit controls; only the grid refit on resize moves it.

mod core;
mod framing;
mod transition;
mod view;

pub use self::core::{Camera, DEFAULT_ASPECT};
pub use framing::fit_distance;
pub use transition::{CameraAnimator, CameraTransition};
pub use view::{CameraView, CameraViewTable};
